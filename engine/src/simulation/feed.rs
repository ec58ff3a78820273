// Rolling window of simulated candles.
use chrono::{DateTime, Duration, Local};
use shared::CandleRecord;
use std::collections::VecDeque;
use std::sync::Arc;

use super::generator::{CandleSynth, SEED_PRICE};
use super::random::{RandomSource, StdRandom};
use crate::error::EngineError;

const HISTORY_LABEL_FORMAT: &str = "%H:%M";
const LIVE_LABEL_FORMAT: &str = "%H:%M:%S";

/// Immutable copy of the window handed to consumers after every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSnapshot {
    /// Number of advances applied since initialization.
    pub sequence: u64,
    pub candles: Vec<CandleRecord>,
}

pub type SharedSnapshot = Arc<MarketSnapshot>;

/// Fixed-capacity window; `initialize` and `advance` are its only mutators.
pub struct MarketFeed<R: RandomSource = StdRandom> {
    window: VecDeque<CandleRecord>,
    capacity: usize,
    synth: CandleSynth,
    rng: R,
    sequence: u64,
}

impl<R: RandomSource> MarketFeed<R> {
    pub fn initialize(window_size: usize, rng: R) -> Result<Self, EngineError> {
        Self::initialize_at(window_size, rng, Local::now())
    }

    /// Bulk-generates `window_size` candles spaced one hour apart, the
    /// newest one hour before `now`.
    pub fn initialize_at(window_size: usize, mut rng: R, now: DateTime<Local>) -> Result<Self, EngineError> {
        if window_size == 0 {
            return Err(EngineError::InvalidInput("window size must be at least 1".to_string()));
        }

        let mut synth = CandleSynth::new(SEED_PRICE);
        let mut window = VecDeque::with_capacity(window_size);
        for i in 0..window_size {
            let at = now - Duration::hours((window_size - i) as i64);
            window.push_back(synth.step(&mut rng, at.format(HISTORY_LABEL_FORMAT).to_string()));
        }

        tracing::debug!(window_size, last_close = synth.price(), "Market feed initialized");

        Ok(Self { window, capacity: window_size, synth, rng, sequence: 0 })
    }

    /// Entry point for configured sizes, which arrive signed.
    pub fn initialize_signed(window_size: i64, rng: R) -> Result<Self, EngineError> {
        if window_size <= 0 {
            return Err(EngineError::InvalidInput(format!("window size must be at least 1, got {}", window_size)));
        }
        Self::initialize(window_size as usize, rng)
    }

    pub fn advance(&mut self) -> &CandleRecord {
        self.advance_at(Local::now())
    }

    /// Evicts the oldest candle and appends one new candle stitched onto
    /// the previous close.
    pub fn advance_at(&mut self, now: DateTime<Local>) -> &CandleRecord {
        let mut next = self.synth.step(&mut self.rng, now.format(LIVE_LABEL_FORMAT).to_string());

        // Continuity holds by construction already; the override pins it
        // even if the synth state is ever reseeded.
        if let Some(previous) = self.window.back() {
            next.open = previous.close;
            next.high = next.high.max(next.open);
            next.low = next.low.min(next.open);
        }

        self.window.pop_front();
        self.window.push_back(next);
        self.sequence += 1;

        &self.window[self.window.len() - 1]
    }

    pub fn window(&self) -> Vec<CandleRecord> {
        self.window.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CandleRecord> {
        self.window.iter()
    }

    pub fn last(&self) -> Option<&CandleRecord> {
        self.window.back()
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn snapshot(&self) -> MarketSnapshot {
        MarketSnapshot { sequence: self.sequence, candles: self.window() }
    }
}
