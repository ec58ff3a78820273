// Random-walk candle synthesis. The trend itself random-walks, so price
// moves carry momentum instead of being pure noise.
use shared::{CandleRecord, Signal};

use super::random::RandomSource;

pub const SEED_PRICE: f64 = 50_000.0;

const TREND_STEP: f64 = 10.0;
const DELTA_SPREAD: f64 = 500.0;
const WICK_MAX: f64 = 100.0;
const VOLUME_BASE: u64 = 100;
const VOLUME_SPAN: f64 = 1000.0;
const OSCILLATOR_BASE: f64 = 30.0;
const OSCILLATOR_SPAN: f64 = 40.0;
const OSCILLATOR_BIAS: f64 = 10.0;

/// Running price and trend carried from one candle to the next.
#[derive(Debug, Clone, PartialEq)]
pub struct CandleSynth {
    price: f64,
    trend: f64,
}

impl CandleSynth {
    pub fn new(seed_price: f64) -> Self {
        Self { price: seed_price, trend: 0.0 }
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn trend(&self) -> f64 {
        self.trend
    }

    /// Draws six values from `rng`, in order: trend nudge, delta noise,
    /// upper wick, lower wick, volume, oscillator.
    pub fn step<R: RandomSource + ?Sized>(&mut self, rng: &mut R, timestamp: String) -> CandleRecord {
        self.trend += (rng.next_unit() - 0.5) * TREND_STEP;
        let delta = (rng.next_unit() - 0.5) * DELTA_SPREAD + self.trend;

        let open = self.price;
        let close = open + delta;
        let high = open.max(close) + rng.next_unit() * WICK_MAX;
        let low = open.min(close) - rng.next_unit() * WICK_MAX;
        let volume = (rng.next_unit() * VOLUME_SPAN).floor() as u64 + VOLUME_BASE;

        // Not clamped to [0, 100].
        let bias = if self.trend > 0.0 { OSCILLATOR_BIAS } else { -OSCILLATOR_BIAS };
        let oscillator_value = OSCILLATOR_BASE + rng.next_unit() * OSCILLATOR_SPAN + bias;

        self.price = close;

        CandleRecord {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
            oscillator_value,
            signal: Signal::derive(oscillator_value, delta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::random::{ScriptedRandom, StdRandom};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_midpoint_draws_give_flat_hold_candle() {
        let mut synth = CandleSynth::new(SEED_PRICE);
        let mut rng = ScriptedRandom::new(vec![0.5]);
        let candle = synth.step(&mut rng, "10:00".to_string());

        assert_eq!(candle.open, 50_000.0);
        assert_eq!(candle.close, 50_000.0);
        assert_eq!(candle.high, 50_050.0);
        assert_eq!(candle.low, 49_950.0);
        assert_eq!(candle.volume, 600);
        // Zero trend counts as non-positive: 30 + 20 - 10.
        assert_eq!(candle.oscillator_value, 40.0);
        assert_eq!(candle.signal, Signal::Hold);
        assert_eq!(candle.timestamp, "10:00");
    }

    #[test]
    fn test_buy_candle() {
        let mut synth = CandleSynth::new(SEED_PRICE);
        let mut rng = ScriptedRandom::new(vec![0.5, 0.9, 0.1, 0.1, 0.2, 0.1]);
        let candle = synth.step(&mut rng, "t".to_string());

        assert!(approx(candle.close, 50_200.0));
        assert!(approx(candle.high, 50_210.0));
        assert!(approx(candle.low, 49_990.0));
        assert_eq!(candle.volume, 300);
        assert!(approx(candle.oscillator_value, 24.0));
        assert_eq!(candle.signal, Signal::Buy);
        assert!(approx(synth.price(), candle.close));
    }

    #[test]
    fn test_sell_candle_with_positive_trend() {
        let mut synth = CandleSynth::new(SEED_PRICE);
        let mut rng = ScriptedRandom::new(vec![0.6, 0.1, 0.5, 0.5, 0.5, 0.95]);
        let candle = synth.step(&mut rng, "t".to_string());

        assert!(approx(synth.trend(), 1.0));
        assert!(approx(candle.close, 49_801.0));
        assert!(approx(candle.oscillator_value, 78.0));
        assert_eq!(candle.signal, Signal::Sell);
    }

    #[test]
    fn test_trend_carries_between_steps() {
        let mut synth = CandleSynth::new(SEED_PRICE);
        let mut rng = ScriptedRandom::new(vec![1.0, 0.5, 0.0, 0.0, 0.0, 0.0]);
        let first = synth.step(&mut rng, "a".to_string());
        let second = synth.step(&mut rng, "b".to_string());

        assert!(approx(synth.trend(), 10.0));
        // Delta noise is zero, so each move equals the accumulated trend.
        assert!(approx(first.delta(), 5.0));
        assert!(approx(second.delta(), 10.0));
        assert_eq!(second.open, first.close);
    }

    #[test]
    fn test_random_candles_are_well_formed() {
        let mut synth = CandleSynth::new(SEED_PRICE);
        let mut rng = StdRandom::seeded(42);
        for i in 0..2_000 {
            let candle = synth.step(&mut rng, i.to_string());
            assert!(candle.is_well_formed(), "candle {} broke the OHLC envelope: {:?}", i, candle);
            assert!((100..1100).contains(&candle.volume));
            assert_eq!(candle.signal, Signal::derive(candle.oscillator_value, candle.delta()));
        }
    }
}
