// Dashboard figures derived from the current simulation window.
use serde::{Deserialize, Serialize};

use crate::models::{CandleRecord, Signal};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Bullish,
    Bearish,
    Neutral,
}

impl Sentiment {
    /// Relative move across the window needed to call a direction.
    pub const THRESHOLD: f64 = 0.001;

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Bullish => "BULLISH",
            Sentiment::Bearish => "BEARISH",
            Sentiment::Neutral => "NEUTRAL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSummary {
    pub sentiment: Sentiment,
    /// Mean high-low range per candle.
    pub volatility: f64,
    /// Share of BUY/SELL signals whose next candle moved the signalled way.
    /// `None` when no signal has a follow-up candle yet.
    pub estimated_win_rate: Option<f64>,
    pub latest_signal: Signal,
}

impl WindowSummary {
    pub fn from_window(window: &[CandleRecord]) -> Option<Self> {
        let first = window.first()?;
        let last = window.last()?;

        let change = if first.open != 0.0 { (last.close - first.open) / first.open } else { 0.0 };
        let sentiment = if change > Sentiment::THRESHOLD {
            Sentiment::Bullish
        } else if change < -Sentiment::THRESHOLD {
            Sentiment::Bearish
        } else {
            Sentiment::Neutral
        };

        let volatility = window.iter().map(|c| c.high - c.low).sum::<f64>() / window.len() as f64;

        let mut evaluated = 0u32;
        let mut wins = 0u32;
        for pair in window.windows(2) {
            let (current, next) = (&pair[0], &pair[1]);
            let won = match current.signal {
                Signal::Buy => next.close > current.close,
                Signal::Sell => next.close < current.close,
                Signal::Hold => continue,
            };
            evaluated += 1;
            if won {
                wins += 1;
            }
        }
        let estimated_win_rate = (evaluated > 0).then(|| wins as f64 / evaluated as f64);

        Some(Self { sentiment, volatility, estimated_win_rate, latest_signal: last.signal })
    }
}

/// Most recent BUY/SELL records, newest first.
pub fn recent_signals(window: &[CandleRecord], limit: usize) -> Vec<&CandleRecord> {
    window.iter().rev().filter(|c| c.signal != Signal::Hold).take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(open: f64, close: f64, signal: Signal) -> CandleRecord {
        CandleRecord {
            timestamp: "00:00".to_string(),
            open,
            high: open.max(close) + 5.0,
            low: open.min(close) - 5.0,
            close,
            volume: 100,
            oscillator_value: 50.0,
            signal,
        }
    }

    #[test]
    fn test_empty_window_has_no_summary() {
        assert!(WindowSummary::from_window(&[]).is_none());
    }

    #[test]
    fn test_bullish_window() {
        let window = vec![
            candle(100.0, 101.0, Signal::Buy),
            candle(101.0, 103.0, Signal::Sell),
            candle(103.0, 102.0, Signal::Hold),
        ];
        let summary = WindowSummary::from_window(&window).unwrap();
        assert_eq!(summary.sentiment, Sentiment::Bullish);
        assert_eq!(summary.latest_signal, Signal::Hold);
        // Ranges: 11, 12, 11.
        assert!((summary.volatility - 34.0 / 3.0).abs() < 1e-9);
        // BUY at 101 followed by 103 wins, SELL at 103 followed by 102 wins.
        assert_eq!(summary.estimated_win_rate, Some(1.0));
    }

    #[test]
    fn test_bearish_and_neutral() {
        let bearish = vec![candle(100.0, 95.0, Signal::Hold), candle(95.0, 90.0, Signal::Hold)];
        let summary = WindowSummary::from_window(&bearish).unwrap();
        assert_eq!(summary.sentiment, Sentiment::Bearish);
        assert_eq!(summary.estimated_win_rate, None);

        let flat = vec![candle(100.0, 100.05, Signal::Hold)];
        assert_eq!(WindowSummary::from_window(&flat).unwrap().sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_losing_signal_counts() {
        let window = vec![candle(100.0, 101.0, Signal::Buy), candle(101.0, 99.0, Signal::Hold)];
        assert_eq!(WindowSummary::from_window(&window).unwrap().estimated_win_rate, Some(0.0));
    }

    #[test]
    fn test_recent_signals_newest_first() {
        let window = vec![
            candle(1.0, 2.0, Signal::Buy),
            candle(2.0, 3.0, Signal::Hold),
            candle(3.0, 2.0, Signal::Sell),
            candle(2.0, 2.5, Signal::Hold),
        ];
        let recent = recent_signals(&window, 5);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].signal, Signal::Sell);
        assert_eq!(recent[1].signal, Signal::Buy);
        assert_eq!(recent_signals(&window, 1).len(), 1);
    }
}
