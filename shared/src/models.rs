use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::catalog::IndicatorKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("Risk level {0} is outside the 1-10 scale")]
    RiskOutOfRange(u32),

    #[error("At least one indicator must be selected")]
    NoIndicators,

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

fn unknown(kind: &'static str, value: &str) -> ModelError {
    ModelError::UnknownVariant { kind, value: value.to_string() }
}

// --- Market simulation records ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Signal {
    pub const OVERSOLD: f64 = 30.0;
    pub const OVERBOUGHT: f64 = 70.0;

    /// Mock trading signal for one candle. BUY and SELL sit on disjoint
    /// oscillator ranges, so at most one of them can match.
    pub fn derive(oscillator_value: f64, delta: f64) -> Self {
        if oscillator_value < Self::OVERSOLD && delta > 0.0 {
            Signal::Buy
        } else if oscillator_value > Self::OVERBOUGHT && delta < 0.0 {
            Signal::Sell
        } else {
            Signal::Hold
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::Hold => "HOLD",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Signal {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BUY" => Ok(Signal::Buy),
            "SELL" => Ok(Signal::Sell),
            "HOLD" => Ok(Signal::Hold),
            _ => Err(unknown("signal", s)),
        }
    }
}

/// One simulated OHLCV observation plus the mock oscillator and signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleRecord {
    pub timestamp: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    pub oscillator_value: f64,
    pub signal: Signal,
}

impl CandleRecord {
    /// `low <= min(open, close)` and `high >= max(open, close)`.
    pub fn is_well_formed(&self) -> bool {
        self.low <= self.open.min(self.close) && self.high >= self.open.max(self.close)
    }

    pub fn delta(&self) -> f64 {
        self.close - self.open
    }
}

// --- Strategy request ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "tr")]
    Tr,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tr => "tr",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Tr,
            Language::Tr => Language::En,
        }
    }

    /// Name of the language as written into generation prompts.
    pub fn prompt_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Tr => "Turkish",
        }
    }

    /// The single user-facing message for any failed generation.
    pub fn generation_failure_message(&self) -> &'static str {
        match self {
            Language::En => "Algorithm compilation error.",
            Language::Tr => "Algoritma derleme hatası.",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "tr" => Ok(Language::Tr),
            _ => Err(unknown("language", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BotStyle {
    Scalp,
    Swing,
    Trend,
    Hft,
}

impl BotStyle {
    pub const ALL: [BotStyle; 4] = [BotStyle::Scalp, BotStyle::Swing, BotStyle::Trend, BotStyle::Hft];

    pub fn as_str(&self) -> &'static str {
        match self {
            BotStyle::Scalp => "SCALP",
            BotStyle::Swing => "SWING",
            BotStyle::Trend => "TREND",
            BotStyle::Hft => "HFT",
        }
    }

    pub fn description(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (BotStyle::Scalp, Language::En) => "High Frequency / Aggressive",
            (BotStyle::Scalp, Language::Tr) => "Yüksek Frekans / Agresif",
            (BotStyle::Swing, Language::En) => "Medium Term / Trend",
            (BotStyle::Swing, Language::Tr) => "Orta Vade / Trend",
            (BotStyle::Trend, Language::En) => "Long Term / Safe",
            (BotStyle::Trend, Language::Tr) => "Uzun Vade / Güvenli",
            (BotStyle::Hft, Language::En) => "Experimental / Microsecond",
            (BotStyle::Hft, Language::Tr) => "Deneysel / Mikrosaniye",
        }
    }
}

impl fmt::Display for BotStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BotStyle {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SCALP" => Ok(BotStyle::Scalp),
            "SWING" => Ok(BotStyle::Swing),
            "TREND" => Ok(BotStyle::Trend),
            "HFT" => Ok(BotStyle::Hft),
            _ => Err(unknown("style", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TimeFrame {
    #[serde(rename = "1m")]
    Minute1,
    #[serde(rename = "5m")]
    Minute5,
    #[serde(rename = "15m")]
    Minute15,
    #[serde(rename = "1h")]
    Hour1,
    #[serde(rename = "4h")]
    Hour4,
    #[serde(rename = "1d")]
    Day1,
}

impl TimeFrame {
    pub const ALL: [TimeFrame; 6] = [
        TimeFrame::Minute1,
        TimeFrame::Minute5,
        TimeFrame::Minute15,
        TimeFrame::Hour1,
        TimeFrame::Hour4,
        TimeFrame::Day1,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeFrame::Minute1 => "1m",
            TimeFrame::Minute5 => "5m",
            TimeFrame::Minute15 => "15m",
            TimeFrame::Hour1 => "1h",
            TimeFrame::Hour4 => "4h",
            TimeFrame::Day1 => "1d",
        }
    }
}

impl fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeFrame {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeFrame::ALL
            .iter()
            .copied()
            .find(|tf| tf.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| unknown("timeframe", s))
    }
}

/// User-chosen parameters for one strategy generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyRequest {
    pub risk_level: u32,
    pub indicators: Vec<IndicatorKind>,
    pub timeframe: TimeFrame,
    pub style: BotStyle,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub notes: String,
    pub language: Language,
}

impl StrategyRequest {
    pub const MIN_RISK: u32 = 1;
    pub const MAX_RISK: u32 = 10;
    pub const DATE_FORMAT: &'static str = "%Y-%m-%d";

    /// Form defaults: medium risk, RSI/MACD/SuperTrend on 15m, last 30 days.
    pub fn default_for(today: NaiveDate, language: Language) -> Self {
        Self {
            risk_level: 5,
            indicators: vec![IndicatorKind::Rsi, IndicatorKind::Macd, IndicatorKind::SuperTrend],
            timeframe: TimeFrame::Minute15,
            style: BotStyle::Scalp,
            start_date: today - Duration::days(30),
            end_date: today,
            notes: String::new(),
            language,
        }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if !(Self::MIN_RISK..=Self::MAX_RISK).contains(&self.risk_level) {
            return Err(ModelError::RiskOutOfRange(self.risk_level));
        }
        if self.indicators.is_empty() {
            return Err(ModelError::NoIndicators);
        }
        Ok(())
    }

    /// Advisory only; an inverted range is still forwarded as-is.
    pub fn has_ordered_dates(&self) -> bool {
        self.end_date >= self.start_date
    }

    pub fn toggle_indicator(&mut self, kind: IndicatorKind) {
        if let Some(pos) = self.indicators.iter().position(|k| *k == kind) {
            self.indicators.remove(pos);
        } else {
            self.indicators.push(kind);
        }
    }

    pub fn parse_date(s: &str) -> Result<NaiveDate, ModelError> {
        NaiveDate::parse_from_str(s.trim(), Self::DATE_FORMAT)
            .map_err(|_| ModelError::InvalidDate(s.to_string()))
    }
}

/// Result of one generation: a named script plus its explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedArtifact {
    pub name: String,
    pub code: String,
    pub explanation: String,
}
