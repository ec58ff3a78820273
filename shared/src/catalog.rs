// Fixed catalog of indicators a strategy can be built from.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::{Language, ModelError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicatorKind {
    #[serde(rename = "SuperTrend")]
    SuperTrend,
    #[serde(rename = "RSI")]
    Rsi,
    #[serde(rename = "MACD")]
    Macd,
    #[serde(rename = "EMA Cross")]
    EmaCross,
    #[serde(rename = "Bollinger")]
    Bollinger,
    #[serde(rename = "ATR")]
    Atr,
    #[serde(rename = "VWAP")]
    Vwap,
    #[serde(rename = "Stoch")]
    Stoch,
    #[serde(rename = "Stoch RSI")]
    StochRsi,
    #[serde(rename = "ADX")]
    Adx,
    #[serde(rename = "Ichimoku Cloud")]
    Ichimoku,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 11] = [
        IndicatorKind::SuperTrend,
        IndicatorKind::Rsi,
        IndicatorKind::Macd,
        IndicatorKind::EmaCross,
        IndicatorKind::Bollinger,
        IndicatorKind::Atr,
        IndicatorKind::Vwap,
        IndicatorKind::Stoch,
        IndicatorKind::StochRsi,
        IndicatorKind::Adx,
        IndicatorKind::Ichimoku,
    ];

    /// Identifier used in prompts and on the wire.
    pub fn id(&self) -> &'static str {
        match self {
            IndicatorKind::SuperTrend => "SuperTrend",
            IndicatorKind::Rsi => "RSI",
            IndicatorKind::Macd => "MACD",
            IndicatorKind::EmaCross => "EMA Cross",
            IndicatorKind::Bollinger => "Bollinger",
            IndicatorKind::Atr => "ATR",
            IndicatorKind::Vwap => "VWAP",
            IndicatorKind::Stoch => "Stoch",
            IndicatorKind::StochRsi => "Stoch RSI",
            IndicatorKind::Adx => "ADX",
            IndicatorKind::Ichimoku => "Ichimoku Cloud",
        }
    }

    /// Short button label.
    pub fn label(&self) -> &'static str {
        match self {
            IndicatorKind::Ichimoku => "Ichimoku",
            other => other.id(),
        }
    }

    pub fn description(&self, lang: Language) -> &'static str {
        use IndicatorKind::*;
        match (self, lang) {
            (SuperTrend, Language::En) => "Trend-following indicator based on ATR. Great for trailing stops.",
            (SuperTrend, Language::Tr) => "ATR tabanlı trend takipçisi. İz süren stoplar için ideal.",
            (Rsi, Language::En) => "Measures speed/change of price movements. Identifies overbought/oversold levels.",
            (Rsi, Language::Tr) => "Fiyat hareketlerinin hızını ölçer. Aşırı alım/satım bölgelerini gösterir.",
            (Macd, Language::En) => "Trend-following momentum indicator showing relationship between two EMAs.",
            (Macd, Language::Tr) => "İki EMA arasındaki ilişkiyi gösteren trend takipçisi momentum indikatörü.",
            (EmaCross, Language::En) => "Classic strategy trading the crossover of fast and slow moving averages.",
            (EmaCross, Language::Tr) => "Hızlı ve yavaş hareketli ortalamaların kesişimini kullanan klasik strateji.",
            (Bollinger, Language::En) => "Volatility bands placed above and below a moving average.",
            (Bollinger, Language::Tr) => "Hareketli ortalamanın altında ve üstünde yer alan volatilite bantları.",
            (Atr, Language::En) => "Measures market volatility. Essential for calculating dynamic Stop Loss.",
            (Atr, Language::Tr) => "Piyasa volatilitesini ölçer. Dinamik Stop Loss hesaplaması için kritiktir.",
            (Vwap, Language::En) => "Volume Weighted Average Price. Institutional benchmark for intraday value.",
            (Vwap, Language::Tr) => "Hacim Ağırlıklı Ortalama Fiyat. Gün içi değer için kurumsal referans.",
            (Stoch, Language::En) => "Stochastic Oscillator. Compares closing price to a price range.",
            (Stoch, Language::Tr) => "Stokastik Osilatör. Kapanış fiyatını bir fiyat aralığı ile karşılaştırır.",
            (StochRsi, Language::En) => "Applies Stochastic formula to RSI values. Higher sensitivity.",
            (StochRsi, Language::Tr) => "RSI değerlerine Stokastik formülü uygular. Daha yüksek hassasiyet sağlar.",
            (Adx, Language::En) => "Average Directional Index. Quantifies trend strength regardless of direction.",
            (Adx, Language::Tr) => "Ortalama Yönsel Endeks. Yönden bağımsız olarak trendin gücünü ölçer.",
            (Ichimoku, Language::En) => "Comprehensive system defining support, resistance, trend direction, and momentum.",
            (Ichimoku, Language::Tr) => "Destek, direnç, trend yönü ve momentumu tanımlayan kapsamlı sistem.",
        }
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for IndicatorKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        IndicatorKind::ALL
            .iter()
            .copied()
            .find(|k| k.id().eq_ignore_ascii_case(wanted) || k.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ModelError::UnknownVariant { kind: "indicator", value: s.to_string() })
    }
}
