// Ready-made strategy configurations offered in the preset palette.
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::catalog::IndicatorKind;
use crate::models::{BotStyle, Language, StrategyRequest, TimeFrame};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preset {
    Scalp,
    Swing,
    Trend,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Scalp, Preset::Swing, Preset::Trend];

    pub fn label(&self) -> &'static str {
        match self {
            Preset::Scalp => "SCALP (5m)",
            Preset::Swing => "SWING (15m/4H)",
            Preset::Trend => "TREND (4H)",
        }
    }

    pub fn description(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (Preset::Scalp, Language::En) => "Fast executions, Bollinger & RSI",
            (Preset::Scalp, Language::Tr) => "Hızlı işlemler, Bollinger & RSI",
            (Preset::Swing, Language::En) => "Multi-Timeframe, Flawless Entry",
            (Preset::Swing, Language::Tr) => "Çoklu Zaman Dilimi, Kusursuz Giriş",
            (Preset::Trend, Language::En) => "Major Moves, SuperTrend",
            (Preset::Trend, Language::Tr) => "Büyük Hareketler, SuperTrend",
        }
    }

    /// Strategy notes written into the request's free-text field.
    pub fn note(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (Preset::Scalp, Language::En) => "STRATEGY: 'HYPER SCALP'.\n1. TIMEFRAME: 5 Minutes (5m).\n2. INDICATORS: Bollinger Bands (20, 2), RSI (14), EMA (200).\n3. LOGIC: LONG if Price touches Lower Band AND RSI < 30 AND Price > EMA 200. SHORT if touches Upper Band AND RSI > 70 AND Price < EMA 200.\n4. GOAL: Quick profits (1:1.5 R/R). Tight stops.",
            (Preset::Scalp, Language::Tr) => "STRATEJİ: 'HYPER SCALP'.\n1. ZAMAN: 5 Dakikalık (5m).\n2. İNDİKATÖRLER: Bollinger Bands (20, 2), RSI (14), EMA (200).\n3. MANTIK: Fiyat Bollinger Alt bandına değerse VE RSI < 30 ise VE Fiyat > EMA 200 ise LONG. Tam tersi için SHORT.\n4. HEDEF: Küçük ve hızlı karlar (1:1.5 R/R). Stop Loss dar tutulmalı.",
            (Preset::Swing, Language::En) => "STRATEGY: 'THE PERFECT SWING (OPTIMIZED)'.\n1. TIMEFRAME: Chart 15m. Trend Filter 4h (240).\n2. INDICATORS: EMA 50, EMA 200, RSI 14, VWAP.\n3. TREND FILTER (4H): EMA50 > EMA200 = UPTREND.\n4. LONG LOGIC: Trend Up + Price NEAR EMA50 (within 1-2% range, not exact touch) + RSI < 60 turning up + Price > VWAP.\n5. GOAL: Relax conditions slightly to ensure trades execute. Fix 'Zero Trades' issue.\n6. RISK: Stop Loss = ATR x 2 or Swing Low. TP = Risk x 2.",
            (Preset::Swing, Language::Tr) => "STRATEJİ: 'MÜKEMMEL SWING (GELİŞMİŞ)'.\n1. ZAMAN: Grafik 15 Dakikalık (15m). Trend Filtresi 4 Saatlik (240).\n2. İNDİKATÖRLER: EMA 50, EMA 200, RSI 14, VWAP.\n3. TREND FİLTRESİ (4H): EMA50 > EMA200 ise YÜKSELİŞ TRENDİ. \n4. LONG MANTIĞI: Trend Yukarı + Fiyat EMA50'ye YAKIN (exact touch gerekmez, %1-2 range) + RSI < 60 ve yukarı dönüyor + Fiyat > VWAP.\n5. HEDEF: İşlem sıklığını artırmak için koşulları esnet. 'Sıfır işlem' sorununu çöz.\n6. RİSK: Stop Loss = ATR x 2 veya Swing Low. Take Profit = Risk x 2.",
            (Preset::Trend, Language::En) => "STRATEGY: 'MAJOR TREND'.\n1. TIMEFRAME: 4 Hours (4H) or Daily (1D).\n2. INDICATORS: SuperTrend, MACD, ADX.\n3. LOGIC: LONG if ADX > 20 (Trend Start) AND SuperTrend is Green AND MACD > Signal.\n4. EXIT: When SuperTrend flips or MACD cross under.\n5. RISK: Use Trailing Stop.",
            (Preset::Trend, Language::Tr) => "STRATEJİ: 'MAJOR TREND'.\n1. ZAMAN: 4 Saatlik (4H) veya Günlük (1D).\n2. İNDİKATÖRLER: SuperTrend, MACD, ADX.\n3. MANTIK: ADX > 20 (Trend Başlangıcı) iken SuperTrend BUY sinyali verirse VE MACD > Signal ise LONG.\n4. ÇIKIŞ: SuperTrend yön değiştirdiğinde veya MACD ters kestiğinde.\n5. RİSK: İz süren Stop (Trailing Stop) kullan.",
        }
    }

    fn lookback_days(&self) -> i64 {
        match self {
            Preset::Scalp => 30,
            Preset::Swing | Preset::Trend => 90,
        }
    }

    /// Builds a fresh request from this preset. The language of `base` is
    /// kept; every other field is replaced.
    pub fn apply(&self, base: &StrategyRequest, today: NaiveDate) -> StrategyRequest {
        let (risk_level, indicators, timeframe, style) = match self {
            Preset::Scalp => (
                8,
                vec![IndicatorKind::Bollinger, IndicatorKind::Rsi],
                TimeFrame::Minute5,
                BotStyle::Scalp,
            ),
            Preset::Swing => (
                5,
                vec![IndicatorKind::EmaCross, IndicatorKind::Rsi, IndicatorKind::Vwap],
                TimeFrame::Minute15,
                BotStyle::Swing,
            ),
            Preset::Trend => (
                3,
                vec![IndicatorKind::SuperTrend, IndicatorKind::Macd, IndicatorKind::Adx],
                TimeFrame::Hour4,
                BotStyle::Trend,
            ),
        };

        StrategyRequest {
            risk_level,
            indicators,
            timeframe,
            style,
            start_date: today - Duration::days(self.lookback_days()),
            end_date: today,
            notes: self.note(base.language).to_string(),
            language: base.language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }

    #[test]
    fn test_scalp_preset() {
        let base = StrategyRequest::default_for(today(), Language::En);
        let req = Preset::Scalp.apply(&base, today());
        assert_eq!(req.risk_level, 8);
        assert_eq!(req.indicators, vec![IndicatorKind::Bollinger, IndicatorKind::Rsi]);
        assert_eq!(req.timeframe, TimeFrame::Minute5);
        assert_eq!(req.style, BotStyle::Scalp);
        assert_eq!(req.start_date, NaiveDate::from_ymd_opt(2025, 5, 31).unwrap());
        assert_eq!(req.end_date, today());
        assert!(req.notes.starts_with("STRATEGY: 'HYPER SCALP'"));
    }

    #[test]
    fn test_swing_and_trend_look_back_ninety_days() {
        let base = StrategyRequest::default_for(today(), Language::En);
        for preset in [Preset::Swing, Preset::Trend] {
            let req = preset.apply(&base, today());
            assert_eq!(req.start_date, NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
            assert!(req.validate().is_ok());
        }
        assert_eq!(Preset::Trend.apply(&base, today()).timeframe, TimeFrame::Hour4);
    }

    #[test]
    fn test_preset_keeps_language() {
        let mut base = StrategyRequest::default_for(today(), Language::Tr);
        base.notes = "eski not".to_string();
        let req = Preset::Swing.apply(&base, today());
        assert_eq!(req.language, Language::Tr);
        assert!(req.notes.starts_with("STRATEJİ: 'MÜKEMMEL SWING"));
    }
}
