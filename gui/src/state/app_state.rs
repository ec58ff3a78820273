// Global application state for the GUI, provided to every component as
// a Signal<AppState> context.
use chrono::NaiveDate;
use engine::simulation::MarketSnapshot;
use shared::presets::Preset;
use shared::summary::{recent_signals, WindowSummary};
use shared::{CandleRecord, GeneratedArtifact, IndicatorKind, Language, StrategyRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Strategy,
    Simulation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    Connecting,
    Ready,
    /// Engine unreachable or refused to start. Nothing else is rendered.
    Halted(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub language: Language,
    pub active_tab: Tab,
    pub connection: ConnectionState,

    pub window: Vec<CandleRecord>,
    pub sequence: u64,

    pub request: StrategyRequest,
    pub result: Option<GeneratedArtifact>,
    pub loading: bool,
    pub error_message: Option<String>,
    /// Bumped on every submission; only the newest outcome is kept.
    pub generation: u64,

    pub copied: bool,
    /// Bumped on every copy; a reset only applies to the latest one.
    pub copy_ticket: u64,
    pub show_guide: bool,
    pub show_presets: bool,
}

impl AppState {
    pub fn new(language: Language, today: NaiveDate) -> Self {
        Self {
            language,
            active_tab: Tab::Strategy,
            connection: ConnectionState::Connecting,
            window: Vec::new(),
            sequence: 0,
            request: StrategyRequest::default_for(today, language),
            result: None,
            loading: false,
            error_message: None,
            generation: 0,
            copied: false,
            copy_ticket: 0,
            show_guide: false,
            show_presets: false,
        }
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggle();
        self.request.language = self.language;
    }

    /// Replaces the whole window. Older snapshots arriving late are ignored.
    pub fn apply_window(&mut self, snapshot: MarketSnapshot) -> bool {
        if !self.window.is_empty() && snapshot.sequence < self.sequence {
            return false;
        }
        self.sequence = snapshot.sequence;
        self.window = snapshot.candles;
        true
    }

    pub fn halt(&mut self, reason: impl Into<String>) {
        self.connection = ConnectionState::Halted(reason.into());
        self.loading = false;
    }

    pub fn is_ready(&self) -> bool {
        self.connection == ConnectionState::Ready
    }

    pub fn apply_preset(&mut self, preset: Preset, today: NaiveDate) {
        self.request = preset.apply(&self.request, today);
        self.show_presets = false;
    }

    pub fn toggle_indicator(&mut self, kind: IndicatorKind) {
        self.request.toggle_indicator(kind);
    }

    pub fn set_risk(&mut self, risk: u32) {
        self.request.risk_level = risk.clamp(StrategyRequest::MIN_RISK, StrategyRequest::MAX_RISK);
    }

    /// Date inputs only overwrite the field when the text parses.
    pub fn set_start_date(&mut self, raw: &str) -> bool {
        match StrategyRequest::parse_date(raw) {
            Ok(date) => {
                self.request.start_date = date;
                true
            }
            Err(_) => false,
        }
    }

    pub fn set_end_date(&mut self, raw: &str) -> bool {
        match StrategyRequest::parse_date(raw) {
            Ok(date) => {
                self.request.end_date = date;
                true
            }
            Err(_) => false,
        }
    }

    /// Returns the ticket and a frozen copy of the request to submit.
    pub fn begin_generation(&mut self) -> (u64, StrategyRequest) {
        self.generation += 1;
        self.loading = true;
        self.result = None;
        self.error_message = None;
        self.copied = false;

        let mut request = self.request.clone();
        request.language = self.language;
        (self.generation, request)
    }

    /// Applies an outcome if it belongs to the newest submission.
    pub fn finish_generation(&mut self, ticket: u64, outcome: Result<GeneratedArtifact, String>) -> bool {
        if ticket != self.generation {
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(artifact) => self.result = Some(artifact),
            Err(message) => self.error_message = Some(message),
        }
        true
    }

    pub fn mark_copied(&mut self) -> u64 {
        self.copy_ticket += 1;
        self.copied = true;
        self.copy_ticket
    }

    /// Clears the badge unless a newer copy happened since `ticket`.
    pub fn clear_copied(&mut self, ticket: u64) -> bool {
        if ticket != self.copy_ticket {
            return false;
        }
        self.copied = false;
        true
    }

    pub fn summary(&self) -> Option<WindowSummary> {
        WindowSummary::from_window(&self.window)
    }

    pub fn execution_log(&self, limit: usize) -> Vec<CandleRecord> {
        recent_signals(&self.window, limit).into_iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{BotStyle, Signal, TimeFrame};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
    }

    fn candle(label: &str, signal: Signal) -> CandleRecord {
        CandleRecord {
            timestamp: label.to_string(),
            open: 100.0,
            high: 110.0,
            low: 90.0,
            close: 105.0,
            volume: 300,
            oscillator_value: 50.0,
            signal,
        }
    }

    fn artifact(name: &str) -> GeneratedArtifact {
        GeneratedArtifact { name: name.to_string(), code: "//@version=5".to_string(), explanation: "x".to_string() }
    }

    #[test]
    fn test_new_state_uses_form_defaults() {
        let state = AppState::new(Language::Tr, today());
        assert_eq!(state.connection, ConnectionState::Connecting);
        assert_eq!(state.active_tab, Tab::Strategy);
        assert_eq!(state.request.language, Language::Tr);
        assert_eq!(state.request.risk_level, 5);
        assert!(state.window.is_empty());
    }

    #[test]
    fn test_language_toggle_follows_request() {
        let mut state = AppState::new(Language::En, today());
        state.toggle_language();
        assert_eq!(state.language, Language::Tr);
        assert_eq!(state.request.language, Language::Tr);
    }

    #[test]
    fn test_window_replacement_ignores_stale_snapshots() {
        let mut state = AppState::new(Language::En, today());
        assert!(state.apply_window(MarketSnapshot { sequence: 3, candles: vec![candle("a", Signal::Hold)] }));
        assert!(!state.apply_window(MarketSnapshot { sequence: 2, candles: vec![] }));
        assert_eq!(state.window.len(), 1);
        assert!(state.apply_window(MarketSnapshot { sequence: 4, candles: vec![candle("b", Signal::Buy)] }));
        assert_eq!(state.window[0].timestamp, "b");
    }

    #[test]
    fn test_later_generation_supersedes_earlier() {
        let mut state = AppState::new(Language::En, today());
        let (first, _) = state.begin_generation();
        let (second, _) = state.begin_generation();

        assert!(!state.finish_generation(first, Ok(artifact("old"))));
        assert!(state.loading);
        assert!(state.finish_generation(second, Ok(artifact("new"))));
        assert!(!state.loading);
        assert_eq!(state.result.as_ref().map(|a| a.name.as_str()), Some("new"));
    }

    #[test]
    fn test_failed_generation_sets_message() {
        let mut state = AppState::new(Language::En, today());
        state.result = Some(artifact("previous"));
        let (ticket, request) = state.begin_generation();
        assert!(state.result.is_none());
        state.finish_generation(ticket, Err(request.language.generation_failure_message().to_string()));
        assert_eq!(state.error_message.as_deref(), Some("Algorithm compilation error."));
        assert!(state.result.is_none());
    }

    #[test]
    fn test_preset_keeps_language_and_closes_palette() {
        let mut state = AppState::new(Language::Tr, today());
        state.show_presets = true;
        state.apply_preset(Preset::Trend, today());
        assert_eq!(state.request.style, BotStyle::Trend);
        assert_eq!(state.request.timeframe, TimeFrame::Hour4);
        assert_eq!(state.request.language, Language::Tr);
        assert!(state.request.notes.starts_with("STRATEJİ"));
        assert!(!state.show_presets);
    }

    #[test]
    fn test_form_setters() {
        let mut state = AppState::new(Language::En, today());
        state.set_risk(42);
        assert_eq!(state.request.risk_level, 10);
        assert!(state.set_start_date("2025-01-02"));
        assert!(!state.set_end_date(""));
        assert_eq!(state.request.start_date, NaiveDate::from_ymd_opt(2025, 1, 2).unwrap());
        assert_eq!(state.request.end_date, today());
    }

    #[test]
    fn test_execution_log_lists_newest_signals() {
        let mut state = AppState::new(Language::En, today());
        state.apply_window(MarketSnapshot {
            sequence: 1,
            candles: vec![candle("1", Signal::Buy), candle("2", Signal::Hold), candle("3", Signal::Sell)],
        });
        let log = state.execution_log(5);
        assert_eq!(log.iter().map(|c| c.timestamp.as_str()).collect::<Vec<_>>(), vec!["3", "1"]);
        assert!(state.summary().is_some());
    }

    #[test]
    fn test_second_copy_keeps_badge_past_first_reset() {
        let mut state = AppState::new(Language::En, today());
        let first = state.mark_copied();
        let second = state.mark_copied();

        assert!(!state.clear_copied(first));
        assert!(state.copied);

        assert!(state.clear_copied(second));
        assert!(!state.copied);
    }
}
