// Sanctus colour palette used by every component's inline styles.
use serde::{Deserialize, Serialize};
use shared::Signal;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: String,
    pub panel: String,
    pub border: String,
    pub accent: String,
    pub success: String,
    pub danger: String,
    pub foreground: String,
    pub muted: String,
}

impl ThemePalette {
    pub fn default_dark() -> Self {
        Self {
            background: "#050505".to_string(),
            panel: "#0f1115".to_string(),
            border: "#1f2937".to_string(),
            accent: "#d4af37".to_string(),
            success: "#10b981".to_string(),
            danger: "#ef4444".to_string(),
            foreground: "#d1d5db".to_string(),
            muted: "#6b7280".to_string(),
        }
    }

    pub fn signal_color(&self, signal: Signal) -> &str {
        match signal {
            Signal::Buy => &self.success,
            Signal::Sell => &self.danger,
            Signal::Hold => &self.muted,
        }
    }
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self::default_dark()
    }
}
