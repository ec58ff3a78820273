// GUI configuration, embedded from assets/config/default.json
pub mod theme;

use serde::Deserialize;
use shared::Language;
use std::time::Duration;

pub use theme::ThemePalette;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    pub engine: EngineConnSettings,
    pub chart: ChartConfig,
    pub theme: ThemePalette,
    pub dashboard: DashboardSettings,
    pub links: Links,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub title: String,
    pub language: Language,
    pub window_width: f64,
    pub window_height: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EngineConnSettings {
    pub host: String,
    pub port: u16,
    pub connect_timeout_secs: u64,
}

impl EngineConnSettings {
    pub fn endpoint(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub pair_label: String,
    pub interval_label: String,
    pub price_color: String,
    pub oscillator_color: String,
    pub volume_color: String,
    pub grid_color: String,
    pub oscillator_axis_max: f64,
    pub volume_axis_max: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardSettings {
    pub log_entries: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Links {
    pub tradingview_url: String,
}

impl AppConfig {
    pub fn load_default() -> Result<Self, anyhow::Error> {
        let config_str = include_str!("../../assets/config/default.json");
        Self::from_json(config_str)
    }

    pub fn from_json(raw: &str) -> Result<Self, anyhow::Error> {
        let config: AppConfig = serde_json::from_str(raw)?;
        if config.chart.width <= 2.0 * config.chart.margin || config.chart.height <= 2.0 * config.chart.margin {
            anyhow::bail!("chart dimensions must exceed twice the margin");
        }
        Ok(config)
    }
}
