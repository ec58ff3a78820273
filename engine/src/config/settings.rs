// Engine settings, loaded from the environment (optionally via a .env file)
use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;

use crate::error::EngineError;

pub const API_KEY_VAR: &str = "API_KEY";

#[derive(Debug, Deserialize, Clone)]
pub struct EngineSettings {
    pub host: String,
    pub port: u16,
    /// Signed so a negative value reaches the feed's own validation.
    pub window_size: i64,
    pub tick_interval_ms: u64,
    pub model: String,
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    #[serde(skip)]
    pub api_key: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            host: "localhost".to_string(),
            port: 50051,
            window_size: 50,
            tick_interval_ms: 2000,
            model: "gemini-3-pro-preview".to_string(),
            api_base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            request_timeout_secs: 120,
            api_key: String::new(),
        }
    }
}

impl EngineSettings {
    /// Reads `.env` (if present) and the process environment. A missing
    /// credential is fatal: the engine must not come up without it.
    pub fn load() -> Result<Self, EngineError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded environment overrides from .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, EngineError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = EngineSettings::default();

        if let Some(host) = lookup("SANCTUS_HOST") {
            settings.host = host;
        }
        if let Some(port) = parse_var(&lookup, "SANCTUS_PORT")? {
            settings.port = port;
        }
        if let Some(window_size) = parse_var(&lookup, "SANCTUS_WINDOW_SIZE")? {
            settings.window_size = window_size;
        }
        if let Some(tick) = parse_var(&lookup, "SANCTUS_TICK_MS")? {
            settings.tick_interval_ms = tick;
        }
        if let Some(model) = lookup("SANCTUS_MODEL") {
            settings.model = model;
        }
        if let Some(url) = lookup("SANCTUS_API_BASE_URL") {
            settings.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(timeout) = parse_var(&lookup, "SANCTUS_REQUEST_TIMEOUT_SECS")? {
            settings.request_timeout_secs = timeout;
        }

        settings.api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| EngineError::ConfigError(format!("{} is not set; strategy generation is unavailable", API_KEY_VAR)))?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.tick_interval_ms == 0 {
            return Err(EngineError::ConfigError("tick_interval_ms must be greater than 0".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(EngineError::ConfigError("model must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, EngineError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| EngineError::ConfigError(format!("{} has invalid value '{}': {}", key, raw, e))),
        None => Ok(None),
    }
}
