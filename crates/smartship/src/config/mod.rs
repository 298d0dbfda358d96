use crate::dispatch::CardTheme;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub roster: RosterConfig,
    pub display: DisplayConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let data_path = env::var("SMARTSHIP_DATA").unwrap_or_else(|_| "data.json".to_string());
        if data_path.trim().is_empty() {
            return Err(ConfigError::EmptyDataPath);
        }

        let theme = env::var("SMARTSHIP_THEME").unwrap_or_else(|_| "light".to_string());
        let theme = parse_theme(&theme)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            roster: RosterConfig {
                data_path: PathBuf::from(data_path.trim()),
            },
            display: DisplayConfig { theme },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

pub fn parse_theme(value: &str) -> Result<CardTheme, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "light" => Ok(CardTheme::Light),
        "dark" => Ok(CardTheme::Dark),
        _ => Err(ConfigError::InvalidTheme {
            value: value.to_string(),
        }),
    }
}

/// Where the shipments and drivers document is read from.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    pub data_path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
pub struct DisplayConfig {
    pub theme: CardTheme,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SMARTSHIP_DATA must not be empty")]
    EmptyDataPath,
    #[error("SMARTSHIP_THEME must be 'light' or 'dark' (got '{value}')")]
    InvalidTheme { value: String },
}
