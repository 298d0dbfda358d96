use crate::config::ConfigError;
use crate::dispatch::RosterImportError;
use crate::telemetry::TelemetryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("roster error: {0}")]
    Roster(#[from] RosterImportError),
    #[error("render error: {0}")]
    Render(#[from] serde_json::Error),
}
