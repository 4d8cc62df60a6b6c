//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading rule configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for the expected shape
    #[error("Configuration parse failed: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
