//! Error types for embed context construction.

use thiserror::Error;

/// Context construction errors
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("Platform service not bound: {0}")]
    ServiceUnbound(&'static str),

    #[error("Context serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ContextError {
    fn from(err: config::ConfigError) -> Self {
        ContextError::ConfigError(err.to_string())
    }
}
