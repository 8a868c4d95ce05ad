//! Error types for settings storage and other I/O at the edges of Plinth.
//!
//! The analyzer and compilers are total and never return these.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlinthError>;

#[derive(Debug, Error)]
pub enum PlinthError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: &'static str, reason: String },
}

impl PlinthError {
    pub fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            key,
            reason: reason.into(),
        }
    }
}
