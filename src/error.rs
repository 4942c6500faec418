//! Error types for the story parsing and PRD synthesis core.
//!
//! Malformed story text is never an error: it degrades through the
//! extraction fallbacks. Only invalid call shapes and configuration
//! problems surface here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrdError {
    /// The caller passed a value the core cannot work with
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to parse configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PrdError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, PrdError>;
