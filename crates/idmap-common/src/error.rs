//! Error types shared across idmap crates

use thiserror::Error;

/// Result type alias for idmap operations
pub type Result<T> = std::result::Result<T, IdmapError>;

/// Main error type for idmap
#[derive(Error, Debug)]
pub enum IdmapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl IdmapError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
