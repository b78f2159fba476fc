//! Error types for idmap CLI
//!
//! [`CliError`] covers failures that abort a command. [`ResolveError`] is the
//! per-identifier failure that the resolver turns into a
//! [`Resolution::Failed`](idmap_common::Resolution::Failed) so one bad lookup
//! never stops a batch.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// User-facing error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// The identifier file could not be opened
    #[error("Input file not found: '{0}'. Verify the path exists and you have read permissions.")]
    InputNotFound(String),

    /// A remote API answered with something other than what was asked for
    #[error("API error: {0}")]
    Api(String),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("Network request failed: {0}. Check your internet connection and the API URL.")]
    Http(#[from] reqwest::Error),

    /// JSON encoding or decoding failed
    #[error("Failed to process JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your command-line flags and IDMAP_* environment variables.")]
    Config(String),

    /// Interactive prompt was cancelled or could not be shown
    #[error("Prompt failed: {0}")]
    Prompt(#[from] inquire::InquireError),

    /// Generic anyhow error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Create an API error
    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an input-not-found error
    pub fn input_not_found(path: impl Into<String>) -> Self {
        Self::InputNotFound(path.into())
    }
}

/// Failure of a single lookup
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}
