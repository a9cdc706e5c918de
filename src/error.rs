use thiserror::Error;

/// Unified error type for release-notion operations
#[derive(Error, Debug)]
pub enum ReleaseNotionError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("GitHub request failed: {0}")]
    GitHub(String),

    #[error("Notion request failed: {0}")]
    Notion(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-notion
pub type Result<T> = std::result::Result<T, ReleaseNotionError>;

impl ReleaseNotionError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseNotionError::Config(msg.into())
    }

    /// Create a GitHub error with context
    pub fn github(msg: impl Into<String>) -> Self {
        ReleaseNotionError::GitHub(msg.into())
    }

    /// Create a Notion error with context
    pub fn notion(msg: impl Into<String>) -> Self {
        ReleaseNotionError::Notion(msg.into())
    }
}
