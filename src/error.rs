//! Error types for pads.

use std::time::Duration;

/// Errors that can occur while querying ADS and printing results.
#[derive(Debug, thiserror::Error)]
pub enum PadsError {
    /// HTTP request failed (network, timeout, etc.)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// ADS API returned an error status code.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// No API token found.
    #[error("Authentication required: pass --token, set ADS_API_TOKEN (or ADS_DEV_KEY), or write the token to ~/.ads/dev_key")]
    AuthRequired,

    /// Rate limited by the ADS API (HTTP 429).
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Option<Duration> },

    /// Failed to parse API response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Query constraints could not be turned into a query.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Resource not found (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for Results using [`PadsError`].
pub type Result<T> = std::result::Result<T, PadsError>;
