//! Error types for the masjid-times crate

use thiserror::Error;

/// Result type for masjid-times operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the fatal tier: transport, filesystem, and serialization
/// failures that abort the run. Extraction problems never surface here;
/// they degrade to defaults inside the extraction engine.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Other errors
    #[error("{0}")]
    Other(String),
}
