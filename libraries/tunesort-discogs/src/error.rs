//! Error types for the Discogs client.

use thiserror::Error;
use tunesort_core::TuneError;

/// Errors that can occur when talking to Discogs.
#[derive(Error, Debug)]
pub enum DiscogsError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Credentials were rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limited by Discogs
    #[error("Rate limited, retry after {retry_after_secs} seconds")]
    RateLimited { retry_after_secs: u64 },

    /// Discogs returned an error response
    #[error("Discogs error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a response
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// A required credential is not configured
    #[error("Missing credential: {0}")]
    MissingCredentials(&'static str),

    /// Invalid base URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl DiscogsError {
    /// Whether the stored tokens should be discarded
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

impl From<DiscogsError> for TuneError {
    fn from(err: DiscogsError) -> Self {
        match err {
            DiscogsError::Unauthorized(_) => TuneError::auth(err.to_string()),
            DiscogsError::MissingCredentials(_) | DiscogsError::InvalidUrl(_) => {
                TuneError::config(err.to_string())
            }
            other => TuneError::provider(other.to_string()),
        }
    }
}

/// Result type for Discogs operations.
pub type Result<T> = std::result::Result<T, DiscogsError>;
