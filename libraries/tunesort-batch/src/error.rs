//! Per-item failure reasons

use thiserror::Error;
use tunesort_core::TuneError;

/// Why a single item's operation failed
///
/// The `Display` text is what ends up in the batch result.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("rename failed: {0}")]
    Rename(String),

    #[error("could not quarantine file: {0}")]
    Quarantine(String),

    #[error("tag error: {0}")]
    Tag(String),

    #[error("missing artist tag")]
    MissingArtist,

    #[error("no artist results for \"{0}\"")]
    NoResults(String),

    #[error("no images for \"{0}\"")]
    NoImages(String),

    #[error("artwork fetch failed: {0}")]
    Fetch(String),

    #[error("could not embed artwork: {0}")]
    Embed(String),

    #[error("could not create folder {path}: {source}")]
    CreateFolder {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("transfer failed: {0}")]
    Transfer(String),

    #[error("operation panicked: {0}")]
    Panicked(String),

    #[error("{0}")]
    Other(String),
}

impl From<TuneError> for OperationError {
    fn from(err: TuneError) -> Self {
        match err {
            TuneError::Tag(msg) => Self::Tag(msg),
            TuneError::Provider(msg) | TuneError::Auth(msg) => Self::Fetch(msg),
            other => Self::Other(other.to_string()),
        }
    }
}
