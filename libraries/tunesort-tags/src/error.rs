/// Tag store errors
use thiserror::Error;

/// Result type alias using `TagError`
pub type Result<T> = std::result::Result<T, TagError>;

/// Tag store error types
#[derive(Error, Debug)]
pub enum TagError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// No tag container could be created for the file type
    #[error("No tag container for {0}")]
    NoTag(String),

    /// Tag writing error
    #[error("Tag writing error: {0}")]
    WriteError(String),

    /// Lofty error
    #[error(transparent)]
    Lofty(#[from] lofty::error::LoftyError),
}

impl From<TagError> for tunesort_core::TuneError {
    fn from(err: TagError) -> Self {
        tunesort_core::TuneError::tag(err.to_string())
    }
}
