//! tunesort core
//!
//! Shared types, collaborator traits, and error handling for the tunesort
//! MP3 organizer.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `FileItem`, `BatchResult`, `ProgressState`, `TrackTags`, `CoverArt`
//! - **Collaborator Traits**: `TagStore`, `ArtworkProvider`, `ProgressReporter`, `FileDiscovery`
//! - **Error Handling**: Unified `TuneError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use tunesort_core::{BatchResult, FileItem, ProgressState};
//!
//! let item = FileItem::new("/music/Artist A - Song One.mp3");
//! assert_eq!(item.file_name(), Some("Artist A - Song One.mp3"));
//!
//! let mut progress = ProgressState::new(2);
//! progress.advance();
//! assert_eq!(progress.processed, 1);
//!
//! let result = BatchResult::new(0);
//! assert!(result.is_consistent());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TuneError};
pub use traits::{ArtworkProvider, FileDiscovery, NoOpProgressReporter, ProgressReporter, TagStore};

pub use types::{
    ArtistHit, BatchResult, CoverArt, FailedItem, FileItem, InvalidItem, ItemOutcome,
    MatchPatterns, PatternSet, ProgressState, TrackTags, QUARANTINE_DIR,
};
