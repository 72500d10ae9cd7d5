/// Collaborator traits for tunesort
use crate::error::Result;
use crate::types::{ArtistHit, BatchResult, CoverArt, FileItem, ProgressState, TrackTags};
use std::path::Path;

/// Tag container access
///
/// Implementers read and write the ID3 metadata held inside an audio file.
/// Every write saves the container before returning.
pub trait TagStore {
    /// Read artist and title
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or parsed. A file with no
    /// tag container yields empty tags, not an error.
    fn read_tags(&self, path: &Path) -> Result<TrackTags>;

    /// Write artist and title, creating the tag container if needed
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or saved
    fn write_tags(&self, path: &Path, tags: &TrackTags) -> Result<()>;

    /// Replace the front cover picture
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or saved
    fn embed_cover(&self, path: &Path, cover: &CoverArt) -> Result<()>;
}

/// Artwork provider
///
/// Implementers search a remote catalogue by artist and download images.
#[allow(async_fn_in_trait)]
pub trait ArtworkProvider {
    /// Search for an artist, best match first
    async fn search_artist(&self, name: &str) -> Result<Vec<ArtistHit>>;

    /// Image URIs for a search hit, in provider order
    async fn artist_images(&self, hit: &ArtistHit) -> Result<Vec<String>>;

    /// Download raw image bytes
    async fn fetch_image(&self, uri: &str) -> Result<Vec<u8>>;
}

/// Progress observer for a running batch
///
/// Observability only; the processor's result does not depend on it.
pub trait ProgressReporter {
    /// Called once before the first item
    fn started(&self, label: &str, total: usize) {
        let _ = (label, total);
    }

    /// Called after every item, success or failure
    fn progress(&self, state: ProgressState);

    /// Called when an item fails
    fn item_failed(&self, item: &FileItem, reason: &str) {
        let _ = (item, reason);
    }

    /// Called once after the last item
    fn finished(&self, result: &BatchResult) {
        let _ = result;
    }
}

/// Reporter that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpProgressReporter;

impl ProgressReporter for NoOpProgressReporter {
    fn progress(&self, _state: ProgressState) {}
}

/// File discovery
pub trait FileDiscovery {
    /// Find files under `root` whose name matches `pattern`
    ///
    /// `depth` counts directory levels including the root, so `Some(1)` only
    /// looks at the root itself. `None` means unbounded.
    ///
    /// # Errors
    /// Returns an error if `root` is missing or not a directory
    fn find(&self, root: &Path, pattern: &str, depth: Option<usize>) -> Result<Vec<FileItem>>;
}
