//! File item type

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Name of the quarantine subfolder created under a source directory
pub const QUARANTINE_DIR: &str = "_invalid";

/// A path to an audio file being processed by a batch
///
/// The item is an opaque identifier. Tag metadata belongs to the file itself
/// and is only reachable through a [`crate::TagStore`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileItem(PathBuf);

impl FileItem {
    /// Create a new file item
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Get the underlying path
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Get the file name as UTF-8, if it has one
    pub fn file_name(&self) -> Option<&str> {
        self.0.file_name().and_then(|n| n.to_str())
    }

    /// Get the containing directory
    pub fn parent(&self) -> Option<&Path> {
        self.0.parent()
    }

    /// Same directory, different file name
    pub fn with_file_name(&self, name: &str) -> Self {
        Self(self.0.with_file_name(name))
    }

    /// Whether the item sits directly inside a quarantine folder
    pub fn is_quarantined(&self) -> bool {
        self.parent()
            .and_then(Path::file_name)
            .is_some_and(|dir| dir == QUARANTINE_DIR)
    }

    /// Consume the item and return the path
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl fmt::Display for FileItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl From<PathBuf> for FileItem {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl From<&Path> for FileItem {
    fn from(path: &Path) -> Self {
        Self(path.to_path_buf())
    }
}

impl AsRef<Path> for FileItem {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_and_parent() {
        let item = FileItem::new("/music/in/Artist A - Song One.mp3");
        assert_eq!(item.file_name(), Some("Artist A - Song One.mp3"));
        assert_eq!(item.parent(), Some(Path::new("/music/in")));
        assert_eq!(
            item.with_file_name("other.mp3").path(),
            Path::new("/music/in/other.mp3")
        );
    }

    #[test]
    fn quarantine_detection() {
        assert!(FileItem::new("/music/_invalid/BadFormat.mp3").is_quarantined());
        assert!(!FileItem::new("/music/BadFormat.mp3").is_quarantined());
    }

    #[test]
    fn serializes_as_plain_path() {
        let item = FileItem::new("/music/a.mp3");
        assert_eq!(serde_json::to_string(&item).unwrap(), "\"/music/a.mp3\"");
    }
}
