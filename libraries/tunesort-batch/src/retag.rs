//! Retag-from-filename operation

use crate::filename::{normalize_file_name, parse_file_name};
use crate::files::{free_path, move_file};
use crate::{ItemOperation, OperationError};
use std::fs;
use std::path::PathBuf;
use tunesort_core::{FileItem, ItemOutcome, MatchPatterns, TagStore, TrackTags, QUARANTINE_DIR};

/// Writes artist/title tags parsed from `<artist> - <title>.mp3` filenames
///
/// Files that do not follow the convention are moved into the `_invalid`
/// folder under `source` and their tags are left alone.
pub struct RetagOperation<'a, T: TagStore> {
    tags: &'a T,
    patterns: &'a MatchPatterns,
    source: PathBuf,
}

impl<'a, T: TagStore> RetagOperation<'a, T> {
    pub fn new(tags: &'a T, patterns: &'a MatchPatterns, source: impl Into<PathBuf>) -> Self {
        Self {
            tags,
            patterns,
            source: source.into(),
        }
    }

    /// Quarantine folder for this source directory
    pub fn quarantine_dir(&self) -> PathBuf {
        self.source.join(QUARANTINE_DIR)
    }

    fn rename_normalized(&self, item: &FileItem, name: &str) -> Result<FileItem, OperationError> {
        let normalized = normalize_file_name(name, self.patterns);
        if normalized == name {
            return Ok(item.clone());
        }

        let renamed = item.with_file_name(&normalized);
        if renamed.path().exists() {
            return Err(OperationError::Rename(format!(
                "{} already exists",
                renamed.path().display()
            )));
        }

        fs::rename(item.path(), renamed.path())
            .map_err(|e| OperationError::Rename(format!("{}: {}", item, e)))?;
        tracing::debug!("Renamed {} -> {}", name, normalized);
        Ok(renamed)
    }

    fn quarantine(&self, item: &FileItem, name: &str) -> Result<FileItem, OperationError> {
        let dir = self.quarantine_dir();
        fs::create_dir_all(&dir)
            .map_err(|e| OperationError::Quarantine(format!("{}: {}", dir.display(), e)))?;

        let target = free_path(&dir, name.as_ref())
            .map_err(|e| OperationError::Quarantine(format!("{}: {}", item, e)))?;
        move_file(item.path(), &target)
            .map_err(|e| OperationError::Quarantine(format!("{}: {}", item, e)))?;
        Ok(FileItem::new(target))
    }
}

impl<T: TagStore> ItemOperation for RetagOperation<'_, T> {
    fn name(&self) -> &str {
        "retag"
    }

    async fn apply(&self, item: &FileItem) -> Result<ItemOutcome, OperationError> {
        let name = item
            .file_name()
            .ok_or_else(|| OperationError::Rename(format!("{} has no UTF-8 file name", item)))?;

        let renamed = self.rename_normalized(item, name)?;
        let name = renamed.file_name().unwrap_or(name);

        match parse_file_name(name, self.patterns) {
            Ok(parsed) => {
                let tags = TrackTags::new(parsed.artist, parsed.title);
                self.tags
                    .write_tags(renamed.path(), &tags)
                    .map_err(|e| OperationError::Tag(e.to_string()))?;
                Ok(ItemOutcome::Completed(renamed))
            }
            Err(reason) => {
                let quarantined = self.quarantine(&renamed, name)?;
                Ok(ItemOutcome::Invalid {
                    quarantined,
                    reason: reason.to_string(),
                })
            }
        }
    }
}
