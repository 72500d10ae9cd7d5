//! Copy/move files into artist folders

use crate::artist::{primary_artist, sanitize_folder_name};
use crate::files::{free_path, move_file, same_file};
use crate::{ItemOperation, OperationError};
use std::fs;
use std::path::{Path, PathBuf};
use tunesort_core::{FileItem, ItemOutcome, MatchPatterns, TagStore};

/// Whether the source file stays in place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferMode {
    Copy,
    Move,
}

impl TransferMode {
    /// Lowercase name, also used as the batch label
    pub fn label(self) -> &'static str {
        match self {
            Self::Copy => "copy",
            Self::Move => "move",
        }
    }
}

/// Places each file under `<destination>/<primary artist>/<basename>`
///
/// The completed outcome carries the destination path. A taken name gets a
/// `-N` suffix, and a file already at its destination is left alone.
pub struct TransferOperation<'a, T: TagStore> {
    tags: &'a T,
    patterns: &'a MatchPatterns,
    destination: PathBuf,
    mode: TransferMode,
}

impl<'a, T: TagStore> TransferOperation<'a, T> {
    pub fn new(
        tags: &'a T,
        patterns: &'a MatchPatterns,
        destination: impl Into<PathBuf>,
        mode: TransferMode,
    ) -> Self {
        Self {
            tags,
            patterns,
            destination: destination.into(),
            mode,
        }
    }

    /// Folder the item belongs in
    pub fn artist_folder(&self, item: &FileItem) -> Result<PathBuf, OperationError> {
        let tags = self
            .tags
            .read_tags(item.path())
            .map_err(|e| OperationError::Tag(e.to_string()))?;
        let raw = tags.artist().ok_or(OperationError::MissingArtist)?;

        let folder = sanitize_folder_name(&primary_artist(raw, self.patterns));
        if folder.is_empty() {
            return Err(OperationError::MissingArtist);
        }
        Ok(self.destination.join(folder))
    }
}

impl<T: TagStore> ItemOperation for TransferOperation<'_, T> {
    fn name(&self) -> &str {
        self.mode.label()
    }

    async fn apply(&self, item: &FileItem) -> Result<ItemOutcome, OperationError> {
        let folder = self.artist_folder(item)?;
        fs::create_dir_all(&folder).map_err(|source| OperationError::CreateFolder {
            path: folder.display().to_string(),
            source,
        })?;

        let file_name = item
            .path()
            .file_name()
            .ok_or_else(|| OperationError::Transfer(format!("{} has no file name", item)))?;
        if same_file(item.path(), &folder.join(file_name)) {
            tracing::debug!("{} is already in place", item);
            return Ok(ItemOutcome::Completed(item.clone()));
        }
        let target = free_path(&folder, file_name)
            .map_err(|e| OperationError::Transfer(format!("{}: {}", item, e)))?;

        let transferred = match self.mode {
            TransferMode::Copy => copy_file(item.path(), &target),
            TransferMode::Move => move_file(item.path(), &target),
        };
        transferred.map_err(|e| {
            OperationError::Transfer(format!("{} -> {}: {}", item, target.display(), e))
        })?;

        tracing::debug!("{} {} -> {}", self.mode.label(), item, target.display());
        Ok(ItemOutcome::Completed(FileItem::new(target)))
    }
}

/// Copy contents, then carry over the modification time when possible
fn copy_file(from: &Path, to: &Path) -> std::io::Result<()> {
    fs::copy(from, to)?;

    let modified = fs::metadata(from).and_then(|m| m.modified());
    let applied = modified.and_then(|time| {
        fs::OpenOptions::new()
            .write(true)
            .open(to)
            .and_then(|f| f.set_modified(time))
    });
    if let Err(e) = applied {
        tracing::debug!("Could not preserve mtime on {}: {}", to.display(), e);
    }
    Ok(())
}
