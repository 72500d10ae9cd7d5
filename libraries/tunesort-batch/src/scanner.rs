//! File discovery by glob and depth

use glob::{MatchOptions, Pattern};
use std::path::Path;
use tunesort_core::{FileDiscovery, FileItem, Result, TuneError, QUARANTINE_DIR};
use walkdir::WalkDir;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Scanner for files in a source directory
#[derive(Debug, Default, Clone)]
pub struct FileScanner {
    /// Whether to follow symbolic links
    follow_links: bool,
}

impl FileScanner {
    /// Create a new file scanner
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to follow symbolic links
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }
}

impl FileDiscovery for FileScanner {
    fn find(&self, root: &Path, pattern: &str, depth: Option<usize>) -> Result<Vec<FileItem>> {
        if !root.exists() {
            return Err(TuneError::not_found("directory", root.display().to_string()));
        }
        if !root.is_dir() {
            return Err(TuneError::invalid_input(format!(
                "{} is not a directory",
                root.display()
            )));
        }
        if depth == Some(0) {
            return Err(TuneError::invalid_input("depth must be at least 1"));
        }

        let pattern = Pattern::new(pattern)
            .map_err(|e| TuneError::invalid_input(format!("bad pattern {pattern:?}: {e}")))?;

        let mut walker = WalkDir::new(root).follow_links(self.follow_links);
        if let Some(depth) = depth {
            walker = walker.max_depth(depth);
        }

        let mut files: Vec<FileItem> = walker
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || entry.file_name() != QUARANTINE_DIR)
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| pattern.matches_with(name, MATCH_OPTIONS))
            })
            .map(|entry| FileItem::new(entry.into_path()))
            .collect();

        files.sort();
        tracing::debug!("Found {} files under {}", files.len(), root.display());
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        let base = temp.path();
        fs::write(base.join("b.mp3"), b"fake mp3").unwrap();
        fs::write(base.join("A.MP3"), b"fake mp3").unwrap();
        fs::write(base.join("notes.txt"), b"not audio").unwrap();

        let sub = base.join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("c.mp3"), b"fake mp3").unwrap();
        let deeper = sub.join("deeper");
        fs::create_dir(&deeper).unwrap();
        fs::write(deeper.join("d.mp3"), b"fake mp3").unwrap();

        let quarantine = base.join(QUARANTINE_DIR);
        fs::create_dir(&quarantine).unwrap();
        fs::write(quarantine.join("bad.mp3"), b"fake mp3").unwrap();
        temp
    }

    fn names(files: &[FileItem]) -> Vec<&str> {
        files.iter().filter_map(FileItem::file_name).collect()
    }

    #[test]
    fn test_unbounded_depth_sorted_case_insensitive() {
        let temp = tree();
        let files = FileScanner::new().find(temp.path(), "*.mp3", None).unwrap();
        assert_eq!(names(&files), vec!["A.MP3", "b.mp3", "c.mp3", "d.mp3"]);
    }

    #[test]
    fn test_depth_one_is_root_only() {
        let temp = tree();
        let files = FileScanner::new().find(temp.path(), "*.mp3", Some(1)).unwrap();
        assert_eq!(names(&files), vec!["A.MP3", "b.mp3"]);

        let files = FileScanner::new().find(temp.path(), "*.mp3", Some(2)).unwrap();
        assert_eq!(names(&files), vec!["A.MP3", "b.mp3", "c.mp3"]);
    }

    #[test]
    fn test_quarantine_folder_skipped() {
        let temp = tree();
        let files = FileScanner::new().find(temp.path(), "*", None).unwrap();
        assert!(!files.iter().any(FileItem::is_quarantined));
        assert!(names(&files).contains(&"notes.txt"));
    }

    #[test]
    fn test_bad_roots() {
        let temp = tree();
        let missing = FileScanner::new().find(&temp.path().join("nope"), "*.mp3", None);
        assert!(matches!(missing, Err(TuneError::NotFound { .. })));

        let file = FileScanner::new().find(&temp.path().join("b.mp3"), "*.mp3", None);
        assert!(matches!(file, Err(TuneError::InvalidInput(_))));

        let zero = FileScanner::new().find(temp.path(), "*.mp3", Some(0));
        assert!(matches!(zero, Err(TuneError::InvalidInput(_))));
    }
}
