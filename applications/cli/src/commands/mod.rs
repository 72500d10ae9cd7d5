//! Command handlers
//!
//! Each handler resolves its folders up front, scans, and hands the file list
//! to a [`BatchProcessor`]. Nothing below this layer prompts the user.

mod auth;
mod batch;

pub use auth::{login, logout, status};
pub use batch::{artwork, organize, retag, transfer, OrganizeReport};

use crate::progress::BarReporter;
use crate::settings::Settings;
use anyhow::{bail, Context as _, Result};
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tunesort_batch::{BatchProcessor, FileScanner};
use tunesort_core::{
    BatchResult, FileDiscovery, FileItem, MatchPatterns, NoOpProgressReporter, ProgressReporter,
};
use tunesort_tags::LoftyTagStore;

/// Files the batch commands pick up
pub const MP3_PATTERN: &str = "*.mp3";

/// Everything a command needs for one run
pub struct App {
    pub settings: Settings,
    pub config_path: PathBuf,
    pub patterns: MatchPatterns,
    pub tags: LoftyTagStore,
    reporter: Box<dyn ProgressReporter>,
    cancel: Arc<AtomicBool>,
}

impl App {
    /// Compile the configured patterns; an invalid regex aborts here
    pub fn new(settings: Settings, config_path: PathBuf, quiet: bool) -> Result<Self> {
        let patterns = MatchPatterns::compile(&settings.patterns())
            .context("invalid filename pattern in settings")?;
        let reporter: Box<dyn ProgressReporter> = if quiet {
            Box::new(NoOpProgressReporter)
        } else {
            Box::new(BarReporter::new())
        };

        Ok(Self {
            settings,
            config_path,
            patterns,
            tags: LoftyTagStore::new(),
            reporter,
            cancel: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Flag that stops running batches between items
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    pub(crate) fn processor(&self) -> BatchProcessor<'_> {
        BatchProcessor::new(self.reporter.as_ref()).with_cancel_flag(self.cancel_flag())
    }

    pub(crate) fn save_settings(&self) -> Result<()> {
        self.settings
            .save(&self.config_path)
            .with_context(|| format!("failed to save {}", self.config_path.display()))
    }
}

/// Pick the flag value or the configured default, and require an existing folder
pub(crate) fn resolve_dir(
    flag: Option<&Path>,
    configured: Option<&Path>,
    what: &str,
) -> Result<PathBuf> {
    let Some(dir) = flag.or(configured) else {
        bail!("no {what} folder given; pass --{what} or set \"{what}\" in the settings file");
    };
    if !dir.is_dir() {
        bail!("{what} folder does not exist: {}", dir.display());
    }
    Ok(dir.to_path_buf())
}

pub(crate) fn scan(source: &Path, depth: Option<usize>) -> Result<Vec<FileItem>> {
    FileScanner::new()
        .find(source, MP3_PATTERN, depth)
        .with_context(|| format!("failed to scan {}", source.display()))
}

/// One-line summary on stdout
pub(crate) fn print_summary(label: &str, result: &BatchResult) {
    println!("{label}: {}", result.summary_text());
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_dir_prefers_flag() {
        let flag = TempDir::new().unwrap();
        let configured = TempDir::new().unwrap();

        let dir = resolve_dir(Some(flag.path()), Some(configured.path()), "source").unwrap();
        assert_eq!(dir, flag.path());

        let dir = resolve_dir(None, Some(configured.path()), "source").unwrap();
        assert_eq!(dir, configured.path());
    }

    #[test]
    fn test_resolve_dir_errors() {
        let err = resolve_dir(None, None, "destination").unwrap_err();
        assert!(err.to_string().contains("--destination"));

        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");
        assert!(resolve_dir(Some(&missing), None, "source").is_err());
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let settings = Settings {
            invalid_tags: "(".to_string(),
            ..Settings::default()
        };
        assert!(App::new(settings, PathBuf::from("unused.json"), true).is_err());
    }
}
