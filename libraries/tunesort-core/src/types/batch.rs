//! Batch outcome types

use super::FileItem;
use serde::{Deserialize, Serialize};

/// Terminal outcome of a single item operation that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// Operation finished; carries the item's location afterwards
    ///
    /// Retag may rename a file and move relocates it, so the path here is
    /// the one later pipeline stages must use.
    Completed(FileItem),

    /// Input did not match the naming convention and was relocated
    Invalid {
        /// Where the file now lives
        quarantined: FileItem,
        /// Why it was classified invalid
        reason: String,
    },
}

/// An item whose operation failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedItem {
    /// The item as it was handed to the operation
    pub item: FileItem,
    /// Human-readable failure cause
    pub reason: String,
}

/// An item that was classified invalid and quarantined
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidItem {
    /// The item as it was handed to the operation
    pub item: FileItem,
    /// Location inside the quarantine folder
    pub quarantined: FileItem,
    /// Why it was classified invalid
    pub reason: String,
}

/// Result of running one operation over a batch of items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    /// Items whose operation completed, at their post-operation location
    pub succeeded: Vec<FileItem>,

    /// Items whose operation failed
    pub failed: Vec<FailedItem>,

    /// Items quarantined as not matching the naming convention
    pub invalid: Vec<InvalidItem>,

    /// Items never attempted because the batch was cancelled
    pub not_attempted: Vec<FileItem>,

    /// Number of items handed to the batch
    pub total: usize,

    /// Whether the batch stopped early
    pub cancelled: bool,
}

impl BatchResult {
    /// Create an empty result for a batch of `total` items
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Record a terminal outcome for `item`
    pub fn record(&mut self, item: FileItem, outcome: ItemOutcome) {
        match outcome {
            ItemOutcome::Completed(location) => self.succeeded.push(location),
            ItemOutcome::Invalid {
                quarantined,
                reason,
            } => self.invalid.push(InvalidItem {
                item,
                quarantined,
                reason,
            }),
        }
    }

    /// Record a failed item
    pub fn record_failure(&mut self, item: FileItem, reason: impl Into<String>) {
        self.failed.push(FailedItem {
            item,
            reason: reason.into(),
        });
    }

    /// Mark the remaining items as not attempted
    pub fn record_cancelled(&mut self, remaining: impl IntoIterator<Item = FileItem>) {
        self.cancelled = true;
        self.not_attempted.extend(remaining);
    }

    /// Number of items that reached a terminal classification
    pub fn attempted(&self) -> usize {
        self.succeeded.len() + self.failed.len() + self.invalid.len()
    }

    /// Every item handed to the batch is accounted for exactly once
    pub fn is_consistent(&self) -> bool {
        self.attempted() + self.not_attempted.len() == self.total
    }

    /// Whether no item failed
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    /// One-line summary for the end of a batch
    pub fn summary_text(&self) -> String {
        let mut text = format!(
            "{} of {} processed: {} succeeded, {} failed, {} invalid",
            self.attempted(),
            self.total,
            self.succeeded.len(),
            self.failed.len(),
            self.invalid.len()
        );
        if self.cancelled {
            text.push_str(&format!(
                " (cancelled, {} not attempted)",
                self.not_attempted.len()
            ));
        }
        text
    }
}
