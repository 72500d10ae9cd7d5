//! Batch progress counter

use serde::{Deserialize, Serialize};

/// Count of processed items out of the batch total
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressState {
    /// Items that reached a terminal outcome so far
    pub processed: usize,
    /// Items in the batch
    pub total: usize,
}

impl ProgressState {
    /// Start tracking a batch of `total` items
    pub fn new(total: usize) -> Self {
        Self {
            processed: 0,
            total,
        }
    }

    /// Count one more item; never exceeds `total`
    pub fn advance(&mut self) {
        if self.processed < self.total {
            self.processed += 1;
        }
    }

    /// Whether every item has been counted
    pub fn is_complete(&self) -> bool {
        self.processed >= self.total
    }

    /// Completion percentage (100 for an empty batch)
    pub fn percentage(&self) -> f32 {
        if self.total == 0 {
            return 100.0;
        }
        (self.processed as f32 / self.total as f32) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_is_bounded_by_total() {
        let mut progress = ProgressState::new(2);
        progress.advance();
        progress.advance();
        progress.advance();
        assert_eq!(progress.processed, 2);
        assert!(progress.is_complete());
    }

    #[test]
    fn percentage() {
        let mut progress = ProgressState::new(4);
        assert_eq!(progress.percentage(), 0.0);
        progress.advance();
        assert_eq!(progress.percentage(), 25.0);
        assert_eq!(ProgressState::new(0).percentage(), 100.0);
    }
}
