//! Batch processor - runs one operation over a list of files

use crate::OperationError;
use futures_util::FutureExt;
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tunesort_core::{BatchResult, FileItem, ItemOutcome, ProgressReporter, ProgressState};

/// A per-item transform applied by the [`BatchProcessor`]
#[allow(async_fn_in_trait)]
pub trait ItemOperation {
    /// Short label used for progress and logs
    fn name(&self) -> &str;

    /// Apply the operation to one file
    async fn apply(&self, item: &FileItem) -> Result<ItemOutcome, OperationError>;
}

/// Adapter turning a closure into an [`ItemOperation`]
pub struct FnOperation<F> {
    name: String,
    f: F,
}

/// Wrap a closure as an operation
pub fn from_fn<F, Fut>(name: impl Into<String>, f: F) -> FnOperation<F>
where
    F: Fn(FileItem) -> Fut,
    Fut: Future<Output = Result<ItemOutcome, OperationError>>,
{
    FnOperation {
        name: name.into(),
        f,
    }
}

impl<F, Fut> ItemOperation for FnOperation<F>
where
    F: Fn(FileItem) -> Fut,
    Fut: Future<Output = Result<ItemOutcome, OperationError>>,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn apply(&self, item: &FileItem) -> Result<ItemOutcome, OperationError> {
        (self.f)(item.clone()).await
    }
}

/// Sequential, failure-isolating batch runner
///
/// Items are awaited one at a time in the order given. A failing or
/// panicking item is recorded and the loop moves on.
pub struct BatchProcessor<'a> {
    reporter: &'a dyn ProgressReporter,
    cancel: Option<Arc<AtomicBool>>,
}

impl<'a> BatchProcessor<'a> {
    /// Create a processor reporting to `reporter`
    pub fn new(reporter: &'a dyn ProgressReporter) -> Self {
        Self {
            reporter,
            cancel: None,
        }
    }

    /// Stop between items once `flag` is set
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    /// Run `operation` over `items`
    pub async fn run<O: ItemOperation>(&self, items: Vec<FileItem>, operation: &O) -> BatchResult {
        let total = items.len();
        let mut result = BatchResult::new(total);
        let mut progress = ProgressState::new(total);

        tracing::info!("{}: {} files", operation.name(), total);
        self.reporter.started(operation.name(), total);

        let mut remaining = items.into_iter();
        while let Some(item) = remaining.next() {
            if self.is_cancelled() {
                tracing::info!(
                    "{}: cancelled after {} of {}",
                    operation.name(),
                    progress.processed,
                    total
                );
                result.record_cancelled(std::iter::once(item).chain(remaining.by_ref()));
                break;
            }

            let attempt = AssertUnwindSafe(operation.apply(&item))
                .catch_unwind()
                .await
                .unwrap_or_else(|payload| {
                    Err(OperationError::Panicked(panic_message(payload.as_ref())))
                });

            match attempt {
                Ok(outcome) => {
                    if let ItemOutcome::Invalid { reason, .. } = &outcome {
                        tracing::debug!("Quarantined {}: {}", item, reason);
                    } else {
                        tracing::debug!("Processed {}", item);
                    }
                    result.record(item, outcome);
                }
                Err(e) => {
                    let reason = e.to_string();
                    tracing::debug!("Failed {}: {}", item, reason);
                    self.reporter.item_failed(&item, &reason);
                    result.record_failure(item, reason);
                }
            }

            progress.advance();
            self.reporter.progress(progress);
        }

        tracing::info!("{}: {}", operation.name(), result.summary_text());
        self.reporter.finished(&result);
        result
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
