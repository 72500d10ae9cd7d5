/// Batch commands: retag, artwork, copy/move, organize
use super::{auth, print_summary, resolve_dir, scan, App};
use crate::cli::{OrganizeArgs, SourceArgs, TransferArgs};
use anyhow::Result;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tunesort_batch::{ArtworkOperation, RetagOperation, TransferMode, TransferOperation};
use tunesort_core::{BatchResult, FileItem};
use tunesort_discogs::DiscogsSession;

/// Results of each `organize` stage that ran
#[derive(Debug, Default)]
pub struct OrganizeReport {
    pub retag: BatchResult,
    pub artwork: Option<BatchResult>,
    pub transfer: Option<BatchResult>,
}

fn source_dir(app: &App, args: &SourceArgs) -> Result<PathBuf> {
    resolve_dir(
        args.source.as_deref(),
        app.settings.source.as_deref(),
        "source",
    )
}

fn destination_dir(app: &App, args: &TransferArgs) -> Result<PathBuf> {
    resolve_dir(
        args.destination.as_deref(),
        app.settings.destination.as_deref(),
        "destination",
    )
}

pub async fn retag(app: &App, args: &SourceArgs) -> Result<BatchResult> {
    let source = source_dir(app, args)?;
    let items = scan(&source, args.depth())?;
    Ok(run_retag(app, &source, items).await)
}

pub async fn artwork(app: &mut App, args: &SourceArgs) -> Result<BatchResult> {
    let source = source_dir(app, args)?;
    let session = auth::open_session(app).await?;
    let items = scan(&source, args.depth())?;
    Ok(run_artwork(app, &session, items).await)
}

pub async fn transfer(app: &App, args: &TransferArgs, mode: TransferMode) -> Result<BatchResult> {
    let source = source_dir(app, &args.source)?;
    let destination = destination_dir(app, args)?;
    let items = scan(&source, args.source.depth())?;
    Ok(run_transfer(app, &destination, mode, items).await)
}

/// Retag, then artwork, then copy or move
///
/// Files quarantined or failed by retag stop there. Artwork failures do not
/// stop a file from being filed. A cancelled stage ends the chain.
pub async fn organize(app: &mut App, args: &OrganizeArgs) -> Result<OrganizeReport> {
    let source = source_dir(app, &args.transfer.source)?;
    let destination = destination_dir(app, &args.transfer)?;
    let session = if args.no_artwork {
        None
    } else {
        Some(auth::open_session(app).await?)
    };
    let mode = if args.move_files {
        TransferMode::Move
    } else {
        TransferMode::Copy
    };

    let items = scan(&source, args.transfer.source.depth())?;
    let mut report = OrganizeReport {
        retag: run_retag(app, &source, items).await,
        ..OrganizeReport::default()
    };
    if report.retag.cancelled {
        return Ok(report);
    }
    let mut next = report.retag.succeeded.clone();

    if let Some(session) = &session {
        let artwork = run_artwork(app, session, next.clone()).await;
        next = attempted(next, &artwork);
        let cancelled = artwork.cancelled;
        report.artwork = Some(artwork);
        if cancelled {
            return Ok(report);
        }
    }

    report.transfer = Some(run_transfer(app, &destination, mode, next).await);
    Ok(report)
}

/// Items the batch ran to an outcome, succeeded or failed, in input order
fn attempted(items: Vec<FileItem>, result: &BatchResult) -> Vec<FileItem> {
    let ran: BTreeSet<&FileItem> = result
        .succeeded
        .iter()
        .chain(result.failed.iter().map(|failed| &failed.item))
        .collect();
    items.into_iter().filter(|item| ran.contains(item)).collect()
}

async fn run_retag(app: &App, source: &Path, items: Vec<FileItem>) -> BatchResult {
    let operation = RetagOperation::new(&app.tags, &app.patterns, source);
    let result = app.processor().run(items, &operation).await;
    print_summary("retag", &result);
    result
}

async fn run_artwork(app: &App, session: &DiscogsSession, items: Vec<FileItem>) -> BatchResult {
    let operation = ArtworkOperation::new(&app.tags, session, &app.patterns);
    let result = app.processor().run(items, &operation).await;
    print_summary("artwork", &result);
    result
}

async fn run_transfer(
    app: &App,
    destination: &Path,
    mode: TransferMode,
    items: Vec<FileItem>,
) -> BatchResult {
    let operation = TransferOperation::new(&app.tags, &app.patterns, destination, mode);
    let result = app.processor().run(items, &operation).await;
    print_summary(mode.label(), &result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempted_keeps_failures_in_input_order() {
        let items: Vec<FileItem> = ["a.mp3", "b.mp3", "c.mp3"]
            .into_iter()
            .map(FileItem::new)
            .collect();
        let mut result = BatchResult::new(3);
        result.record_failure(items[0].clone(), "no results".to_string());
        result.record(items[1].clone(), tunesort_core::ItemOutcome::Completed(items[1].clone()));
        result.record_cancelled(std::iter::once(items[2].clone()));

        assert_eq!(attempted(items.clone(), &result), items[..2].to_vec());
    }
}
