//! tunesort batch pipeline
//!
//! Runs one per-file operation over a list of MP3 files, isolating failures
//! and reporting progress after every item.
//!
//! # Architecture
//!
//! - `processor`: The sequential batch runner
//! - `retag`: Tags from `<artist> - <title>.mp3` filenames, quarantines the rest
//! - `artwork`: Fetches artist images and embeds them as front cover
//! - `transfer`: Copies or moves files into artist folders
//! - `artist` / `filename`: Pattern-driven name handling shared by the operations
//! - `scanner`: Glob + depth file discovery

mod error;
mod files;

pub mod artist;
pub mod artwork;
pub mod filename;
pub mod processor;
pub mod retag;
pub mod scanner;
pub mod transfer;

pub use artwork::ArtworkOperation;
pub use error::OperationError;
pub use processor::{from_fn, BatchProcessor, FnOperation, ItemOperation};
pub use retag::RetagOperation;
pub use scanner::FileScanner;
pub use transfer::{TransferMode, TransferOperation};
