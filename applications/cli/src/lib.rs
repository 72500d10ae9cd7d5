//! tunesort command-line application
//!
//! Wires the settings file, Discogs session, tag store, and progress bar
//! into the batch operations from `tunesort-batch`.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod progress;
pub mod settings;

pub use commands::App;
pub use settings::Settings;
