/// Command-line surface
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "tunesort", version)]
#[command(about = "Tag, decorate, and file MP3s by artist", long_about = None)]
pub struct Cli {
    /// Settings file path
    #[arg(long, global = true, env = "TUNESORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log per-item diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Hide progress bars
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Set artist and title tags from `<artist> - <title>.mp3` filenames
    Retag(SourceArgs),
    /// Embed artist images from Discogs as front cover
    Artwork(SourceArgs),
    /// Copy files into `<destination>/<artist>/`
    Copy(TransferArgs),
    /// Move files into `<destination>/<artist>/`
    Move(TransferArgs),
    /// Retag, fetch artwork, then copy (or move) in one run
    Organize(OrganizeArgs),
    /// Manage Discogs authorization
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Folder to scan (defaults to the configured source)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Folder levels to scan, 1 = source folder only
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub depth: Option<u64>,
}

impl SourceArgs {
    pub fn depth(&self) -> Option<usize> {
        self.depth
            .map(|depth| usize::try_from(depth).unwrap_or(usize::MAX))
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct TransferArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Folder to file into (defaults to the configured destination)
    #[arg(long)]
    pub destination: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct OrganizeArgs {
    #[command(flatten)]
    pub transfer: TransferArgs,

    /// Skip the artwork stage
    #[arg(long)]
    pub no_artwork: bool,

    /// Move instead of copy
    #[arg(long = "move")]
    pub move_files: bool,
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum AuthAction {
    /// Authorize tunesort with a Discogs account
    Login,
    /// Forget the stored tokens
    Logout,
    /// Check whether the stored tokens are still accepted
    Status,
}
