/// tunesort - MP3 organizer
use anyhow::Context;
use clap::Parser;
use std::sync::atomic::Ordering;
use tunesort::cli::{AuthAction, Cli, Commands};
use tunesort::settings::{resolve_config_path, Settings};
use tunesort::{commands, logging, App};
use tunesort_batch::TransferMode;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config_path = resolve_config_path(cli.config.clone())?;
    let settings = Settings::load(&config_path)
        .with_context(|| format!("failed to load settings from {}", config_path.display()))?;
    tracing::debug!("Settings file: {}", config_path.display());

    let mut app = App::new(settings, config_path, cli.quiet)?;

    // Ctrl-C stops the running batch between items
    let cancel = app.cancel_flag();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, finishing the current file");
            cancel.store(true, Ordering::SeqCst);
        }
    });

    match cli.command {
        Commands::Retag(args) => {
            commands::retag(&app, &args).await?;
        }
        Commands::Artwork(args) => {
            commands::artwork(&mut app, &args).await?;
        }
        Commands::Copy(args) => {
            commands::transfer(&app, &args, TransferMode::Copy).await?;
        }
        Commands::Move(args) => {
            commands::transfer(&app, &args, TransferMode::Move).await?;
        }
        Commands::Organize(args) => {
            commands::organize(&mut app, &args).await?;
        }
        Commands::Auth { action } => match action {
            AuthAction::Login => commands::login(&mut app).await?,
            AuthAction::Logout => commands::logout(&mut app)?,
            AuthAction::Status => commands::status(&mut app).await?,
        },
    }

    Ok(())
}
