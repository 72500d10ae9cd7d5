/// Discogs authorization commands and session setup
use super::App;
use anyhow::{anyhow, bail, Context as _, Result};
use std::io::{self, BufRead, Write};
use tunesort_discogs::{DiscogsClient, DiscogsError, DiscogsSession, Identity};

const LOGIN_HINT: &str = "run `tunesort auth login`";

fn client(app: &App) -> Result<DiscogsClient> {
    DiscogsClient::new(app.settings.discogs_config())
        .context("Discogs consumer credentials are not configured")
}

/// Authenticated session for this run
///
/// Stored tokens that Discogs rejects are cleared from the settings file
/// before the error is returned.
pub(crate) async fn open_session(app: &mut App) -> Result<DiscogsSession> {
    verified_session(app).await.map(|(session, _)| session)
}

async fn verified_session(app: &mut App) -> Result<(DiscogsSession, Identity)> {
    let client = client(app)?;
    if !client.has_tokens() {
        bail!("not authorized with Discogs; {LOGIN_HINT}");
    }
    let session = client.session()?;

    match session.verify_identity().await {
        Ok(identity) => {
            tracing::info!("Authorized with Discogs as {}", identity.username);
            Ok((session, identity))
        }
        Err(e) if e.is_unauthorized() => {
            forget_tokens(app)?;
            bail!("Discogs rejected the stored tokens ({e}); they have been cleared, {LOGIN_HINT}")
        }
        Err(e) => Err(e).context("failed to reach Discogs"),
    }
}

fn forget_tokens(app: &mut App) -> Result<()> {
    app.settings.clear_tokens();
    app.save_settings()
}

/// Interactive OAuth flow: print the authorize URL, read the verifier from stdin
pub async fn login(app: &mut App) -> Result<()> {
    let client = client(app)?;
    let pending = client
        .request_token()
        .await
        .context("failed to obtain a Discogs request token")?;

    println!("Open this URL, authorize tunesort, and paste the code shown:");
    println!("  {}", pending.authorize_url);
    print!("Verification code: ");
    io::stdout().flush()?;

    let verifier = read_line()?;
    if verifier.trim().is_empty() {
        bail!("no verification code entered");
    }

    let tokens = match client.exchange_verifier(&pending, &verifier).await {
        Ok(tokens) => tokens,
        Err(DiscogsError::Unauthorized(message)) => {
            bail!("Discogs rejected the verification code: {message}")
        }
        Err(e) => return Err(e).context("failed to exchange the verification code"),
    };

    let identity = client
        .with_tokens(tokens.clone())
        .session()?
        .verify_identity()
        .await
        .context("failed to confirm the new tokens")?;

    app.settings.set_tokens(tokens);
    app.save_settings()?;
    println!("Authorized as {}", identity.username);
    Ok(())
}

pub fn logout(app: &mut App) -> Result<()> {
    forget_tokens(app)?;
    println!("Discogs tokens cleared");
    Ok(())
}

pub async fn status(app: &mut App) -> Result<()> {
    if app.settings.tokens().is_none() {
        println!("Not authorized; {LOGIN_HINT}");
        return Ok(());
    }
    let (_, identity) = verified_session(app).await?;
    println!("Authorized as {} (id {})", identity.username, identity.id);
    Ok(())
}

fn read_line() -> Result<String> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| anyhow!("failed to read the verification code: {e}"))?;
    Ok(line)
}
