//! Discogs client and OAuth token flow.

use crate::error::{DiscogsError, Result};
use crate::oauth::{parse_token_response, OAuthHeader};
use crate::session::DiscogsSession;
use crate::types::{AccessTokens, DiscogsConfig, PendingAuthorization};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, info};

/// Callback value for out-of-band (copy/paste verifier) authorization
const OOB_CALLBACK: &str = "oob";

/// Client for the Discogs API.
///
/// Holds the consumer credentials and runs the OAuth token flow. Once
/// tokens exist, [`DiscogsClient::session`] hands out an authenticated
/// [`DiscogsSession`] for artwork lookups.
///
/// # Example
///
/// ```ignore
/// use tunesort_discogs::{DiscogsClient, DiscogsConfig};
///
/// let client = DiscogsClient::new(DiscogsConfig::new("tunesort/0.1", "key", "secret"))?;
/// let pending = client.request_token().await?;
/// println!("Visit {}", pending.authorize_url);
/// let tokens = client.exchange_verifier(&pending, "code").await?;
/// let session = client.with_tokens(tokens).session()?;
/// ```
pub struct DiscogsClient {
    http: Client,
    config: DiscogsConfig,
}

impl DiscogsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: DiscogsConfig) -> Result<Self> {
        if config.consumer_key.is_empty() {
            return Err(DiscogsError::MissingCredentials("consumer_key"));
        }
        if config.consumer_secret.is_empty() {
            return Err(DiscogsError::MissingCredentials("consumer_secret"));
        }
        if config.user_agent.is_empty() {
            return Err(DiscogsError::MissingCredentials("user_agent"));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(DiscogsError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            http,
            config: DiscogsConfig { base_url, ..config },
        })
    }

    /// Whether access tokens are configured.
    pub fn has_tokens(&self) -> bool {
        self.config.tokens.is_some()
    }

    /// Replace the stored access tokens.
    pub fn with_tokens(mut self, tokens: AccessTokens) -> Self {
        self.config.tokens = Some(tokens);
        self
    }

    /// Authenticated session using the stored tokens.
    pub fn session(&self) -> Result<DiscogsSession> {
        let tokens = self
            .config
            .tokens
            .clone()
            .ok_or(DiscogsError::MissingCredentials("access_token"))?;
        Ok(DiscogsSession::new(
            self.http.clone(),
            self.config.clone(),
            tokens,
        ))
    }

    /// Step 1: obtain a request token and the URL the user must visit.
    pub async fn request_token(&self) -> Result<PendingAuthorization> {
        let url = format!("{}/oauth/request_token", self.config.base_url);
        debug!(url = %url, "Requesting OAuth request token");

        let header = OAuthHeader::new(&self.config.consumer_key, &self.config.consumer_secret)
            .callback(OOB_CALLBACK)
            .build();

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, header)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .send()
            .await?;

        let body = check_status(response).await?.text().await?;
        let (token, secret) = parse_token_response(&body)?;

        let authorize_url = format!("{}?oauth_token={}", self.config.authorize_url, token);
        Ok(PendingAuthorization {
            token,
            secret,
            authorize_url,
        })
    }

    /// Step 2: trade the verifier code for access tokens.
    pub async fn exchange_verifier(
        &self,
        pending: &PendingAuthorization,
        verifier: &str,
    ) -> Result<AccessTokens> {
        let url = format!("{}/oauth/access_token", self.config.base_url);
        debug!(url = %url, "Exchanging OAuth verifier");

        let header = OAuthHeader::new(&self.config.consumer_key, &self.config.consumer_secret)
            .token(&pending.token, &pending.secret)
            .verifier(verifier.trim())
            .build();

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, header)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .send()
            .await?;

        let body = check_status(response).await?.text().await?;
        let (token, secret) = parse_token_response(&body)?;

        info!("Discogs authorization complete");
        Ok(AccessTokens { token, secret })
    }
}

/// Map non-success statuses to typed errors.
pub(crate) async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    match status.as_u16() {
        401 => {
            let message = response.text().await.unwrap_or_default();
            Err(DiscogsError::Unauthorized(message))
        }
        404 => Err(DiscogsError::NotFound(url)),
        429 => {
            let retry_after_secs = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
                .unwrap_or(60);
            Err(DiscogsError::RateLimited { retry_after_secs })
        }
        code => {
            let message = response.text().await.unwrap_or_default();
            Err(DiscogsError::Api {
                status: code,
                message,
            })
        }
    }
}
