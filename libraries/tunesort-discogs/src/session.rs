//! Authenticated Discogs session.

use crate::client::check_status;
use crate::error::{DiscogsError, Result};
use crate::oauth::OAuthHeader;
use crate::types::{AccessTokens, ArtistResource, DiscogsConfig, Identity, SearchResponse};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder};
use tracing::debug;
use tunesort_core::{ArtistHit, ArtworkProvider};

/// An authorized connection to Discogs, created once per run.
pub struct DiscogsSession {
    http: Client,
    config: DiscogsConfig,
    tokens: AccessTokens,
}

impl DiscogsSession {
    pub(crate) fn new(http: Client, config: DiscogsConfig, tokens: AccessTokens) -> Self {
        Self {
            http,
            config,
            tokens,
        }
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let header = OAuthHeader::new(&self.config.consumer_key, &self.config.consumer_secret)
            .token(&self.tokens.token, &self.tokens.secret)
            .build();
        request.header(AUTHORIZATION, header)
    }

    /// Check that the stored tokens are still accepted.
    pub async fn verify_identity(&self) -> Result<Identity> {
        let url = format!("{}/oauth/identity", self.config.base_url);
        debug!(url = %url, "Verifying Discogs identity");

        let response = self.authorized(self.http.get(&url)).send().await?;
        check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| DiscogsError::Parse(format!("Failed to parse identity: {}", e)))
    }

    /// Search for artists by name.
    pub async fn search(&self, name: &str) -> Result<Vec<ArtistHit>> {
        let url = format!("{}/database/search", self.config.base_url);
        debug!(url = %url, artist = %name, "Searching artists");

        let request = self
            .http
            .get(&url)
            .query(&[("q", name), ("type", "artist")]);
        let response = self.authorized(request).send().await?;
        let search: SearchResponse = check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| DiscogsError::Parse(format!("Failed to parse search results: {}", e)))?;

        Ok(search.results.into_iter().map(ArtistHit::from).collect())
    }

    /// Image URIs of an artist resource, in Discogs order.
    pub async fn images(&self, hit: &ArtistHit) -> Result<Vec<String>> {
        debug!(url = %hit.resource_url, "Fetching artist resource");

        let response = self
            .authorized(self.http.get(&hit.resource_url))
            .send()
            .await?;
        let artist: ArtistResource = check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| DiscogsError::Parse(format!("Failed to parse artist: {}", e)))?;

        Ok(artist.images.into_iter().map(|image| image.uri).collect())
    }

    /// Download raw image bytes.
    pub async fn download(&self, uri: &str) -> Result<Vec<u8>> {
        debug!(url = %uri, "Downloading image");

        let response = self.http.get(uri).send().await?;
        let bytes = check_status(response).await?.bytes().await?;
        Ok(bytes.to_vec())
    }
}

impl ArtworkProvider for DiscogsSession {
    async fn search_artist(&self, name: &str) -> tunesort_core::Result<Vec<ArtistHit>> {
        Ok(self.search(name).await?)
    }

    async fn artist_images(&self, hit: &ArtistHit) -> tunesort_core::Result<Vec<String>> {
        Ok(self.images(hit).await?)
    }

    async fn fetch_image(&self, uri: &str) -> tunesort_core::Result<Vec<u8>> {
        Ok(self.download(uri).await?)
    }
}
