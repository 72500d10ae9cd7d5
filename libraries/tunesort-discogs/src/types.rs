//! Types for Discogs API requests and responses.

use serde::{Deserialize, Serialize};
use tunesort_core::ArtistHit;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.discogs.com";

/// Page the user visits to authorize a request token
pub const DEFAULT_AUTHORIZE_URL: &str = "https://www.discogs.com/oauth/authorize";

/// Configuration for connecting to Discogs.
#[derive(Debug, Clone)]
pub struct DiscogsConfig {
    /// API base URL
    pub base_url: String,
    /// Authorization page URL
    pub authorize_url: String,
    /// Sent with every request; Discogs rejects anonymous agents
    pub user_agent: String,
    /// Application consumer key
    pub consumer_key: String,
    /// Application consumer secret
    pub consumer_secret: String,
    /// Stored access tokens, if the user has authorized the app
    pub tokens: Option<AccessTokens>,
}

impl DiscogsConfig {
    /// Create a config for the public API without tokens.
    pub fn new(
        user_agent: impl Into<String>,
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            authorize_url: DEFAULT_AUTHORIZE_URL.to_string(),
            user_agent: user_agent.into(),
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            tokens: None,
        }
    }

    /// Point at a different API host (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Attach stored access tokens.
    pub fn with_tokens(mut self, tokens: AccessTokens) -> Self {
        self.tokens = Some(tokens);
        self
    }
}

// =============================================================================
// Authentication Types
// =============================================================================

/// OAuth access token pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokens {
    pub token: String,
    pub secret: String,
}

/// Request token waiting for the user to authorize it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAuthorization {
    pub token: String,
    pub secret: String,
    /// Where the user approves access and obtains the verifier code
    pub authorize_url: String,
}

/// Identity of the authorized user.
#[derive(Debug, Clone, Deserialize)]
pub struct Identity {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub resource_url: String,
}

// =============================================================================
// Database Types
// =============================================================================

/// Response from `/database/search`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// A single search result.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub id: u64,
    pub title: String,
    pub resource_url: String,
}

impl From<SearchResult> for ArtistHit {
    fn from(result: SearchResult) -> Self {
        ArtistHit {
            id: result.id,
            title: result.title,
            resource_url: result.resource_url,
        }
    }
}

/// Full artist resource; only images are used.
#[derive(Debug, Deserialize)]
pub struct ArtistResource {
    #[serde(default)]
    pub images: Vec<Image>,
}

/// An image attached to a resource.
#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub uri: String,
    /// "primary" or "secondary"
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_ignores_extra_fields() {
        let json = r#"{
            "pagination": {"page": 1, "pages": 1},
            "results": [
                {"id": 1, "title": "Queen", "type": "artist", "thumb": "", "resource_url": "https://api.discogs.com/artists/1"}
            ]
        }"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        let hit: ArtistHit = response.results[0].clone().into();
        assert_eq!(hit.title, "Queen");
        assert_eq!(hit.resource_url, "https://api.discogs.com/artists/1");
    }

    #[test]
    fn test_artist_without_images() {
        let artist: ArtistResource = serde_json::from_str(r#"{"id": 5, "name": "X"}"#).unwrap();
        assert!(artist.images.is_empty());
    }
}
