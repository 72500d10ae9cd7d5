//! tunesort Discogs provider
//!
//! Artwork lookups against the Discogs API.
//!
//! # Features
//!
//! - **Authentication**: OAuth 1.0a (PLAINTEXT) request/verify/access token flow
//! - **Search**: Artist search with ranked results
//! - **Images**: Artist image lists and raw image downloads
//!
//! # Example
//!
//! ```ignore
//! use tunesort_core::ArtworkProvider;
//! use tunesort_discogs::{AccessTokens, DiscogsClient, DiscogsConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DiscogsConfig::new("tunesort/0.1", "key", "secret").with_tokens(AccessTokens {
//!         token: "token".into(),
//!         secret: "secret".into(),
//!     });
//!     let session = DiscogsClient::new(config)?.session()?;
//!     session.verify_identity().await?;
//!
//!     let hits = session.search_artist("Queen").await?;
//!     println!("Found {} artists", hits.len());
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod oauth;
mod session;
mod types;

pub use client::DiscogsClient;
pub use error::{DiscogsError, Result};
pub use oauth::OAuthHeader;
pub use session::DiscogsSession;
pub use types::{
    AccessTokens, DiscogsConfig, Identity, PendingAuthorization, DEFAULT_AUTHORIZE_URL,
    DEFAULT_BASE_URL,
};
