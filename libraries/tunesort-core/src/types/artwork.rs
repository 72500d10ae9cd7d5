//! Artwork search and image types

use serde::{Deserialize, Serialize};

/// Description stored with embedded cover pictures
pub const COVER_DESCRIPTION: &str = "Cover";

/// One ranked artist result from an artwork provider search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistHit {
    /// Provider-specific artist ID
    pub id: u64,
    /// Display name of the artist
    pub title: String,
    /// URL of the full artist resource (holds the image list)
    pub resource_url: String,
}

/// Image bytes ready to embed as cover art
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverArt {
    /// Raw image bytes
    pub data: Vec<u8>,
    /// MIME type (e.g., "image/jpeg")
    pub mime_type: String,
    /// Picture description
    pub description: String,
}

impl CoverArt {
    /// Create cover art with an explicit MIME type
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
            description: COVER_DESCRIPTION.to_string(),
        }
    }

    /// Create cover art, deriving the MIME type from the image URI extension
    pub fn from_uri(uri: &str, data: Vec<u8>) -> Self {
        Self::new(data, mime_type_for_uri(uri))
    }
}

/// `image/<ext>` for the last dot-separated segment of the URI path
pub fn mime_type_for_uri(uri: &str) -> String {
    let path = uri.split(['?', '#']).next().unwrap_or(uri);
    let ext = path
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty() && !ext.contains('/'))
        .map(str::to_lowercase)
        .unwrap_or_else(|| "jpeg".to_string());

    match ext.as_str() {
        "jpg" => "image/jpeg".to_string(),
        other => format!("image/{other}"),
    }
}
