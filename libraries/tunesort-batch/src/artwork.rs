//! Fetch-and-embed-artwork operation

use crate::artist::primary_artist;
use crate::{ItemOperation, OperationError};
use tunesort_core::{
    ArtistHit, ArtworkProvider, CoverArt, FileItem, ItemOutcome, MatchPatterns, TagStore,
};

/// How many search hits are tried before giving up
const MAX_HITS: usize = 2;

/// Looks up the primary artist and embeds their first image as front cover
///
/// Nothing is written unless an image was downloaded, so a failed lookup
/// leaves the file untouched.
pub struct ArtworkOperation<'a, T: TagStore, P: ArtworkProvider> {
    tags: &'a T,
    provider: &'a P,
    patterns: &'a MatchPatterns,
}

impl<'a, T: TagStore, P: ArtworkProvider> ArtworkOperation<'a, T, P> {
    pub fn new(tags: &'a T, provider: &'a P, patterns: &'a MatchPatterns) -> Self {
        Self {
            tags,
            provider,
            patterns,
        }
    }

    async fn cover_for_hit(&self, hit: &ArtistHit) -> Result<CoverArt, OperationError> {
        let images = self
            .provider
            .artist_images(hit)
            .await
            .map_err(|e| OperationError::Fetch(e.to_string()))?;
        let uri = images
            .first()
            .ok_or_else(|| OperationError::NoImages(hit.title.clone()))?;

        let data = self
            .provider
            .fetch_image(uri)
            .await
            .map_err(|e| OperationError::Fetch(e.to_string()))?;
        Ok(CoverArt::from_uri(uri, data))
    }
}

impl<T: TagStore, P: ArtworkProvider> ItemOperation for ArtworkOperation<'_, T, P> {
    fn name(&self) -> &str {
        "artwork"
    }

    async fn apply(&self, item: &FileItem) -> Result<ItemOutcome, OperationError> {
        let tags = self
            .tags
            .read_tags(item.path())
            .map_err(|e| OperationError::Tag(e.to_string()))?;
        let raw = tags.artist().ok_or(OperationError::MissingArtist)?;
        let artist = primary_artist(raw, self.patterns);
        if artist.is_empty() {
            return Err(OperationError::MissingArtist);
        }

        let hits = self
            .provider
            .search_artist(&artist)
            .await
            .map_err(|e| OperationError::Fetch(e.to_string()))?;
        if hits.is_empty() {
            return Err(OperationError::NoResults(artist));
        }

        let mut last_error = OperationError::NoResults(artist);
        for hit in hits.iter().take(MAX_HITS) {
            match self.cover_for_hit(hit).await {
                Ok(cover) => {
                    self.tags
                        .embed_cover(item.path(), &cover)
                        .map_err(|e| OperationError::Embed(e.to_string()))?;
                    tracing::debug!("Embedded artwork from {} into {}", hit.title, item);
                    return Ok(ItemOutcome::Completed(item.clone()));
                }
                Err(e) => {
                    tracing::debug!("No artwork from hit {} ({}): {}", hit.id, hit.title, e);
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}
