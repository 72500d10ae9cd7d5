/// Tag store implementation using lofty
use crate::error::{Result, TagError};
use lofty::{Accessor, MimeType, Picture, PictureType, Probe, Tag, TagExt, TaggedFile, TaggedFileExt};
use std::path::Path;
use tracing::debug;
use tunesort_core::{CoverArt, TagStore, TrackTags};

/// Tag store backed by the lofty library
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyTagStore;

impl LoftyTagStore {
    /// Create a new tag store
    pub fn new() -> Self {
        Self
    }

    fn open(path: &Path) -> Result<TaggedFile> {
        if !path.exists() {
            return Err(TagError::FileNotFound(path.display().to_string()));
        }
        Ok(Probe::open(path)?.read()?)
    }

    /// Read artist and title from the primary tag (or the first tag present)
    pub fn read(&self, path: &Path) -> Result<TrackTags> {
        let tagged_file = Self::open(path)?;

        let Some(tag) = tagged_file
            .primary_tag()
            .or_else(|| tagged_file.first_tag())
        else {
            return Ok(TrackTags::default());
        };

        Ok(TrackTags {
            artist: tag.artist().map(|s| s.to_string()),
            title: tag.title().map(|s| s.to_string()),
        })
    }

    /// Set artist and title, then save
    pub fn write(&self, path: &Path, tags: &TrackTags) -> Result<()> {
        let mut tagged_file = Self::open(path)?;
        let tag = primary_tag_mut(&mut tagged_file, path)?;

        if let Some(artist) = &tags.artist {
            tag.set_artist(artist.clone());
        }
        if let Some(title) = &tags.title {
            tag.set_title(title.clone());
        }

        tag.save_to_path(path)
            .map_err(|e: lofty::error::LoftyError| TagError::WriteError(e.to_string()))?;

        debug!("Wrote tags to {:?}", path);
        Ok(())
    }

    /// Replace the front cover, then save
    pub fn embed(&self, path: &Path, cover: &CoverArt) -> Result<()> {
        let mut tagged_file = Self::open(path)?;
        let tag = primary_tag_mut(&mut tagged_file, path)?;

        let picture = Picture::new_unchecked(
            PictureType::CoverFront,
            Some(MimeType::from_str(&cover.mime_type)),
            Some(cover.description.clone()),
            cover.data.clone(),
        );
        tag.remove_picture_type(PictureType::CoverFront);
        tag.push_picture(picture);

        tag.save_to_path(path)
            .map_err(|e: lofty::error::LoftyError| TagError::WriteError(e.to_string()))?;

        debug!("Embedded {} byte cover into {:?}", cover.data.len(), path);
        Ok(())
    }
}

/// Get or create the primary tag
fn primary_tag_mut<'a>(tagged_file: &'a mut TaggedFile, path: &Path) -> Result<&'a mut Tag> {
    let tag_type = tagged_file.primary_tag_type();
    if tagged_file.tag(tag_type).is_none() {
        tagged_file.insert_tag(Tag::new(tag_type));
    }
    tagged_file
        .tag_mut(tag_type)
        .ok_or_else(|| TagError::NoTag(path.display().to_string()))
}

impl TagStore for LoftyTagStore {
    fn read_tags(&self, path: &Path) -> tunesort_core::Result<TrackTags> {
        Ok(self.read(path)?)
    }

    fn write_tags(&self, path: &Path, tags: &TrackTags) -> tunesort_core::Result<()> {
        Ok(self.write(path, tags)?)
    }

    fn embed_cover(&self, path: &Path, cover: &CoverArt) -> tunesort_core::Result<()> {
        Ok(self.embed(path, cover)?)
    }
}
