//! Tag values the organizer reads and writes

use serde::{Deserialize, Serialize};

/// The subset of a tag container the organizer cares about
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackTags {
    /// Track artist, possibly with collaborator credits
    pub artist: Option<String>,
    /// Track title
    pub title: Option<String>,
}

impl TrackTags {
    /// Tags with both artist and title set
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: Some(artist.into()),
            title: Some(title.into()),
        }
    }

    /// Artist, ignoring blank values
    pub fn artist(&self) -> Option<&str> {
        self.artist
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_artist_is_none() {
        let tags = TrackTags {
            artist: Some("   ".to_string()),
            title: None,
        };
        assert_eq!(tags.artist(), None);
        assert_eq!(TrackTags::new(" Queen ", "Song").artist(), Some("Queen"));
    }
}
