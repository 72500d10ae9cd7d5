mod artwork;
mod batch;
mod item;
mod patterns;
mod progress;
mod tags;

pub use artwork::{ArtistHit, CoverArt};
pub use batch::{BatchResult, FailedItem, InvalidItem, ItemOutcome};
pub use item::{FileItem, QUARANTINE_DIR};
pub use patterns::{MatchPatterns, PatternSet};
pub use progress::ProgressState;
pub use tags::TrackTags;
