//! tunesort tags
//!
//! ID3 tag access for the tunesort organizer, built on lofty.
//!
//! # Example
//!
//! ```rust,no_run
//! use tunesort_core::TagStore;
//! use tunesort_tags::LoftyTagStore;
//! use std::path::Path;
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = LoftyTagStore::new();
//! let tags = store.read_tags(Path::new("/music/Artist A - Song One.mp3"))?;
//! println!("{:?}", tags.artist());
//! # Ok(())
//! # }
//! ```

mod error;
mod store;

pub use error::{Result, TagError};
pub use store::LoftyTagStore;
