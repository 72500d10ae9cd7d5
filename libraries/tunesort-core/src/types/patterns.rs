//! Filename and artist matching patterns

use crate::error::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Default separator between collaborating artists
pub const DEFAULT_AND_PATTERN: &str = r"(?i)\s+(?:&|and|vs\.?)\s+";

/// Default inline "featuring" marker, e.g. `Artist feat. Other`
pub const DEFAULT_FEATURE_PATTERN: &str = r"(?i)\s+(?:featuring|feat\.|ft\.)\s+";

/// Default bracketed "featuring" marker, e.g. `Title (feat. Other)`
pub const DEFAULT_FEATURE_ALT_PATTERN: &str = r"(?i)\((?:featuring|feat\.?|ft\.)\s+";

/// Default marker for files that are not plain tracks
pub const DEFAULT_INVALID_PATTERN: &str =
    r"(?i)official\s+(?:music\s+)?video|lyrics?\s+video|\[(?:hd|hq)\]";

/// Raw pattern strings as stored in the settings file
///
/// An empty string disables that pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSet {
    /// Separator between collaborating artists
    pub and_tags: String,
    /// Inline "featuring" marker
    pub feature_tags: String,
    /// Bracketed "featuring" marker
    pub feature2_tags: String,
    /// Marker for files that must be quarantined
    pub invalid_tags: String,
}

impl Default for PatternSet {
    fn default() -> Self {
        Self {
            and_tags: DEFAULT_AND_PATTERN.to_string(),
            feature_tags: DEFAULT_FEATURE_PATTERN.to_string(),
            feature2_tags: DEFAULT_FEATURE_ALT_PATTERN.to_string(),
            invalid_tags: DEFAULT_INVALID_PATTERN.to_string(),
        }
    }
}

/// Compiled matching patterns
#[derive(Debug, Clone)]
pub struct MatchPatterns {
    and: Option<Regex>,
    feature: Option<Regex>,
    feature_alt: Option<Regex>,
    invalid: Option<Regex>,
}

impl MatchPatterns {
    /// Compile a pattern set; an invalid regex is a configuration error
    pub fn compile(set: &PatternSet) -> Result<Self> {
        Ok(Self {
            and: compile_one(&set.and_tags)?,
            feature: compile_one(&set.feature_tags)?,
            feature_alt: compile_one(&set.feature2_tags)?,
            invalid: compile_one(&set.invalid_tags)?,
        })
    }

    /// Patterns that never match
    pub fn disabled() -> Self {
        Self {
            and: None,
            feature: None,
            feature_alt: None,
            invalid: None,
        }
    }

    /// Separator between collaborating artists
    pub fn and(&self) -> Option<&Regex> {
        self.and.as_ref()
    }

    /// Inline "featuring" marker
    pub fn feature(&self) -> Option<&Regex> {
        self.feature.as_ref()
    }

    /// Bracketed "featuring" marker
    pub fn feature_alt(&self) -> Option<&Regex> {
        self.feature_alt.as_ref()
    }

    /// Marker for files that must be quarantined
    pub fn invalid(&self) -> Option<&Regex> {
        self.invalid.as_ref()
    }

    /// Whether `name` matches the invalid pattern
    pub fn is_invalid(&self, name: &str) -> bool {
        self.invalid.as_ref().is_some_and(|re| re.is_match(name))
    }
}

impl Default for MatchPatterns {
    fn default() -> Self {
        // The built-in defaults are known-good literals.
        Self::compile(&PatternSet::default()).unwrap_or_else(|_| Self::disabled())
    }
}

fn compile_one(pattern: &str) -> Result<Option<Regex>> {
    if pattern.is_empty() {
        return Ok(None);
    }
    Ok(Some(Regex::new(pattern)?))
}
