//! `<artist> - <title>.mp3` filename handling

use std::fmt;
use tunesort_core::MatchPatterns;

/// Separator between artist and title
pub const SEPARATOR: &str = " - ";

/// Replacement for the inline "featuring" marker
const FEATURE_REPLACEMENT: &str = " ft. ";

/// Replacement for the bracketed "featuring" marker
const FEATURE_ALT_REPLACEMENT: &str = "(ft. ";

/// Length of the trailing extension (".mp3") stripped from the title
const EXTENSION_LEN: usize = 4;

/// Artist and title parsed from a filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub artist: String,
    pub title: String,
}

/// Why a filename does not follow the naming convention
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// The name matched the configured invalid pattern
    MatchesInvalidPattern,
    /// Splitting on the separator gave this many tokens instead of two
    TokenCount(usize),
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MatchesInvalidPattern => write!(f, "matches invalid pattern"),
            Self::TokenCount(n) => {
                write!(f, "expected \"<artist>{SEPARATOR}<title>\", found {n} part(s)")
            }
        }
    }
}

/// Rewrite "featuring" markers to `ft.`
pub fn normalize_file_name(name: &str, patterns: &MatchPatterns) -> String {
    let name = match patterns.feature() {
        Some(re) => re.replace_all(name, FEATURE_REPLACEMENT).into_owned(),
        None => name.to_string(),
    };
    match patterns.feature_alt() {
        Some(re) => re.replace_all(&name, FEATURE_ALT_REPLACEMENT).into_owned(),
        None => name,
    }
}

/// Parse a normalized filename into artist and title
pub fn parse_file_name(name: &str, patterns: &MatchPatterns) -> Result<ParsedName, InvalidReason> {
    if patterns.is_invalid(name) {
        return Err(InvalidReason::MatchesInvalidPattern);
    }

    let tokens: Vec<&str> = name.split(SEPARATOR).collect();
    let [artist, title] = tokens.as_slice() else {
        return Err(InvalidReason::TokenCount(tokens.len()));
    };

    Ok(ParsedName {
        artist: artist.trim().to_string(),
        title: strip_extension(title).trim().to_string(),
    })
}

fn strip_extension(token: &str) -> &str {
    let keep = token.chars().count().saturating_sub(EXTENSION_LEN);
    match token.char_indices().nth(keep) {
        Some((end, _)) => &token[..end],
        None => token,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tunesort_core::PatternSet;

    #[test]
    fn test_parse_valid_name() {
        let parsed = parse_file_name("Artist A - Song One.mp3", &MatchPatterns::default()).unwrap();
        assert_eq!(parsed.artist, "Artist A");
        assert_eq!(parsed.title, "Song One");
    }

    #[test]
    fn test_missing_separator_is_invalid() {
        assert_eq!(
            parse_file_name("BadFormat.mp3", &MatchPatterns::default()),
            Err(InvalidReason::TokenCount(1))
        );
        assert_eq!(
            parse_file_name("A - B - C.mp3", &MatchPatterns::default()),
            Err(InvalidReason::TokenCount(3))
        );
    }

    #[test]
    fn test_invalid_pattern_checked_first() {
        let patterns = MatchPatterns::compile(&PatternSet {
            invalid_tags: "(?i)remix".to_string(),
            ..PatternSet::default()
        })
        .unwrap();
        assert_eq!(
            parse_file_name("Artist - Song (Remix).mp3", &patterns),
            Err(InvalidReason::MatchesInvalidPattern)
        );
    }

    #[test]
    fn test_normalize_feature_markers() {
        let patterns = MatchPatterns::default();
        assert_eq!(
            normalize_file_name("A featuring B - Song.mp3", &patterns),
            "A ft. B - Song.mp3"
        );
        assert_eq!(
            normalize_file_name("A - Song (feat. B).mp3", &patterns),
            "A - Song (ft. B).mp3"
        );
        assert_eq!(normalize_file_name("A - Song.mp3", &patterns), "A - Song.mp3");
        assert_eq!(
            normalize_file_name("A - Ft Lauderdale Nights.mp3", &patterns),
            "A - Ft Lauderdale Nights.mp3"
        );
    }

    #[test]
    fn test_title_extension_strip_is_char_safe() {
        let parsed = parse_file_name("Björk - Jóga.mp3", &MatchPatterns::default()).unwrap();
        assert_eq!(parsed.title, "Jóga");
        assert_eq!(strip_extension(".mp"), "");
    }
}
