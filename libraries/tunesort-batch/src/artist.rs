//! Primary artist extraction and folder naming

use regex::Regex;
use tunesort_core::MatchPatterns;

/// Strip collaborator credits from an artist tag
///
/// Splits on the "and" pattern first, then on the "feature" pattern, keeping
/// the first segment each time.
///
/// ```
/// use tunesort_batch::artist::primary_artist;
/// use tunesort_core::{MatchPatterns, PatternSet};
///
/// let set = PatternSet {
///     feature_tags: r"feat\.".to_string(),
///     ..PatternSet::default()
/// };
/// let patterns = MatchPatterns::compile(&set).unwrap();
/// assert_eq!(primary_artist("Artist A feat. Artist B", &patterns), "Artist A");
/// ```
pub fn primary_artist(raw: &str, patterns: &MatchPatterns) -> String {
    let artist = first_segment(patterns.and(), raw);
    first_segment(patterns.feature(), artist).to_string()
}

fn first_segment<'a>(pattern: Option<&Regex>, text: &'a str) -> &'a str {
    let head = match pattern {
        Some(re) => re.split(text).next().unwrap_or(text),
        None => text,
    };
    head.trim()
}

/// Sanitize a string for use as a folder name
///
/// Replaces characters that are invalid on common filesystems
pub fn sanitize_folder_name(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            // Invalid on Windows: < > : " / \ | ? *
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect::<String>()
        .trim()
        .trim_end_matches('.')
        .to_string()
}
