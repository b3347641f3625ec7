//! Grapheme-aware text shortening.

use unicode_segmentation::UnicodeSegmentation;

/// Counts grapheme clusters in a string.
///
/// # Examples
///
/// ```
/// use courtside::io::grapheme_count;
///
/// assert_eq!(grapheme_count("Hello"), 5);
/// assert_eq!(grapheme_count("🏀🏀"), 2);
/// ```
#[must_use]
pub fn grapheme_count(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Truncates a string at a grapheme cluster boundary.
///
/// Returns at most `max_graphemes` grapheme clusters.
#[must_use]
pub fn truncate_graphemes(s: &str, max_graphemes: usize) -> &str {
    let end_byte = s
        .grapheme_indices(true)
        .nth(max_graphemes)
        .map_or(s.len(), |(idx, _)| idx);
    &s[..end_byte]
}

/// One-line preview of a message.
///
/// Whitespace runs, newlines included, collapse to single spaces; text
/// longer than `max_graphemes` is cut and marked with `…`.
///
/// # Examples
///
/// ```
/// use courtside::io::preview;
///
/// assert_eq!(preview("Try 3 sets\nof 20", 40), "Try 3 sets of 20");
/// assert_eq!(preview("Welcome to the court!", 7), "Welcome…");
/// ```
#[must_use]
pub fn preview(s: &str, max_graphemes: usize) -> String {
    let flat = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if grapheme_count(&flat) <= max_graphemes {
        return flat;
    }
    let mut cut = truncate_graphemes(&flat, max_graphemes).trim_end().to_string();
    cut.push('…');
    cut
}
