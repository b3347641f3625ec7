//! Segment extraction.
//!
//! Splits an assistant reply into the sentences and lines that are likely
//! to describe a drill.

use crate::extract::patterns::Pattern;

/// Splits raw reply text into candidate drill segments.
///
/// Segments come back trimmed and in document order. Identical segments are
/// kept; nothing is deduplicated.
///
/// # Examples
///
/// ```
/// use courtside::extract::SegmentExtractor;
///
/// let text = "Great session. Try 3 sets of 20 dribbles.\nRest 30 seconds.";
/// let segments = SegmentExtractor::new().extract(text);
/// assert_eq!(segments, vec!["Try 3 sets of 20 dribbles", "Rest 30 seconds"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentExtractor;

impl SegmentExtractor {
    /// Creates a segment extractor.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Extracts candidate segments from `text`.
    ///
    /// Pieces between newlines and periods are kept when they mention a
    /// volume keyword or contain a digit. When no piece qualifies, every
    /// `label: value` line is returned instead, normalized to
    /// `"label: value"`.
    #[must_use]
    pub fn extract(&self, text: &str) -> Vec<String> {
        let normalized = normalize_line_endings(text);

        let candidates: Vec<String> = Pattern::SegmentBoundary
            .regex()
            .split(&normalized)
            .map(str::trim)
            .filter(|piece| !piece.is_empty() && is_candidate(piece))
            .map(ToString::to_string)
            .collect();

        if !candidates.is_empty() {
            return candidates;
        }

        label_value_lines(&normalized)
    }
}

/// Converts `\r\n` and bare `\r` line endings to `\n`.
#[must_use]
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Returns true if a piece mentions a drill keyword or contains a digit.
pub(crate) fn is_candidate(piece: &str) -> bool {
    Pattern::DrillKeyword.regex().is_match(piece) || Pattern::Digit.regex().is_match(piece)
}

/// Collects `label: value` runs as synthetic segments.
fn label_value_lines(normalized: &str) -> Vec<String> {
    Pattern::LabelValue
        .regex()
        .captures_iter(normalized)
        .map(|caps| {
            let label = caps.get(1).map_or("", |m| m.as_str()).trim();
            let value = caps.get(2).map_or("", |m| m.as_str()).trim();
            format!("{label}: {value}").trim().to_string()
        })
        .collect()
}
