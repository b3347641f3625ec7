//! Compiled pattern table for drill extraction.
//!
//! Every pattern is compiled once on first use and shared afterwards; the
//! tables are immutable, so extraction can run from any number of threads.

use regex::Regex;
use std::sync::OnceLock;

/// Text patterns used by the segment extractor and the field parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    // Segmentation
    /// Segment boundary: a newline, or a period optionally followed by whitespace.
    SegmentBoundary,
    /// Whole-word volume/duration keyword that marks a candidate segment.
    DrillKeyword,
    /// Any decimal digit.
    Digit,
    /// `label: value` run on a single line.
    LabelValue,

    // Field parsing
    /// Leading directive word ("Try", "Finish with", ...).
    Directive,
    /// `<n> set(s)`.
    SetCount,
    /// `<n>[-<m>] <unit>` with a minute/second unit.
    Duration,
    /// `<n>-<m>` or `<n> to <m>`, optionally followed by `rep(s)`.
    RepRange,
    /// `<n> rep(s)`.
    RepCount,
    /// `set(s) [of] <n>`.
    SetsOf,
    /// A bare run of digits.
    Number,

    // Name cleanup
    /// A standalone number or number range.
    StandaloneNumber,
    /// Filler words dropped from derived names.
    FillerWord,
    /// Punctuation dropped from derived names.
    NamePunctuation,
}

impl Pattern {
    /// Returns the compiled regex for this pattern.
    #[allow(clippy::expect_used)]
    pub fn regex(self) -> &'static Regex {
        macro_rules! static_regex {
            ($name:ident, $pattern:expr) => {{
                static $name: OnceLock<Regex> = OnceLock::new();
                $name.get_or_init(|| Regex::new($pattern).expect("valid regex"))
            }};
        }

        match self {
            Self::SegmentBoundary => static_regex!(SEGMENT_BOUNDARY, r"\n|\.\s*"),
            Self::DrillKeyword => static_regex!(
                DRILL_KEYWORD,
                r"(?i)\b(?:sets?|reps?|min|minute|sec|second|time)\b"
            ),
            Self::Digit => static_regex!(DIGIT, r"\d"),
            Self::LabelValue => static_regex!(LABEL_VALUE, r"([^:\n]+):([^\n]+)"),

            Self::Directive => static_regex!(
                DIRECTIVE,
                r"(?i)^\s*(?:try|then|finish\s+with|perform|do|start\s+with|begin\s+with|continue\s+with)\b\s*[:,]?\s*"
            ),
            Self::SetCount => static_regex!(SET_COUNT, r"(?i)(\d+)\s*sets?\b"),
            Self::Duration => static_regex!(
                DURATION,
                r"(?i)(\d+)(?:(?:\s*-\s*|\s+to\s+)(\d+))?\s*-?\s*(minutes?|mins?|seconds?|sec)\b"
            ),
            Self::RepRange => static_regex!(
                REP_RANGE,
                r"(?i)(\d+)(?:\s*-\s*|\s+to\s+)(\d+)(?:\s*reps?\b)?"
            ),
            Self::RepCount => static_regex!(REP_COUNT, r"(?i)(\d+)\s*reps?\b"),
            Self::SetsOf => static_regex!(SETS_OF, r"(?i)sets?\s+(?:of\s+)?(\d+)"),
            Self::Number => static_regex!(NUMBER, r"\d+"),

            Self::StandaloneNumber => static_regex!(
                STANDALONE_NUMBER,
                r"(?i)\b\d+(?:(?:\s*-\s*|\s+to\s+)\d+)?\b"
            ),
            Self::FillerWord => static_regex!(
                FILLER_WORD,
                r"(?i)\b(?:reps?|sets?|minutes?|mins?|seconds?|sec|each|per|side|of|for|with|and|the|a|an|x)\b"
            ),
            Self::NamePunctuation => static_regex!(NAME_PUNCTUATION, r"[,:;\-().\[\]]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Pattern; 14] = [
        Pattern::SegmentBoundary,
        Pattern::DrillKeyword,
        Pattern::Digit,
        Pattern::LabelValue,
        Pattern::Directive,
        Pattern::SetCount,
        Pattern::Duration,
        Pattern::RepRange,
        Pattern::RepCount,
        Pattern::SetsOf,
        Pattern::Number,
        Pattern::StandaloneNumber,
        Pattern::FillerWord,
        Pattern::NamePunctuation,
    ];

    #[test]
    fn test_all_patterns_compile() {
        for pattern in ALL {
            let _ = pattern.regex();
        }
    }

    #[test]
    fn test_keyword_is_whole_word() {
        let re = Pattern::DrillKeyword.regex();
        assert!(re.is_match("Three SETS today"));
        assert!(re.is_match("one more time"));
        assert!(!re.is_match("reset your stance"));
        assert!(!re.is_match("minutes"));
    }

    #[test]
    fn test_directive_variants() {
        let re = Pattern::Directive.regex();
        assert_eq!(re.replace("Finish with: sprints", ""), "sprints");
        assert_eq!(re.replace("then, 3 sets", ""), "3 sets");
        assert_eq!(re.replace("Donut drill", ""), "Donut drill");
    }

    #[test]
    fn test_duration_accepts_hyphenated_unit() {
        let caps = Pattern::Duration.regex().captures("2 sets of 1-minute holds").unwrap();
        assert_eq!(&caps[1], "1");
        assert!(caps.get(2).is_none());
        assert_eq!(&caps[3], "minute");
    }
}
