//! Drill extraction for Courtside.
//!
//! Turns free-form coaching replies into structured drill records in two
//! stages:
//!
//! - **Segments**: split a reply into sentences and lines that look like
//!   drill descriptions ([`SegmentExtractor`])
//! - **Fields**: pull name, sets, reps and time out of one segment
//!   ([`DrillFieldParser`])
//!
//! [`SummaryAggregator`] runs both stages over a conversation. Everything
//! here is deterministic and side-effect free.

pub mod fields;
pub mod patterns;
pub mod segment;
pub mod summary;

pub use fields::DrillFieldParser;
pub use patterns::Pattern;
pub use segment::{SegmentExtractor, normalize_line_endings};
pub use summary::SummaryAggregator;

use crate::core::{DrillRecord, Message, TaggedDrill};

/// Splits raw reply text into candidate drill segments.
///
/// See [`SegmentExtractor::extract`].
#[must_use]
pub fn extract_segments(text: &str) -> Vec<String> {
    SegmentExtractor::new().extract(text)
}

/// Parses one segment into a drill record.
///
/// See [`DrillFieldParser::parse`].
#[must_use]
pub fn parse_drill(segment: &str) -> Option<DrillRecord> {
    DrillFieldParser::new().parse(segment)
}

/// Extracts every drill from a single reply, in document order.
///
/// # Examples
///
/// ```
/// use courtside::extract::extract_drills;
///
/// let drills = extract_drills("Crossovers: 3 sets of 1 minute each.\nNice work!");
/// assert_eq!(drills.len(), 1);
/// assert_eq!(drills[0].time.as_deref(), Some("1 minute"));
/// ```
#[must_use]
pub fn extract_drills(text: &str) -> Vec<DrillRecord> {
    let parser = DrillFieldParser::new();
    extract_segments(text)
        .iter()
        .filter_map(|segment| parser.parse(segment))
        .collect()
}

/// Extracts every drill from the assistant messages of a conversation.
///
/// See [`SummaryAggregator::summarize`].
#[must_use]
pub fn summarize(messages: &[Message]) -> Vec<TaggedDrill> {
    SummaryAggregator::new().summarize(messages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_drills_keeps_document_order() {
        let text = "Warm up with 2 minutes of jump rope.\n\
                    Then 4 sets of 10 reps of pound dribbles.\n\
                    Finish with 50 free throws.";
        let names: Vec<String> = extract_drills(text).into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["Warm Up Jump Rope", "Pound Dribbles", "Free Throws"]);
    }

    #[test]
    fn test_extract_drills_empty() {
        assert!(extract_drills("").is_empty());
    }

    #[test]
    fn test_colon_fallback_feeds_parser() {
        let drills = extract_drills("Nice!\nFinish: strong");
        assert_eq!(drills.len(), 1);
        assert_eq!(drills[0].name, "Finish");
        assert_eq!(drills[0].source, "Finish: strong");
    }
}
