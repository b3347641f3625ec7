//! Conversation-level drill summaries.

use crate::core::{Message, TaggedDrill};
use crate::extract::fields::DrillFieldParser;
use crate::extract::segment::SegmentExtractor;
use tracing::debug;

/// Runs segment extraction and field parsing over a whole conversation.
///
/// Only assistant messages are examined, and the static welcome greeting
/// at index 0 is skipped. Each record is tagged with the index of the
/// message it came from. Nothing is cached: every call re-derives the
/// summary from the messages it is given.
///
/// # Examples
///
/// ```
/// use courtside::core::Message;
/// use courtside::extract::SummaryAggregator;
///
/// let messages = vec![
///     Message::welcome(),
///     Message::user("How do I get quicker hands?"),
///     Message::assistant("Try 3 sets of 20 pound dribbles."),
/// ];
/// let drills = SummaryAggregator::new().summarize(&messages);
/// assert_eq!(drills.len(), 1);
/// assert_eq!(drills[0].message_index, 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryAggregator {
    segments: SegmentExtractor,
    fields: DrillFieldParser,
}

impl SummaryAggregator {
    /// Creates an aggregator with the default extractor and parser.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            segments: SegmentExtractor::new(),
            fields: DrillFieldParser::new(),
        }
    }

    /// Extracts every drill from the assistant messages, in message order.
    #[must_use]
    pub fn summarize(&self, messages: &[Message]) -> Vec<TaggedDrill> {
        let drills: Vec<TaggedDrill> = messages
            .iter()
            .enumerate()
            .filter(|(index, message)| is_summarizable(*index, message))
            .flat_map(|(index, message)| {
                self.segments
                    .extract(&message.content)
                    .into_iter()
                    .filter_map(|segment| self.fields.parse(&segment))
                    .map(move |drill| TaggedDrill::new(index, drill))
                    .collect::<Vec<_>>()
            })
            .collect();

        debug!(
            messages = messages.len(),
            drills = drills.len(),
            "summarized conversation"
        );
        drills
    }
}

/// Returns true if a message's content should be mined for drills.
fn is_summarizable(index: usize, message: &Message) -> bool {
    !message.role.is_user() && !(index == 0 && message.is_welcome())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WELCOME_MESSAGE;

    fn conversation() -> Vec<Message> {
        vec![
            Message::welcome(),
            Message::user("Give me 3 dribbling drills"),
            Message::assistant(
                "Try 3 sets of 20 left-hand dribbles with cones.\nCrossovers: 3 sets of 1 minute each",
            ),
            Message::user("And shooting?"),
            Message::assistant("Form shooting: 5 sets of 10 reps. Great work!"),
        ]
    }

    #[test]
    fn test_summarize_tags_message_indices() {
        let drills = SummaryAggregator::new().summarize(&conversation());
        let indices: Vec<usize> = drills.iter().map(|d| d.message_index).collect();
        assert_eq!(indices, vec![2, 2, 4]);
        assert_eq!(drills[0].drill.name, "Left Hand Dribbles Cones");
        assert_eq!(drills[1].drill.name, "Crossovers");
        assert_eq!(drills[2].drill.name, "Form shooting");
    }

    #[test]
    fn test_user_messages_ignored() {
        let messages = vec![Message::user("I did 3 sets of 20 reps yesterday")];
        assert!(SummaryAggregator::new().summarize(&messages).is_empty());
    }

    #[test]
    fn test_welcome_only_skipped_at_index_zero() {
        assert!(is_summarizable(1, &Message::welcome()));
        assert!(!is_summarizable(0, &Message::welcome()));
        assert!(is_summarizable(0, &Message::assistant("3 sets of squats")));
        assert!(!is_summarizable(0, &Message::user(WELCOME_MESSAGE)));
    }

    #[test]
    fn test_first_assistant_message_not_welcome_is_summarized() {
        let messages = vec![Message::assistant("Jump rope for 2 minutes")];
        let drills = SummaryAggregator::new().summarize(&messages);
        assert_eq!(drills.len(), 1);
        assert_eq!(drills[0].message_index, 0);
        assert_eq!(drills[0].drill.time.as_deref(), Some("2 minutes"));
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let messages = conversation();
        let aggregator = SummaryAggregator::new();
        assert_eq!(aggregator.summarize(&messages), aggregator.summarize(&messages));
    }

    #[test]
    fn test_empty_conversation() {
        assert!(SummaryAggregator::new().summarize(&[]).is_empty());
    }
}
