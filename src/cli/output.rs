//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::core::{DrillRecord, Message, TaggedDrill, Topic};
use crate::error::Error;
use crate::io::preview;
use crate::storage::StorageStats;
use serde::Serialize;
use std::fmt::Write;

/// Longest message preview shown by `history`, in grapheme clusters.
const PREVIEW_LEN: usize = 72;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats a status response.
#[must_use]
pub fn format_status(stats: &StorageStats, topic: Topic, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_status_text(stats, topic),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Status<'a> {
                #[serde(flatten)]
                stats: &'a StorageStats,
                topic_label: &'static str,
            }
            format_json(&Status {
                stats,
                topic_label: topic.label(),
            })
        }
    }
}

fn format_status_text(stats: &StorageStats, topic: Topic) -> String {
    let mut output = String::new();
    output.push_str("Courtside Status\n");
    output.push_str("================\n\n");
    let _ = writeln!(output, "  Topic:         {topic}");
    let _ = writeln!(output, "  Messages:      {}", stats.message_count);
    let _ = writeln!(output, "    user:        {}", stats.user_messages);
    let _ = writeln!(output, "    assistant:   {}", stats.assistant_messages);
    let _ = writeln!(output, "  Schema:        v{}", stats.schema_version);
    if let Some(size) = stats.db_size {
        let _ = writeln!(output, "  DB size:       {size} bytes");
    }
    output
}

/// Formats the selected topic.
#[must_use]
pub fn format_topic(topic: Topic, changed: bool, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text if changed => format!("You selected: {topic}\n"),
        OutputFormat::Text => {
            let mut output = format!("Current topic: {topic}\n\nAvailable topics:\n");
            for t in Topic::ALL {
                let marker = if t == topic { '*' } else { ' ' };
                let _ = writeln!(output, "  {marker} {:<18} ({})", t.label(), t.key());
            }
            output
        }
        OutputFormat::Json => format_json(&serde_json::json!({
            "topic": topic.key(),
            "label": topic.label(),
            "changed": changed,
        })),
    }
}

/// Formats conversation messages.
///
/// `first_index` is the conversation index of `messages[0]`.
#[must_use]
pub fn format_history(messages: &[Message], first_index: usize, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            if messages.is_empty() {
                return "No messages.\n".to_string();
            }
            let mut output = String::new();
            for (offset, message) in messages.iter().enumerate() {
                let _ = writeln!(
                    output,
                    "[{:>3}] {:<9} {}",
                    first_index + offset,
                    message.role,
                    preview(&message.content, PREVIEW_LEN)
                );
            }
            output
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Indexed<'a> {
                index: usize,
                #[serde(flatten)]
                message: &'a Message,
            }
            let rows: Vec<Indexed<'_>> = messages
                .iter()
                .enumerate()
                .map(|(offset, message)| Indexed {
                    index: first_index + offset,
                    message,
                })
                .collect();
            format_json(&rows)
        }
    }
}

/// Formats a conversation summary.
///
/// Drills are grouped by the message they came from and numbered as tips
/// within each message.
#[must_use]
pub fn format_summary(drills: &[TaggedDrill], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_summary_text(drills),
        OutputFormat::Json => format_json(&drills),
    }
}

fn format_summary_text(drills: &[TaggedDrill]) -> String {
    if drills.is_empty() {
        return "No drills suggested yet.\n".to_string();
    }

    let mut output = String::new();
    let mut current = None;
    let mut tip = 0;
    for tagged in drills {
        if current != Some(tagged.message_index) {
            if current.is_some() {
                output.push('\n');
            }
            let _ = writeln!(output, "Message {}", tagged.message_index);
            current = Some(tagged.message_index);
            tip = 0;
        }
        tip += 1;
        let _ = writeln!(output, "  Tip {tip}: {}", drill_line(&tagged.drill));
    }
    output
}

/// Formats drills extracted from raw text.
#[must_use]
pub fn format_drills(drills: &[DrillRecord], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            if drills.is_empty() {
                return "No drills found.\n".to_string();
            }
            let mut output = String::new();
            for (i, drill) in drills.iter().enumerate() {
                let _ = writeln!(output, "{}. {}", i + 1, drill_line(drill));
                let _ = writeln!(output, "   source: {}", drill.source);
            }
            output
        }
        OutputFormat::Json => format_json(&drills),
    }
}

/// Formats candidate segments.
#[must_use]
pub fn format_segments(segments: &[String], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            for segment in segments {
                let _ = writeln!(output, "{segment}");
            }
            output
        }
        OutputFormat::Json => format_json(&segments),
    }
}

/// Formats the assistant's reply to a chat turn.
#[must_use]
pub fn format_reply(index: usize, reply: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{}\n", reply.trim_end()),
        OutputFormat::Json => format_json(&serde_json::json!({
            "index": index,
            "role": "assistant",
            "content": reply,
        })),
    }
}

/// Formats an error for display.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => format_json(&serde_json::json!({
            "error": error.to_string(),
        })),
    }
}

/// One-line rendering of a drill: name followed by its volume.
fn drill_line(drill: &DrillRecord) -> String {
    let volume: Vec<String> = [
        drill.sets.as_ref().map(|s| format!("{s} sets")),
        drill.reps.as_ref().map(|r| format!("{r} reps")),
        drill.time.clone(),
    ]
    .into_iter()
    .flatten()
    .collect();

    if volume.is_empty() {
        drill.name.clone()
    } else {
        format!("{} ({})", drill.name, volume.join(", "))
    }
}

fn format_json<T: Serialize>(value: &T) -> String {
    let mut json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    json.push('\n');
    json
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;

    fn drill(name: &str) -> DrillRecord {
        DrillRecord::new(name, format!("{name} source"))
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("unknown"), OutputFormat::Text);
    }

    #[test]
    fn test_drill_line() {
        let d = drill("Crossover Dribbles")
            .with_sets(Some("2".to_string()))
            .with_time(Some("1 minute".to_string()));
        assert_eq!(drill_line(&d), "Crossover Dribbles (2 sets, 1 minute)");
        assert_eq!(drill_line(&drill("Cooldown")), "Cooldown");
    }

    #[test]
    fn test_summary_tips_restart_per_message() {
        let drills = vec![
            TaggedDrill::new(2, drill("A")),
            TaggedDrill::new(2, drill("B")),
            TaggedDrill::new(4, drill("C")),
        ];
        let text = format_summary(&drills, OutputFormat::Text);
        assert_eq!(
            text,
            "Message 2\n  Tip 1: A\n  Tip 2: B\n\nMessage 4\n  Tip 1: C\n"
        );
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(
            format_summary(&[], OutputFormat::Text),
            "No drills suggested yet.\n"
        );
        assert_eq!(format_summary(&[], OutputFormat::Json), "[]\n");
    }

    #[test]
    fn test_summary_json_is_flat() {
        let drills = vec![TaggedDrill::new(2, drill("A").with_reps(Some("10".to_string())))];
        let value: serde_json::Value =
            serde_json::from_str(&format_summary(&drills, OutputFormat::Json)).unwrap();
        assert_eq!(value[0]["message_index"], 2);
        assert_eq!(value[0]["name"], "A");
        assert_eq!(value[0]["reps"], "10");
        assert!(value[0].get("sets").is_none());
    }

    #[test]
    fn test_history_text() {
        let messages = vec![Message::user("hi"), Message::assistant("Do\n3 sets")];
        let text = format_history(&messages, 1, OutputFormat::Text);
        assert_eq!(text, "[  1] user      hi\n[  2] assistant Do 3 sets\n");
    }

    #[test]
    fn test_history_json() {
        let messages = vec![Message::user("hi")];
        let value: serde_json::Value =
            serde_json::from_str(&format_history(&messages, 5, OutputFormat::Json)).unwrap();
        assert_eq!(value[0]["index"], 5);
        assert_eq!(value[0]["role"], "user");
        assert_eq!(value[0]["content"], "hi");
    }

    #[test]
    fn test_topic_listing_marks_current() {
        let text = format_topic(Topic::Diet, false, OutputFormat::Text);
        assert!(text.starts_with("Current topic: Diet\n"));
        assert!(text.contains("* Diet"));
        assert_eq!(
            format_topic(Topic::Diet, true, OutputFormat::Text),
            "You selected: Diet\n"
        );
    }

    #[test]
    fn test_format_error_json() {
        let err: Error = StorageError::NotInitialized.into();
        let value: serde_json::Value =
            serde_json::from_str(&format_error(&err, OutputFormat::Json)).unwrap();
        assert!(value["error"].as_str().unwrap().contains("courtside init"));
    }

    #[test]
    fn test_status_text() {
        let stats = StorageStats {
            message_count: 3,
            user_messages: 1,
            assistant_messages: 2,
            topic: Some("passing".to_string()),
            schema_version: 1,
            db_size: None,
        };
        let text = format_status(&stats, Topic::Passing, OutputFormat::Text);
        assert!(text.contains("Topic:         Passing"));
        assert!(text.contains("Messages:      3"));
    }
}
