//! Reply generation.
//!
//! The hosted language model is an external collaborator: it takes a prompt
//! and returns free text, and it may fail or be slow. [`ReplyGenerator`] is
//! the seam; [`GeminiClient`] is the production implementation and
//! [`StaticReplyGenerator`] a fixed-answer stand-in.
//!
//! Generation failures are never shown to the athlete as errors.
//! [`reply_or_fallback`] turns them into a warning message that takes the
//! place of the reply so the conversation can continue.

pub mod gemini;
pub mod prompt;

pub use gemini::GeminiClient;
pub use prompt::{SYSTEM_INSTRUCTIONS, build_prompt};

use crate::core::Topic;
use crate::error::ReplyError;
use tracing::{info, warn};

/// Prefix of the message shown in place of a failed reply.
pub const FALLBACK_PREFIX: &str = "⚠️ Error:";

/// Produces assistant replies for user prompts.
pub trait ReplyGenerator: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Generates a reply to `prompt` within the selected training topic.
    ///
    /// # Errors
    ///
    /// Returns a [`ReplyError`] when the reply cannot be produced.
    fn generate(&self, prompt: &str, topic: Topic) -> Result<String, ReplyError>;
}

/// Generates a reply, substituting a warning message on failure.
///
/// # Examples
///
/// ```
/// use courtside::core::Topic;
/// use courtside::reply::{FALLBACK_PREFIX, StaticReplyGenerator, reply_or_fallback};
///
/// let offline = StaticReplyGenerator::failing("network unreachable");
/// let text = reply_or_fallback(&offline, "help", Topic::Passing);
/// assert!(text.starts_with(FALLBACK_PREFIX));
/// ```
pub fn reply_or_fallback(generator: &dyn ReplyGenerator, prompt: &str, topic: Topic) -> String {
    match generator.generate(prompt, topic) {
        Ok(reply) => {
            info!(
                generator = generator.name(),
                topic = topic.key(),
                chars = reply.len(),
                "reply generated"
            );
            reply
        }
        Err(err) => {
            warn!(generator = generator.name(), error = %err, "reply failed, using fallback");
            fallback_message(&err)
        }
    }
}

/// Formats the user-visible stand-in for a failed reply.
#[must_use]
pub fn fallback_message(err: &ReplyError) -> String {
    format!("{FALLBACK_PREFIX} {err}")
}

/// A generator that always answers the same way.
///
/// Useful offline and in tests.
#[derive(Debug, Clone)]
pub struct StaticReplyGenerator {
    outcome: Result<String, String>,
}

impl StaticReplyGenerator {
    /// Always replies with `text`.
    #[must_use]
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            outcome: Ok(text.into()),
        }
    }

    /// Always fails with a connection error mentioning `reason`.
    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(reason.into()),
        }
    }
}

impl ReplyGenerator for StaticReplyGenerator {
    fn name(&self) -> &str {
        "static"
    }

    fn generate(&self, _prompt: &str, _topic: Topic) -> Result<String, ReplyError> {
        self.outcome.clone().map_err(ReplyError::Connection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_passes_through() {
        let generator = StaticReplyGenerator::replying("Try 3 sets of 20 dribbles.");
        let text = reply_or_fallback(&generator, "help", Topic::Dribbling);
        assert_eq!(text, "Try 3 sets of 20 dribbles.");
    }

    #[test]
    fn test_failure_becomes_warning() {
        let generator = StaticReplyGenerator::failing("example.invalid");
        let text = reply_or_fallback(&generator, "help", Topic::Dribbling);
        assert_eq!(text, "⚠️ Error: cannot reach example.invalid");
    }

    #[test]
    fn test_fallback_message() {
        let text = fallback_message(&ReplyError::Timeout(60));
        assert_eq!(text, "⚠️ Error: request timed out after 60s");
    }
}
