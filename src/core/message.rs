//! Conversation messages.
//!
//! A conversation is an ordered list of messages; a message's position in
//! that list is its index, which drill summaries use to point back at the
//! reply they were extracted from.

use crate::error::CommandError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Static greeting seeded as the first message of every conversation.
pub const WELCOME_MESSAGE: &str =
    "Welcome to the court! 🏀 Pick a topic with `courtside topic` and start chatting!";

/// Author of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The athlete typing prompts.
    User,
    /// The coaching assistant (language model replies and fallbacks).
    Assistant,
}

impl Role {
    /// Returns the lowercase wire name of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }

    /// Returns true for [`Role::User`].
    #[must_use]
    pub const fn is_user(self) -> bool {
        matches!(self, Self::User)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "user" => Ok(Self::User),
            "assistant" | "bot" => Ok(Self::Assistant),
            _ => Err(CommandError::UnknownRole(s.to_string())),
        }
    }
}

/// A single conversation turn.
///
/// # Examples
///
/// ```
/// use courtside::core::{Message, Role};
///
/// let msg = Message::user("How do I improve my handle?");
/// assert_eq!(msg.role, Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who wrote the message.
    pub role: Role,
    /// Message text, as written or generated.
    pub content: String,
}

impl Message {
    /// Creates a message.
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Creates a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Creates an assistant message.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Creates the static welcome greeting.
    #[must_use]
    pub fn welcome() -> Self {
        Self::assistant(WELCOME_MESSAGE)
    }

    /// Returns true if this is the static welcome greeting.
    #[must_use]
    pub fn is_welcome(&self) -> bool {
        self.role == Role::Assistant && self.content == WELCOME_MESSAGE
    }
}
