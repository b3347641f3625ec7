//! Storage trait definition.
//!
//! Defines the interface for conversation store backends.

use crate::core::{Message, Topic};
use crate::error::{Result, StorageError};
use crate::storage::TOPIC_SETTING;
use serde::Serialize;

/// Trait for persistent conversation stores.
///
/// A store holds one conversation: an ordered list of messages plus a few
/// settings such as the selected topic.
pub trait Storage: Send {
    /// Initializes storage (creates schema).
    ///
    /// Should be idempotent - safe to call multiple times.
    ///
    /// # Errors
    ///
    /// Returns an error if schema creation fails.
    fn init(&mut self) -> Result<()>;

    /// Checks if storage is initialized.
    ///
    /// # Errors
    ///
    /// Returns an error if the check cannot be performed.
    fn is_initialized(&self) -> Result<bool>;

    /// Deletes all messages and settings but preserves the schema.
    ///
    /// # Errors
    ///
    /// Returns an error if deletion fails.
    fn reset(&mut self) -> Result<()>;

    /// Appends a message to the conversation.
    ///
    /// Returns the zero-based index of the new message.
    ///
    /// # Errors
    ///
    /// Returns an error if the message cannot be inserted.
    fn append_message(&mut self, message: &Message) -> Result<usize>;

    /// Returns every message in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is corrupt.
    fn messages(&self) -> Result<Vec<Message>>;

    /// Returns the number of stored messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the count query fails.
    fn message_count(&self) -> Result<usize>;

    /// Reads a setting.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn get_setting(&self, key: &str) -> Result<Option<String>>;

    /// Writes a setting, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn set_setting(&mut self, key: &str, value: &str) -> Result<()>;

    /// Gets storage statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if statistics cannot be gathered.
    fn stats(&self) -> Result<StorageStats>;

    /// Returns the selected topic, or the default when none is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the setting cannot be read or is not a topic.
    fn topic(&self) -> Result<Topic> {
        match self.get_setting(TOPIC_SETTING)? {
            Some(value) => value
                .parse()
                .map_err(|_| StorageError::Corrupt(format!("topic '{value}'")).into()),
            None => Ok(Topic::default()),
        }
    }

    /// Stores the selected topic.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn set_topic(&mut self, topic: Topic) -> Result<()> {
        self.set_setting(TOPIC_SETTING, topic.key())
    }
}

/// Storage statistics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StorageStats {
    /// Total number of messages.
    pub message_count: usize,
    /// Messages written by the user.
    pub user_messages: usize,
    /// Messages written by the assistant, the welcome message included.
    pub assistant_messages: usize,
    /// Stored topic key, if one was selected.
    pub topic: Option<String>,
    /// Schema version.
    pub schema_version: u32,
    /// Database file size in bytes (if applicable).
    pub db_size: Option<u64>,
}
