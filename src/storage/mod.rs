//! Storage layer for Courtside.
//!
//! Persists the conversation (messages in order) and the selected topic
//! using `SQLite`.

pub mod schema;
pub mod sqlite;
pub mod traits;

pub use schema::{CURRENT_SCHEMA_VERSION, SCHEMA_SQL};
pub use sqlite::SqliteStorage;
pub use traits::{Storage, StorageStats};

/// Default database path relative to the working directory.
pub const DEFAULT_DB_PATH: &str = ".courtside/courtside.db";

/// Settings key holding the selected topic.
pub const TOPIC_SETTING: &str = "topic";
