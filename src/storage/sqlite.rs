//! `SQLite` storage implementation.
//!
//! Provides persistent storage for the conversation using `SQLite` with
//! WAL journaling and foreign keys enabled.

// SQLite stores all integers as i64. Counts and indices are non-negative
// and fit in usize.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use crate::core::{Message, Role};
use crate::error::{Result, StorageError};
use crate::storage::schema::{
    CHECK_SCHEMA_SQL, CURRENT_SCHEMA_VERSION, GET_VERSION_SQL, SCHEMA_SQL, SET_VERSION_SQL,
};
use crate::storage::traits::{Storage, StorageStats};
use crate::storage::TOPIC_SETTING;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// SQLite-based conversation store.
///
/// # Examples
///
/// ```no_run
/// use courtside::core::Message;
/// use courtside::storage::{SqliteStorage, Storage};
///
/// let mut storage = SqliteStorage::open(".courtside/courtside.db").unwrap();
/// storage.init().unwrap();
/// storage.append_message(&Message::welcome()).unwrap();
/// ```
pub struct SqliteStorage {
    /// `SQLite` connection.
    conn: Connection,
    /// Path to the database file (None for in-memory).
    path: Option<PathBuf>,
}

impl SqliteStorage {
    /// Opens or creates a `SQLite` database at the given path.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::Database(e.to_string()))?;
        }

        let conn = Connection::open(&path).map_err(StorageError::from)?;
        conn.execute("PRAGMA foreign_keys = ON;", [])
            .map_err(StorageError::from)?;
        let _: String = conn
            .query_row("PRAGMA journal_mode = WAL;", [], |row| row.get(0))
            .map_err(StorageError::from)?;

        debug!(path = %path.display(), "opened conversation store");
        Ok(Self {
            conn,
            path: Some(path),
        })
    }

    /// Creates an in-memory `SQLite` database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be created.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(StorageError::from)?;
        conn.execute("PRAGMA foreign_keys = ON;", [])
            .map_err(StorageError::from)?;
        Ok(Self { conn, path: None })
    }

    /// Returns the database path (None for in-memory).
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn get_schema_version(&self) -> Result<Option<u32>> {
        let version: Option<String> = self
            .conn
            .query_row(GET_VERSION_SQL, [], |row| row.get(0))
            .optional()
            .map_err(StorageError::from)?;
        Ok(version.and_then(|v| v.parse().ok()))
    }

    fn set_schema_version(&self, version: u32) -> Result<()> {
        self.conn
            .execute(SET_VERSION_SQL, params![version.to_string()])
            .map_err(StorageError::from)?;
        Ok(())
    }

    fn count(&self, sql: &str) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row(sql, [], |row| row.get(0))
            .map_err(StorageError::from)?;
        Ok(count as usize)
    }

    #[allow(clippy::cast_possible_wrap)]
    fn now() -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }
}

impl Storage for SqliteStorage {
    fn init(&mut self) -> Result<()> {
        if !self.is_initialized()? {
            self.conn
                .execute_batch(SCHEMA_SQL)
                .map_err(StorageError::from)?;
            self.set_schema_version(CURRENT_SCHEMA_VERSION)?;
            info!(version = CURRENT_SCHEMA_VERSION, "created conversation schema");
        }
        Ok(())
    }

    fn is_initialized(&self) -> Result<bool> {
        Ok(self.count(CHECK_SCHEMA_SQL)? > 0)
    }

    fn reset(&mut self) -> Result<()> {
        self.conn
            .execute_batch(
                r"
            DELETE FROM messages;
            DELETE FROM settings;
            DELETE FROM sqlite_sequence WHERE name = 'messages';
        ",
            )
            .map_err(StorageError::from)?;
        info!("conversation reset");
        Ok(())
    }

    fn append_message(&mut self, message: &Message) -> Result<usize> {
        let index = self.message_count()?;
        self.conn
            .execute(
                "INSERT INTO messages (role, content, created_at) VALUES (?, ?, ?)",
                params![message.role.as_str(), message.content, Self::now()],
            )
            .map_err(StorageError::from)?;
        debug!(index, role = %message.role, "appended message");
        Ok(index)
    }

    fn messages(&self) -> Result<Vec<Message>> {
        let mut stmt = self
            .conn
            .prepare("SELECT role, content FROM messages ORDER BY id")
            .map_err(StorageError::from)?;

        let rows = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })
            .map_err(StorageError::from)?;

        let mut messages = Vec::new();
        for row in rows {
            let (role, content) = row.map_err(StorageError::from)?;
            let role: Role = role
                .parse()
                .map_err(|_| StorageError::Corrupt(format!("role '{role}'")))?;
            messages.push(Message::new(role, content));
        }
        Ok(messages)
    }

    fn message_count(&self) -> Result<usize> {
        self.count("SELECT COUNT(*) FROM messages")
    }

    fn get_setting(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(StorageError::from)?;
        Ok(value)
    }

    fn set_setting(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO settings (key, value, updated_at) VALUES (?, ?, ?)",
                params![key, value, Self::now()],
            )
            .map_err(StorageError::from)?;
        Ok(())
    }

    fn stats(&self) -> Result<StorageStats> {
        let message_count = self.message_count()?;
        let user_messages = self.count("SELECT COUNT(*) FROM messages WHERE role = 'user'")?;
        let topic = self.get_setting(TOPIC_SETTING)?;
        let schema_version = self.get_schema_version()?.unwrap_or(0);
        let db_size = self
            .path
            .as_ref()
            .and_then(|p| std::fs::metadata(p).ok().map(|m| m.len()));

        Ok(StorageStats {
            message_count,
            user_messages,
            assistant_messages: message_count - user_messages,
            topic,
            schema_version,
            db_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Topic;
    use tempfile::TempDir;

    fn setup() -> SqliteStorage {
        let mut storage = SqliteStorage::in_memory().unwrap();
        storage.init().unwrap();
        storage
    }

    #[test]
    fn test_store_moves_across_threads() {
        let storage: Box<dyn Storage> = Box::new(setup());
        let count = std::thread::spawn(move || storage.message_count().unwrap())
            .join()
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_init() {
        let mut storage = SqliteStorage::in_memory().unwrap();
        assert!(!storage.is_initialized().unwrap());
        storage.init().unwrap();
        assert!(storage.is_initialized().unwrap());
    }

    #[test]
    fn test_init_idempotent() {
        let mut storage = setup();
        storage.append_message(&Message::welcome()).unwrap();
        storage.init().unwrap();
        assert_eq!(storage.message_count().unwrap(), 1);
    }

    #[test]
    fn test_append_returns_index() {
        let mut storage = setup();
        assert_eq!(storage.append_message(&Message::welcome()).unwrap(), 0);
        assert_eq!(storage.append_message(&Message::user("hi")).unwrap(), 1);
        assert_eq!(
            storage
                .append_message(&Message::assistant("Try 3 sets of 10"))
                .unwrap(),
            2
        );
    }

    #[test]
    fn test_messages_in_order() {
        let mut storage = setup();
        storage.append_message(&Message::welcome()).unwrap();
        storage.append_message(&Message::user("help me")).unwrap();
        storage
            .append_message(&Message::assistant("Do 3 sets of 20 dribbles."))
            .unwrap();

        let messages = storage.messages().unwrap();
        assert_eq!(messages.len(), 3);
        assert!(messages[0].is_welcome());
        assert_eq!(messages[1], Message::user("help me"));
        assert_eq!(messages[2].role, Role::Assistant);
    }

    #[test]
    fn test_reset_clears_data_keeps_schema() {
        let mut storage = setup();
        storage.append_message(&Message::user("hi")).unwrap();
        storage.set_topic(Topic::Diet).unwrap();

        storage.reset().unwrap();
        assert!(storage.is_initialized().unwrap());
        assert_eq!(storage.message_count().unwrap(), 0);
        assert_eq!(storage.topic().unwrap(), Topic::Dribbling);
        assert_eq!(storage.append_message(&Message::welcome()).unwrap(), 0);
    }

    #[test]
    fn test_settings() {
        let mut storage = setup();
        assert_eq!(storage.get_setting("missing").unwrap(), None);
        storage.set_setting("k", "v1").unwrap();
        storage.set_setting("k", "v2").unwrap();
        assert_eq!(storage.get_setting("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn test_topic_roundtrip() {
        let mut storage = setup();
        assert_eq!(storage.topic().unwrap(), Topic::Dribbling);
        storage.set_topic(Topic::PhysiqueTraining).unwrap();
        assert_eq!(storage.topic().unwrap(), Topic::PhysiqueTraining);
    }

    #[test]
    fn test_corrupt_topic() {
        let mut storage = setup();
        storage.set_setting(TOPIC_SETTING, "underwater").unwrap();
        let err = storage.topic().unwrap_err();
        assert!(err.to_string().contains("corrupt record"));
    }

    #[test]
    fn test_stats() {
        let mut storage = setup();
        storage.append_message(&Message::welcome()).unwrap();
        storage.append_message(&Message::user("hi")).unwrap();
        storage.set_topic(Topic::Shooting).unwrap();

        let stats = storage.stats().unwrap();
        assert_eq!(stats.message_count, 2);
        assert_eq!(stats.user_messages, 1);
        assert_eq!(stats.assistant_messages, 1);
        assert_eq!(stats.topic.as_deref(), Some("shooting"));
        assert_eq!(stats.schema_version, CURRENT_SCHEMA_VERSION);
        assert!(stats.db_size.is_none());
    }

    #[test]
    fn test_file_persistence() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("courtside.db");

        {
            let mut storage = SqliteStorage::open(&path).unwrap();
            storage.init().unwrap();
            storage.append_message(&Message::user("persist me")).unwrap();
        }

        let storage = SqliteStorage::open(&path).unwrap();
        assert_eq!(storage.path(), Some(path.as_path()));
        assert_eq!(storage.messages().unwrap(), vec![Message::user("persist me")]);
        assert!(storage.stats().unwrap().db_size.is_some());
    }
}
