//! Database schema definitions.
//!
//! Contains the SQL schema for the Courtside conversation store.

/// Current schema version.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// SQL schema for initial database setup.
pub const SCHEMA_SQL: &str = r"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_info (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);

-- Conversation messages, in insertion order
CREATE TABLE IF NOT EXISTS messages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    role TEXT NOT NULL CHECK (role IN ('user', 'assistant')),
    content TEXT NOT NULL,
    created_at INTEGER NOT NULL
);

-- Key-value settings (selected topic)
CREATE TABLE IF NOT EXISTS settings (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at INTEGER NOT NULL
);
";

/// SQL to check if schema is initialized.
pub const CHECK_SCHEMA_SQL: &str = r"
SELECT COUNT(*) FROM sqlite_master
WHERE type='table' AND name='schema_info';
";

/// SQL to get schema version.
pub const GET_VERSION_SQL: &str = r"
SELECT value FROM schema_info WHERE key = 'version';
";

/// SQL to set schema version.
pub const SET_VERSION_SQL: &str = r"
INSERT OR REPLACE INTO schema_info (key, value) VALUES ('version', ?);
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_sql_tables() {
        assert!(SCHEMA_SQL.contains("CREATE TABLE IF NOT EXISTS messages"));
        assert!(SCHEMA_SQL.contains("CREATE TABLE IF NOT EXISTS settings"));
    }

    #[test]
    fn test_schema_sql_applies() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA_SQL).unwrap();
        conn.execute(SET_VERSION_SQL, [CURRENT_SCHEMA_VERSION.to_string()])
            .unwrap();
        let version: String = conn.query_row(GET_VERSION_SQL, [], |r| r.get(0)).unwrap();
        assert_eq!(version, "1");
    }
}
