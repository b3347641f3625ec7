//! Error types for Courtside operations.
//!
//! The drill extraction core is total and never fails; everything that can
//! fail (the conversation store, reply generation, file input and CLI
//! commands) reports through the hierarchy defined here.

use thiserror::Error;

/// Result type alias for Courtside operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Conversation store errors.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Reply generation errors (the hosted language model).
    #[error("reply error: {0}")]
    Reply(#[from] ReplyError),

    /// I/O errors (file and stdin input).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// Conversation store errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database connection or query error.
    #[error("database error: {0}")]
    Database(String),

    /// Storage not initialized (init command not run).
    #[error("courtside not initialized. Run: courtside init")]
    NotInitialized,

    /// A stored row could not be mapped back to a domain value.
    #[error("corrupt record: {0}")]
    Corrupt(String),
}

/// Errors raised while asking the language model for a reply.
///
/// These never reach the end user as failures: the chat flow turns them
/// into a warning message in place of the reply.
#[derive(Error, Debug)]
pub enum ReplyError {
    /// No API key was configured.
    #[error("no API key configured (set GOOGLE_API_KEY or pass --api-key)")]
    MissingApiKey,

    /// The service could not be reached.
    #[error("cannot reach {0}")]
    Connection(String),

    /// The request did not complete in time.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// Any other transport-level failure.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// The service answered with a non-success status.
    #[error("API returned status {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned.
        body: String,
    },

    /// The response body could not be decoded.
    #[error("failed to parse response: {0}")]
    ResponseParsing(String),

    /// The response carried no text.
    #[error("response contained no text")]
    EmptyResponse,
}

/// I/O-specific errors for input files.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Generic I/O error wrapper.
    #[error("I/O error: {0}")]
    Generic(String),
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Command execution failed.
    #[error("command failed: {0}")]
    ExecutionFailed(String),

    /// Missing required argument.
    #[error("missing required argument: {0}")]
    MissingArgument(String),

    /// Unknown training topic.
    #[error("unknown topic: {0} (expected one of: dribbling, shooting, passing, diet, physique)")]
    UnknownTopic(String),

    /// Unknown message role.
    #[error("unknown role: {0} (expected user or assistant)")]
    UnknownRole(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(IoError::Generic(err.to_string()))
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(StorageError::Database(err.to_string()))
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<reqwest::Error> for ReplyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::ResponseParsing(err.to_string())
        } else {
            Self::HttpClient(err.to_string())
        }
    }
}
