//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::config::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, GeminiConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Courtside: a basketball training chat that turns coaching replies into
/// drill summaries.
#[derive(Parser, Debug)]
#[command(name = "courtside")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the conversation database file.
    ///
    /// Defaults to `.courtside/courtside.db` in the current directory.
    #[arg(short, long, env = "COURTSIDE_DB_PATH", global = true)]
    pub db_path: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// Gemini API key.
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Gemini model name.
    #[arg(long, env = "COURTSIDE_MODEL", default_value = DEFAULT_MODEL, global = true)]
    pub model: String,

    /// Gemini REST endpoint.
    #[arg(long, env = "COURTSIDE_GEMINI_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Request timeout in seconds.
    #[arg(long, env = "COURTSIDE_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout: u64,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the conversation database.
    ///
    /// Creates the database and seeds the welcome message.
    Init {
        /// Force re-initialization (destroys existing data).
        #[arg(short, long)]
        force: bool,
    },

    /// Show conversation status.
    Status,

    /// Start a new conversation (delete all messages).
    Reset {
        /// Skip confirmation prompt.
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show or select the training topic.
    Topic {
        /// Topic to select (dribbling, shooting, passing, diet, physique).
        name: Option<String>,
    },

    /// Ask the coach a question.
    ///
    /// Reads the prompt from stdin if not provided.
    Chat {
        /// The question.
        prompt: Option<String>,
    },

    /// Append a message without calling the model.
    ///
    /// Reads the content from stdin if not provided.
    Add {
        /// Message author (user, assistant).
        role: String,

        /// Message text.
        content: Option<String>,
    },

    /// List conversation messages.
    History {
        /// Show only the last N messages.
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Summarize the drills suggested so far.
    Summary,

    /// Extract drills from raw text.
    ///
    /// Reads from stdin if neither TEXT nor --file is given.
    Parse {
        /// Reply text.
        text: Option<String>,

        /// Read the text from a file.
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },

    /// Show the candidate drill segments of raw text.
    ///
    /// Reads from stdin if neither TEXT nor --file is given.
    Segments {
        /// Reply text.
        text: Option<String>,

        /// Read the text from a file.
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },
}

impl Cli {
    /// Returns the database path, using default if not specified.
    #[must_use]
    pub fn get_db_path(&self) -> PathBuf {
        self.db_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(crate::storage::DEFAULT_DB_PATH))
    }

    /// Collects the reply generator settings.
    #[must_use]
    pub fn gemini_config(&self) -> GeminiConfig {
        GeminiConfig::default()
            .api_key(self.api_key.clone())
            .model(self.model.clone())
            .base_url(&self.base_url)
            .timeout_secs(self.timeout)
    }
}
