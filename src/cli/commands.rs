//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

use crate::cli::output::{
    OutputFormat, format_drills, format_history, format_reply, format_segments, format_status,
    format_summary, format_topic,
};
use crate::cli::parser::{Cli, Commands};
use crate::core::{Message, Role, Topic, WELCOME_MESSAGE};
use crate::error::{CommandError, Result, StorageError};
use crate::extract::{extract_drills, extract_segments, summarize};
use crate::io::{read_file, read_stdin};
use crate::reply::{GeminiClient, ReplyGenerator, reply_or_fallback};
use crate::storage::{SqliteStorage, Storage};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);
    let db_path = cli.get_db_path();

    match &cli.command {
        Commands::Init { force } => cmd_init(&db_path, *force, format),
        Commands::Status => cmd_status(&db_path, format),
        Commands::Reset { yes } => cmd_reset(&db_path, *yes, format),
        Commands::Topic { name } => cmd_topic(&db_path, name.as_deref(), format),
        Commands::Chat { prompt } => {
            let prompt = text_or_stdin(prompt.as_deref(), "PROMPT")?;
            let generator = GeminiClient::new(cli.gemini_config())?;
            cmd_chat(&db_path, &generator, &prompt, format)
        }
        Commands::Add { role, content } => cmd_add(&db_path, role, content.as_deref(), format),
        Commands::History { limit } => cmd_history(&db_path, *limit, format),
        Commands::Summary => cmd_summary(&db_path, format),
        Commands::Parse { text, file } => {
            let text = read_input(text.as_deref(), file.as_deref())?;
            Ok(format_drills(&extract_drills(&text), format))
        }
        Commands::Segments { text, file } => {
            let text = read_input(text.as_deref(), file.as_deref())?;
            Ok(format_segments(&extract_segments(&text), format))
        }
    }
}

/// Opens storage and ensures it's initialized.
fn open_storage(db_path: &Path) -> Result<SqliteStorage> {
    if !db_path.exists() {
        return Err(StorageError::NotInitialized.into());
    }

    let storage = SqliteStorage::open(db_path)?;
    if !storage.is_initialized()? {
        return Err(StorageError::NotInitialized.into());
    }

    Ok(storage)
}

/// Returns the given text, or all of stdin when absent.
///
/// Blank input is reported as a missing `arg_name`.
fn text_or_stdin(text: Option<&str>, arg_name: &str) -> Result<String> {
    let text = match text {
        Some(t) => t.to_string(),
        None => read_stdin()?,
    };
    if text.trim().is_empty() {
        return Err(CommandError::MissingArgument(arg_name.to_string()).into());
    }
    Ok(text)
}

/// Reads raw reply text from an argument, a file or stdin.
fn read_input(text: Option<&str>, file: Option<&Path>) -> Result<String> {
    match (text, file) {
        (Some(t), _) => Ok(t.to_string()),
        (None, Some(path)) => read_file(path),
        (None, None) => read_stdin(),
    }
}

// ==================== Command Implementations ====================

fn cmd_init(db_path: &Path, force: bool, format: OutputFormat) -> Result<String> {
    if db_path.exists() && !force {
        return Err(CommandError::ExecutionFailed(
            "Database already exists. Use --force to reinitialize.".to_string(),
        )
        .into());
    }

    if force && db_path.exists() {
        std::fs::remove_file(db_path).map_err(|e| {
            CommandError::ExecutionFailed(format!("Failed to remove existing database: {e}"))
        })?;
        for suffix in ["-wal", "-shm"] {
            let mut side = db_path.as_os_str().to_owned();
            side.push(suffix);
            let _ = std::fs::remove_file(PathBuf::from(side));
        }
    }

    let mut storage = SqliteStorage::open(db_path)?;
    storage.init()?;
    storage.append_message(&Message::welcome())?;
    info!(path = %db_path.display(), "initialized conversation");

    match format {
        OutputFormat::Text => Ok(format!(
            "Initialized courtside database at: {}\n\n{WELCOME_MESSAGE}\n",
            db_path.display()
        )),
        OutputFormat::Json => Ok(json(&serde_json::json!({
            "db_path": db_path.to_string_lossy(),
            "welcome": WELCOME_MESSAGE,
        }))),
    }
}

fn cmd_status(db_path: &Path, format: OutputFormat) -> Result<String> {
    let storage = open_storage(db_path)?;
    let stats = storage.stats()?;
    let topic = storage.topic()?;
    Ok(format_status(&stats, topic, format))
}

fn cmd_reset(db_path: &Path, yes: bool, format: OutputFormat) -> Result<String> {
    if !yes {
        return Err(CommandError::ExecutionFailed(
            "Use --yes to confirm reset. This will delete the conversation.".to_string(),
        )
        .into());
    }

    let mut storage = open_storage(db_path)?;
    storage.reset()?;
    storage.append_message(&Message::welcome())?;

    match format {
        OutputFormat::Text => Ok(format!("Conversation reset.\n\n{WELCOME_MESSAGE}\n")),
        OutputFormat::Json => Ok(json(&serde_json::json!({
            "reset": true,
            "welcome": WELCOME_MESSAGE,
        }))),
    }
}

fn cmd_topic(db_path: &Path, name: Option<&str>, format: OutputFormat) -> Result<String> {
    let mut storage = open_storage(db_path)?;
    match name {
        Some(name) => {
            let topic: Topic = name.parse()?;
            storage.set_topic(topic)?;
            debug!(topic = topic.key(), "topic selected");
            Ok(format_topic(topic, true, format))
        }
        None => Ok(format_topic(storage.topic()?, false, format)),
    }
}

fn cmd_chat(
    db_path: &Path,
    generator: &dyn ReplyGenerator,
    prompt: &str,
    format: OutputFormat,
) -> Result<String> {
    let mut storage = open_storage(db_path)?;
    let topic = storage.topic()?;
    let prompt = prompt.trim();

    storage.append_message(&Message::user(prompt))?;
    let reply = reply_or_fallback(generator, prompt, topic);
    let index = storage.append_message(&Message::assistant(reply.as_str()))?;

    Ok(format_reply(index, &reply, format))
}

fn cmd_add(
    db_path: &Path,
    role: &str,
    content: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    let role: Role = role.parse()?;
    let mut storage = open_storage(db_path)?;
    let content = text_or_stdin(content, "CONTENT")?;
    let index = storage.append_message(&Message::new(role, content.trim()))?;

    match format {
        OutputFormat::Text => Ok(format!("Added {role} message {index}\n")),
        OutputFormat::Json => Ok(json(&serde_json::json!({
            "index": index,
            "role": role,
        }))),
    }
}

fn cmd_history(db_path: &Path, limit: Option<usize>, format: OutputFormat) -> Result<String> {
    let storage = open_storage(db_path)?;
    let messages = storage.messages()?;
    let start = limit.map_or(0, |n| messages.len().saturating_sub(n));
    Ok(format_history(&messages[start..], start, format))
}

fn cmd_summary(db_path: &Path, format: OutputFormat) -> Result<String> {
    let storage = open_storage(db_path)?;
    let messages = storage.messages()?;
    Ok(format_summary(&summarize(&messages), format))
}

fn json(value: &serde_json::Value) -> String {
    let mut out = serde_json::to_string_pretty(value).unwrap_or_default();
    out.push('\n');
    out
}
