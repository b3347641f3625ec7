//! CLI layer for Courtside.
//!
//! Provides the command-line interface using clap, with commands for
//! chatting with the coach, managing the stored conversation and running
//! drill extraction over raw text.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
