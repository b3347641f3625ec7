//! # Courtside
//!
//! Basketball training chat with drill summaries.
//!
//! Courtside relays an athlete's questions to a hosted language model
//! acting as a coach, keeps the conversation in a local `SQLite` store, and
//! turns the coach's free-form replies into structured drill records.
//!
//! ## Features
//!
//! - **Drill extraction**: deterministic segment splitting and field parsing
//!   (name, sets, reps, time) over reply text
//! - **Summaries**: drills per assistant message, numbered as tips
//! - **Gemini replies**: topic-aware prompts with a warning fallback when the
//!   model is unreachable
//! - **`SQLite` Storage**: persistent conversation and topic selection
//!
//! ## Example
//!
//! ```
//! use courtside::extract::extract_drills;
//!
//! let drills = extract_drills("Try 3 sets of 20 left-hand dribbles with cones.");
//! assert_eq!(drills[0].sets.as_deref(), Some("3"));
//! assert_eq!(drills[0].reps.as_deref(), Some("20"));
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod extract;
pub mod io;
pub mod reply;
pub mod storage;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use core::{DrillRecord, Message, Role, TaggedDrill, Topic};

// Re-export extraction entry points
pub use extract::{
    DrillFieldParser, SegmentExtractor, SummaryAggregator, extract_drills, extract_segments,
    parse_drill, summarize,
};

// Re-export reply generation types
pub use config::GeminiConfig;
pub use reply::{GeminiClient, ReplyGenerator, StaticReplyGenerator, reply_or_fallback};

// Re-export storage types
pub use storage::{DEFAULT_DB_PATH, SqliteStorage, Storage};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
