//! Core domain models for Courtside.
//!
//! Conversation messages, training topics and extracted drill records.
//! These are pure domain models with no I/O dependencies.

pub mod drill;
pub mod message;
pub mod topic;

pub use drill::{DEFAULT_DRILL_NAME, DrillRecord, TaggedDrill};
pub use message::{Message, Role, WELCOME_MESSAGE};
pub use topic::Topic;
