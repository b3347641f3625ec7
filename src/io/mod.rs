//! I/O utilities for Courtside.
//!
//! Reads reply text from files or stdin and shortens text for display
//! without splitting grapheme clusters.

pub mod reader;
pub mod unicode;

pub use reader::{FileReader, read_file, read_stdin};
pub use unicode::{grapheme_count, preview, truncate_graphemes};
