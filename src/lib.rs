//! msgcloud - per-person message extraction from chat-log HTML exports, and
//! word clouds from the extracted text.
//!
//! - [`extractor`] - Reads a chat export and selects one person's messages
//! - [`cloud`] - Normalizes text, counts words and lays out word clouds
//! - [`files`] - Output naming and writing
//! - [`config`] - TOML configuration
//! - [`cli`] - Command-line definition
//! - [`tui`] - Terminal output helpers and the interactive cloud view

pub mod cli;
pub mod cloud;
pub mod config;
pub mod extractor;
pub mod files;
pub mod logging;
pub mod tui;

pub use config::Config;
pub use extractor::{extract, ChatNode, ExtractQuery, Extraction};
