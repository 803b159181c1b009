//! Per-person message extraction from chat-log HTML exports.
//!
//! An export is a flat sequence of thread blocks, each followed by speaker and
//! message blocks:
//!
//! ```text
//! Thread "Alice, Bob"
//!   Speaker "Alice"
//!   Message "hi"
//!   Speaker "Bob"
//!   Message "hey"
//! Thread "Alice, Carol"
//!   ...
//! ```
//!
//! # Module Structure
//!
//! - [`node`] - Typed nodes kept from the document
//! - [`document`] - HTML parsing and flattening into nodes
//! - [`state`] - Message selection fold
//! - [`error`] - Extraction errors

pub mod document;
pub mod error;
pub mod node;
pub mod state;

use std::path::Path;

pub use document::{parse_chat_log, read_chat_log, ParseOptions};
pub use error::ExtractError;
pub use node::ChatNode;
pub use state::{extract, ExtractQuery, Extraction, ExtractionState, ExtractionStats};

/// Read the export at `path` and select the messages matching `query`.
pub fn extract_file(
    path: &Path,
    query: &ExtractQuery,
    options: &ParseOptions,
) -> Result<Extraction, ExtractError> {
    let nodes = read_chat_log(path, options)?;
    let extraction = extract(&nodes, query);

    tracing::info!(
        target_user = %query.target,
        owner = query.owner.as_deref().unwrap_or("-"),
        threads = extraction.stats.threads,
        group_threads = extraction.stats.group_threads,
        selected = extraction.messages.len(),
        "extracted messages"
    );

    Ok(extraction)
}
