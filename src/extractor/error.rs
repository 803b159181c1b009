//! Chat log extraction errors.

use std::path::PathBuf;

/// Errors that can occur while reading a chat export.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Chat log is not valid UTF-8 (byte offset {offset})")]
    InvalidUtf8 { offset: usize },

    #[error("Malformed chat log: {message}")]
    Malformed { message: String },
}
