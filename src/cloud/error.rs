//! Word cloud errors.

use std::path::PathBuf;

/// Errors that can occur while preparing or rendering a word cloud.
#[derive(Debug, thiserror::Error)]
pub enum CloudError {
    #[error("Failed to read stopword list {path}: {source}")]
    StopwordsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid stopword list (expected a JSON array of strings): {0}")]
    StopwordsFormat(#[from] serde_json::Error),

    #[error("Failed to compile pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Nothing to render: no words left after removing stopwords and links")]
    Empty,

    #[error("None of the {words} words fit on a {width}x{height} canvas")]
    NoRoom { words: usize, width: f32, height: f32 },
}
