//! Stopword lists.

use std::fs;
use std::path::Path;

use super::error::CloudError;

/// English stopwords shipped with the binary.
const ENGLISH_JSON: &str = include_str!("../../stopwords/en.json");

/// A deduplicated, lowercased list of words to drop from cloud text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: Vec<String>,
}

impl StopwordSet {
    /// Build a set from arbitrary words. Entries are trimmed and lowercased;
    /// blanks and duplicates are dropped. Order of first appearance is kept.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set: Vec<String> = Vec::new();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() && !set.contains(&word) {
                set.push(word);
            }
        }
        Self { words: set }
    }

    /// The bundled English list.
    pub fn english() -> Result<Self, CloudError> {
        Self::from_json(ENGLISH_JSON)
    }

    /// Parse a JSON array of strings.
    pub fn from_json(json: &str) -> Result<Self, CloudError> {
        let words: Vec<String> = serde_json::from_str(json)?;
        Ok(Self::new(words))
    }

    /// Load a JSON stopword list from disk.
    pub fn load(path: &Path) -> Result<Self, CloudError> {
        let json = fs::read_to_string(path).map_err(|source| CloudError::StopwordsRead {
            path: path.to_path_buf(),
            source,
        })?;
        let set = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), words = set.len(), "loaded stopwords");
        Ok(set)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}
