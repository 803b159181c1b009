//! Text normalization ahead of frequency counting.
//!
//! Applies, in order:
//! 1. Lowercasing
//! 2. Link removal (`http://` or `https://` through the end of the line,
//!    including the line break that follows)
//! 3. Whole-word stopword removal

use regex::Regex;

use super::error::CloudError;
use super::stopwords::StopwordSet;

/// Matches a link and everything after it on the same line.
const URL_PATTERN: &str = r"https?://.*[\r\n]*";

/// Compiled normalizer for one stopword set.
///
/// Build once per stopword set and reuse; compiling the stopword
/// alternation is the expensive part.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    url: Regex,
    stopwords: Option<Regex>,
}

impl TextNormalizer {
    pub fn new(stopwords: &StopwordSet) -> Result<Self, CloudError> {
        let url = Regex::new(URL_PATTERN)?;
        let stopwords = if stopwords.is_empty() {
            None
        } else {
            Some(Regex::new(&stopword_pattern(stopwords))?)
        };

        Ok(Self { url, stopwords })
    }

    /// Normalize `text` for frequency analysis.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let without_links = self.url.replace_all(&lowered, "");

        match &self.stopwords {
            Some(pattern) => pattern.replace_all(&without_links, "").into_owned(),
            None => without_links.into_owned(),
        }
    }
}

/// Build `\b(?:w1|w2|...)\b` with longer words first, so `i'm` wins over `i`.
fn stopword_pattern(stopwords: &StopwordSet) -> String {
    let mut words: Vec<&str> = stopwords.words().iter().map(String::as_str).collect();
    words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");

    format!(r"\b(?:{})\b", alternation)
}
