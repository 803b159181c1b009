//! Word frequency counting.

use std::collections::HashMap;

use regex::Regex;

use super::error::CloudError;

/// A word token: letters/digits, optionally joined by inner apostrophes.
const WORD_PATTERN: &str = r"\w+(?:['’]\w+)*";

/// Word and its number of occurrences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Options for frequency counting.
#[derive(Debug, Clone)]
pub struct FrequencyOptions {
    /// Keep at most this many words (0 means no limit).
    pub max_words: usize,
    /// Drop words shorter than this many characters.
    pub min_word_length: usize,
}

impl Default for FrequencyOptions {
    fn default() -> Self {
        Self {
            max_words: 200,
            min_word_length: 1,
        }
    }
}

/// Counts word occurrences in normalized text.
#[derive(Debug, Clone)]
pub struct WordCounter {
    pattern: Regex,
    options: FrequencyOptions,
}

impl WordCounter {
    pub fn new(options: FrequencyOptions) -> Result<Self, CloudError> {
        Ok(Self {
            pattern: Regex::new(WORD_PATTERN)?,
            options,
        })
    }

    /// Count words in `text`, most frequent first, ties in alphabetical order.
    pub fn count(&self, text: &str) -> Vec<WordCount> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for m in self.pattern.find_iter(text) {
            let word = m.as_str();
            if word.chars().count() >= self.options.min_word_length {
                *counts.entry(word).or_insert(0) += 1;
            }
        }

        let mut words: Vec<WordCount> = counts
            .into_iter()
            .map(|(word, count)| WordCount {
                word: word.to_string(),
                count,
            })
            .collect();
        words.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));

        if self.options.max_words > 0 {
            words.truncate(self.options.max_words);
        }
        words
    }
}
