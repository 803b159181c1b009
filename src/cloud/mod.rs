//! Word cloud rendering from free text.
//!
//! The pipeline is normalize -> count -> lay out -> draw:
//!
//! - [`normalize`] - Lowercasing, link and stopword removal
//! - [`stopwords`] - Stopword lists (bundled English or JSON files)
//! - [`frequency`] - Word counting
//! - [`layout`] - Spiral word placement
//! - [`svg`] - SVG output

pub mod error;
pub mod frequency;
pub mod layout;
pub mod normalize;
pub mod stopwords;
pub mod svg;

pub use error::CloudError;
pub use frequency::{FrequencyOptions, WordCount, WordCounter};
pub use layout::{
    layout, CellMetrics, CloudLayout, GlyphMetrics, LayoutOptions, MonospaceMetrics, PlacedWord,
    Rect,
};
pub use normalize::TextNormalizer;
pub use stopwords::StopwordSet;
pub use svg::render_svg;

/// Turns raw text into ranked word frequencies.
///
/// Holds the compiled normalizer and tokenizer so one instance can process
/// any number of inputs.
#[derive(Debug, Clone)]
pub struct WordCloud {
    normalizer: TextNormalizer,
    counter: WordCounter,
}

impl WordCloud {
    pub fn new(stopwords: &StopwordSet, options: FrequencyOptions) -> Result<Self, CloudError> {
        Ok(Self {
            normalizer: TextNormalizer::new(stopwords)?,
            counter: WordCounter::new(options)?,
        })
    }

    /// Normalized form of `text`.
    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    /// Ranked word counts for `text`. Fails with [`CloudError::Empty`] when
    /// nothing is left after normalization.
    pub fn frequencies(&self, text: &str) -> Result<Vec<WordCount>, CloudError> {
        let normalized = self.normalize(text);
        let words = self.counter.count(&normalized);
        if words.is_empty() {
            return Err(CloudError::Empty);
        }
        tracing::debug!(
            distinct = words.len(),
            top = %words[0].word,
            "counted words"
        );
        Ok(words)
    }

    /// Lay out `text` on a canvas measured with `metrics`.
    pub fn layout(
        &self,
        text: &str,
        metrics: &dyn GlyphMetrics,
        options: &LayoutOptions,
    ) -> Result<CloudLayout, CloudError> {
        let words = self.frequencies(text)?;
        place(&words, metrics, options)
    }
}

/// Lay out ranked words, failing with [`CloudError::NoRoom`] when not a
/// single word fits on the canvas.
pub fn place(
    words: &[WordCount],
    metrics: &dyn GlyphMetrics,
    options: &LayoutOptions,
) -> Result<CloudLayout, CloudError> {
    let placed = layout(words, metrics, options);
    if placed.is_empty() && !words.is_empty() {
        return Err(CloudError::NoRoom {
            words: words.len(),
            width: options.width,
            height: options.height,
        });
    }
    Ok(placed)
}
