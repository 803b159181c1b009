//! Word placement.
//!
//! Words are placed most frequent first along an Archimedean spiral that
//! starts at the canvas centre. A word takes the first spiral position where
//! its box stays on the canvas and clears every word already placed. When no
//! position fits, the word is shrunk and retried until it reaches the
//! minimum font size, after which it is dropped.

use std::f32::consts::PI;

use unicode_width::UnicodeWidthStr;

use super::frequency::WordCount;

/// Measures how much room a word takes at a given font size.
pub trait GlyphMetrics {
    /// Width and height of `word` at `font_size`, in canvas units.
    fn measure(&self, word: &str, font_size: f32) -> (f32, f32);

    /// Whether a smaller font size yields a smaller box.
    fn scales_with_size(&self) -> bool {
        true
    }
}

/// Metrics for a monospace font: every column advances by a fixed fraction
/// of the font size.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMetrics {
    /// Horizontal advance per column, as a fraction of the font size.
    pub advance: f32,
    /// Line box height, as a fraction of the font size.
    pub line_height: f32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self {
            advance: 0.6,
            line_height: 1.0,
        }
    }
}

impl GlyphMetrics for MonospaceMetrics {
    fn measure(&self, word: &str, font_size: f32) -> (f32, f32) {
        (
            word.width() as f32 * self.advance * font_size,
            self.line_height * font_size,
        )
    }
}

/// Metrics for terminal cells: one row high, one cell per column.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellMetrics;

impl GlyphMetrics for CellMetrics {
    fn measure(&self, word: &str, _font_size: f32) -> (f32, f32) {
        (word.width() as f32, 1.0)
    }

    fn scales_with_size(&self) -> bool {
        false
    }
}

/// Canvas and font size bounds for a layout.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    pub width: f32,
    pub height: f32,
    pub max_font_size: f32,
    pub min_font_size: f32,
    /// How much to shrink a word between placement attempts.
    pub font_step: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 200.0,
            max_font_size: 40.0,
            min_font_size: 4.0,
            font_step: 2.0,
        }
    }
}

impl LayoutOptions {
    /// Starting font size for a word seen `count` times when the most
    /// frequent word was seen `top` times.
    pub fn font_size_for(&self, count: usize, top: usize) -> f32 {
        let ratio = if top == 0 {
            1.0
        } else {
            count as f32 / top as f32
        };
        (self.max_font_size * (0.5 + 0.5 * ratio)).max(self.min_font_size)
    }
}

/// Axis-aligned box, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Whether the boxes share any area. Touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// A word with its final size and position.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub word: String,
    pub count: usize,
    pub font_size: f32,
    pub rect: Rect,
}

/// The result of laying out a word list.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudLayout {
    pub width: f32,
    pub height: f32,
    pub words: Vec<PlacedWord>,
}

impl CloudLayout {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Highest count among placed words.
    pub fn top_count(&self) -> usize {
        self.words.iter().map(|w| w.count).max().unwrap_or(0)
    }
}

/// Lay out `words`, which should already be sorted most frequent first.
pub fn layout(words: &[WordCount], metrics: &dyn GlyphMetrics, options: &LayoutOptions) -> CloudLayout {
    let top = words.iter().map(|w| w.count).max().unwrap_or(0);
    let mut placed: Vec<PlacedWord> = Vec::with_capacity(words.len());

    for entry in words {
        let mut font_size = options.font_size_for(entry.count, top);

        loop {
            let (width, height) = metrics.measure(&entry.word, font_size);
            if let Some(rect) = find_position(width, height, &placed, options) {
                placed.push(PlacedWord {
                    word: entry.word.clone(),
                    count: entry.count,
                    font_size,
                    rect,
                });
                break;
            }

            if !metrics.scales_with_size() || font_size <= options.min_font_size {
                tracing::trace!(word = %entry.word, "no room left, dropping word");
                break;
            }
            font_size = (font_size - options.font_step).max(options.min_font_size);
        }
    }

    tracing::debug!(
        requested = words.len(),
        placed = placed.len(),
        "laid out word cloud"
    );

    CloudLayout {
        width: options.width,
        height: options.height,
        words: placed,
    }
}

fn find_position(
    width: f32,
    height: f32,
    placed: &[PlacedWord],
    options: &LayoutOptions,
) -> Option<Rect> {
    if width <= 0.0 || width > options.width || height > options.height {
        return None;
    }

    let center_x = options.width / 2.0;
    let center_y = options.height / 2.0;

    Spiral::new(options.width, options.height)
        .map(|(dx, dy)| Rect {
            x: (center_x + dx - width / 2.0).round(),
            y: (center_y + dy - height / 2.0).round(),
            width,
            height,
        })
        .find(|rect| {
            rect.x >= 0.0
                && rect.y >= 0.0
                && rect.right() <= options.width
                && rect.bottom() <= options.height
                && !placed.iter().any(|p| p.rect.intersects(rect))
        })
}

/// Offsets from the centre along an Archimedean spiral, squashed to the
/// canvas aspect ratio, spaced roughly `step` apart along the curve.
struct Spiral {
    step: f32,
    turn_gap: f32,
    aspect: f32,
    max_radius: f32,
    theta: f32,
    started: bool,
}

impl Spiral {
    fn new(width: f32, height: f32) -> Self {
        let step = (width.min(height) / 25.0).max(1.0);
        Self {
            step,
            turn_gap: step / (2.0 * PI),
            aspect: if width > 0.0 { height / width } else { 1.0 },
            max_radius: width * std::f32::consts::SQRT_2 / 2.0,
            theta: 0.0,
            started: false,
        }
    }
}

impl Iterator for Spiral {
    type Item = (f32, f32);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some((0.0, 0.0));
        }

        let radius = self.turn_gap * self.theta;
        self.theta += self.step / radius.max(self.step);
        let radius = self.turn_gap * self.theta;
        if radius > self.max_radius {
            return None;
        }

        Some((
            radius * self.theta.cos(),
            radius * self.theta.sin() * self.aspect,
        ))
    }
}
