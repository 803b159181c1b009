//! Configuration management for msgcloud.
//!
//! Settings live in `<config dir>/msgcloud/config.toml` (overridable with the
//! `MSGCLOUD_CONFIG` environment variable). Every field has a default, so a
//! missing file or a partial file is fine. Command-line flags override the
//! file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::cloud::{CloudError, FrequencyOptions, LayoutOptions, StopwordSet};

/// Environment variable pointing at an alternative config file.
pub const CONFIG_ENV: &str = "MSGCLOUD_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parse: ParseConfig,
    pub render: RenderConfig,
}

/// Settings for `msgcloud parse`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Chat export to read when `--input` is not given.
    pub input: PathBuf,
    /// Directory for extracted message files.
    pub output_dir: PathBuf,
    /// Export owner used when `--self` is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Reject exports the HTML parser had to repair.
    pub strict: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("raw/messages.htm"),
            output_dir: PathBuf::from("output"),
            owner: None,
            strict: false,
        }
    }
}

/// Settings for `msgcloud render`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Directory for rendered images.
    pub output_dir: PathBuf,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Font size of the most frequent word.
    pub max_font_size: u32,
    /// Smallest font size a word may shrink to.
    pub min_font_size: u32,
    /// Shrink step when a word does not fit.
    pub font_step: u32,
    /// Maximum number of words in a cloud.
    pub max_words: usize,
    /// Words shorter than this are ignored.
    pub min_word_length: usize,
    /// JSON stopword list replacing the bundled English list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopwords_path: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("renders"),
            width: 400,
            height: 200,
            max_font_size: 40,
            min_font_size: 4,
            font_step: 2,
            max_words: 200,
            min_word_length: 1,
            stopwords_path: None,
        }
    }
}

impl RenderConfig {
    /// Layout options, with an optional font size override from the command line.
    pub fn layout_options(&self, max_font_size: Option<u32>) -> LayoutOptions {
        let max_font_size = max_font_size.unwrap_or(self.max_font_size);
        LayoutOptions {
            width: self.width as f32,
            height: self.height as f32,
            max_font_size: max_font_size as f32,
            min_font_size: self.min_font_size.min(max_font_size) as f32,
            font_step: self.font_step as f32,
        }
    }

    pub fn frequency_options(&self, max_words: Option<usize>) -> FrequencyOptions {
        FrequencyOptions {
            max_words: max_words.unwrap_or(self.max_words),
            min_word_length: self.min_word_length,
        }
    }

    /// Stopwords from `path`, else the configured file, else the bundled list.
    pub fn stopwords(&self, path: Option<&Path>) -> Result<StopwordSet, CloudError> {
        match path.or(self.stopwords_path.as_deref()) {
            Some(path) => StopwordSet::load(path),
            None => StopwordSet::english(),
        }
    }
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("msgcloud").join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load and validate a config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Reject settings the renderer cannot work with.
    pub fn validate(&self) -> Result<()> {
        let render = &self.render;
        if render.width == 0 || render.height == 0 {
            bail!("render.width and render.height must be greater than 0");
        }
        if render.min_font_size == 0 {
            bail!("render.min_font_size must be greater than 0");
        }
        if render.max_font_size < render.min_font_size {
            bail!(
                "render.max_font_size ({}) must not be smaller than render.min_font_size ({})",
                render.max_font_size,
                render.min_font_size
            );
        }
        if render.font_step == 0 {
            bail!("render.font_step must be greater than 0");
        }
        Ok(())
    }
}
