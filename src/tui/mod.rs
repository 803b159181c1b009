//! Terminal UI for msgcloud
//!
//! Theme helpers shared by CLI output, and the interactive cloud view
//! behind `msgcloud render --show` (ratatui/crossterm).

pub mod cloud_view;
pub mod theme;

pub use cloud_view::CloudView;
pub use theme::{stderr_theme, stdout_theme, Theme};
