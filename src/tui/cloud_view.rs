//! Full-screen word cloud view
//!
//! Lays the cloud out on the terminal grid (one cell per column, one row per
//! word) and redraws on every resize. Quit with `q`, `Esc` or `Ctrl+C`.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};

use super::theme::Theme;
use crate::cloud::{layout, CellMetrics, CloudLayout, LayoutOptions, WordCount};

/// Key hints shown in the footer.
const FOOTER_KEYS: &[(&str, &str)] = &[("q", "quit"), ("esc", "quit")];

/// Renders ranked words as a terminal word cloud.
pub struct CloudView<'a> {
    title: String,
    words: &'a [WordCount],
    theme: Theme,
}

impl<'a> CloudView<'a> {
    pub fn new(title: impl Into<String>, words: &'a [WordCount], theme: Theme) -> Self {
        Self {
            title: title.into(),
            words,
            theme,
        }
    }

    /// Lay the words out on a grid the size of `area`.
    pub fn layout_for(&self, area: Rect) -> CloudLayout {
        let options = LayoutOptions {
            width: area.width as f32,
            height: area.height as f32,
            max_font_size: 1.0,
            min_font_size: 1.0,
            font_step: 1.0,
        };
        layout(self.words, &CellMetrics, &options)
    }

    pub fn render(&self, frame: &mut Frame) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let cloud = self.layout_for(body);
        self.render_header(frame, header, cloud.words.len());

        let top = cloud.top_count().max(1) as f32;
        let buffer = frame.buffer_mut();
        for word in &cloud.words {
            buffer.set_string(
                body.x + word.rect.x as u16,
                body.y + word.rect.y as u16,
                &word.word,
                self.theme.word_style(word.count as f32 / top),
            );
        }

        render_footer(frame, footer, FOOTER_KEYS, &self.theme);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, shown: usize) {
        let line = Line::from(vec![
            Span::styled(self.title.clone(), self.theme.accent_bold_style()),
            Span::styled(
                format!("  {} of {} words", shown, self.words.len()),
                self.theme.text_secondary_style(),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Show `words` full-screen until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn run(title: &str, words: &[WordCount]) -> Result<()> {
    let view = CloudView::new(title, words, Theme::default());
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &view);
    ratatui::restore();
    result
}

#[cfg(not(tarpaulin_include))]
fn event_loop(terminal: &mut DefaultTerminal, view: &CloudView<'_>) -> Result<()> {
    loop {
        terminal.draw(|frame| view.render(frame))?;
        // Resize events fall through to a redraw.
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && is_quit_key(&key) {
                return Ok(());
            }
        }
    }
}

/// Whether `key` closes the view.
pub fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Render a centered footer with keybinding hints.
///
/// Example: `&[("q", "quit"), ("esc", "quit")]` renders as `"q: quit | esc: quit"`.
fn render_footer(frame: &mut Frame, area: Rect, keys: &[(&str, &str)], theme: &Theme) {
    let footer = Paragraph::new(Line::from(build_footer_spans(keys, theme)))
        .style(Style::default().fg(theme.text_secondary))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", theme.text_secondary_style()));
        }
        spans.push(Span::styled(key.to_string(), theme.accent_style()));
        spans.push(Span::styled(
            format!(": {}", desc),
            theme.text_secondary_style(),
        ));
    }
    spans
}
