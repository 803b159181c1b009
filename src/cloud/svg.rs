//! SVG output for word cloud layouts.

use std::fmt::Write as _;

use super::layout::CloudLayout;

/// Word colors, cycled in placement order.
const PALETTE: &[&str] = &[
    "#fde725", "#7ad151", "#22a884", "#2a788e", "#414487", "#440154", "#bddf26", "#35b779",
];

const BACKGROUND: &str = "#000000";

/// Baseline offset from the top of a word's box, as a fraction of the font size.
const BASELINE: f32 = 0.8;

/// Render a layout as a standalone SVG document.
///
/// Text is drawn in a monospace family so the placement estimates used by
/// [`MonospaceMetrics`](super::layout::MonospaceMetrics) hold.
pub fn render_svg(layout: &CloudLayout) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = layout.width,
        h = layout.height,
    );
    let _ = writeln!(
        out,
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        BACKGROUND
    );

    for (i, word) in layout.words.iter().enumerate() {
        let _ = writeln!(
            out,
            r#"  <text x="{x}" y="{y:.1}" font-family="monospace" font-size="{size:.1}" fill="{fill}"><title>{count}</title>{text}</text>"#,
            x = word.rect.x,
            y = word.rect.y + word.font_size * BASELINE,
            size = word.font_size,
            fill = PALETTE[i % PALETTE.len()],
            count = word.count,
            text = escape_xml(&word.word),
        );
    }

    out.push_str("</svg>\n");
    out
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
