//! Render command handler

use std::fs;

use anyhow::{bail, Context, Result};
use humansize::{format_size, DECIMAL};

use msgcloud::cli::RenderArgs;
use msgcloud::cloud::{place, render_svg, MonospaceMetrics, WordCloud};
use msgcloud::files::filename::cloud_filename;
use msgcloud::files::write_document;
use msgcloud::tui::{cloud_view, stdout_theme};
use msgcloud::Config;

/// Build a word cloud from a text file and either save it or show it.
pub fn handle(args: &RenderArgs, config: &Config) -> Result<()> {
    let render = &config.render;

    let stopwords = render.stopwords(args.stopwords.as_deref())?;
    let cloud = WordCloud::new(&stopwords, render.frequency_options(args.max_words))?;

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let words = cloud.frequencies(&text)?;

    if args.show {
        if !atty::is(atty::Stream::Stdout) {
            bail!("--show needs an interactive terminal");
        }
        let title = args
            .input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        return cloud_view::run(&title, &words);
    }

    let cloud_layout = place(
        &words,
        &MonospaceMetrics::default(),
        &render.layout_options(args.font_size),
    )?;
    let output_dir = args.output.as_ref().unwrap_or(&render.output_dir);
    let path = output_dir.join(cloud_filename(&args.input));
    let written = write_document(&path, &render_svg(&cloud_layout))?;

    let theme = stdout_theme();
    println!(
        "{}{}",
        theme.success_text(&format!(
            "Rendered {} of {} words ({}) to ",
            cloud_layout.words.len(),
            words.len(),
            format_size(written.bytes, DECIMAL)
        )),
        theme.accent_text(&written.path.display().to_string())
    );

    Ok(())
}
