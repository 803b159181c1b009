//! Parse command handler

use std::process::ExitCode;

use anyhow::Result;
use humansize::{format_size, DECIMAL};

use msgcloud::cli::ParseArgs;
use msgcloud::extractor::{extract_file, ExtractQuery, ParseOptions};
use msgcloud::files::filename::messages_filename;
use msgcloud::files::write_messages;
use msgcloud::tui::{stderr_theme, stdout_theme};
use msgcloud::Config;

/// Extract a person's messages and write them to the output directory.
///
/// An empty result is reported and turned into a failing exit code; it is
/// not an error of the extractor itself.
pub fn handle(args: &ParseArgs, config: &Config) -> Result<ExitCode> {
    let input = args.input.as_ref().unwrap_or(&config.parse.input);
    let output_dir = args.output.as_ref().unwrap_or(&config.parse.output_dir);
    let owner = args.owner.as_deref().or(config.parse.owner.as_deref());
    let options = ParseOptions {
        strict: args.strict || config.parse.strict,
    };

    let mut query = ExtractQuery::new(&args.person);
    if let Some(owner) = owner {
        query = query.with_owner(owner);
    }

    let extraction = extract_file(input, &query, &options)?;
    if extraction.is_empty() {
        eprintln!("{}", stderr_theme().error_text("No messages found. Exiting."));
        return Ok(ExitCode::FAILURE);
    }

    let path = output_dir.join(messages_filename(&args.person, owner)?);
    let written = write_messages(&path, extraction.non_empty())?;

    let theme = stdout_theme();
    println!(
        "{}{}",
        theme.success_text(&format!(
            "Wrote {} messages ({}) to ",
            written.items,
            format_size(written.bytes, DECIMAL)
        )),
        theme.accent_text(&written.path.display().to_string())
    );
    if extraction.stats.group_threads > 0 {
        println!(
            "{}",
            theme.secondary_text(&format!(
                "Skipped {} group conversation(s)",
                extraction.stats.group_threads
            ))
        );
    }

    Ok(ExitCode::SUCCESS)
}
