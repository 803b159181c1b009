//! Subcommand handlers

pub mod config;
pub mod parse;
pub mod render;

use std::io;

use clap::CommandFactory;
use clap_complete::Shell;

use msgcloud::cli::Cli;

/// Print completions for `shell` to stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle_completions(shell: Shell) {
    clap_complete::generate(shell, &mut Cli::command(), "msgcloud", &mut io::stdout());
}
