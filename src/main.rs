//! msgcloud - chat log extraction and word clouds

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use msgcloud::cli::{Cli, Commands, ConfigCommands};
use msgcloud::tui::stderr_theme;
use msgcloud::{logging, Config};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbosity());

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            let theme = stderr_theme();
            eprintln!("{}", theme.error_text(&format!("Error: {:#}", e)));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Parse(args) => {
            let config = Config::load()?;
            commands::parse::handle(&args, &config)
        }
        Commands::Render(args) => {
            let config = Config::load()?;
            commands::render::handle(&args, &config)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Config(ConfigCommands::Show) => {
            commands::config::handle_show()?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Config(ConfigCommands::Path) => {
            commands::config::handle_path()?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Completions { shell } => {
            commands::handle_completions(shell);
            Ok(ExitCode::SUCCESS)
        }
    }
}
