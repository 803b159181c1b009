//! Config subcommands handler

use anyhow::Result;

use msgcloud::tui::stdout_theme;
use msgcloud::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = stdout_theme();
    println!("{}", theme.primary_text(&toml_str));
    Ok(())
}

/// Print where the config file is read from.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    let path = Config::config_path()?;
    let theme = stdout_theme();
    let status = if path.exists() { "" } else { " (not found, using defaults)" };
    println!(
        "{}{}",
        theme.accent_text(&path.display().to_string()),
        theme.secondary_text(status)
    );
    Ok(())
}
