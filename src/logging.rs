//! Diagnostic logging setup.
//!
//! Library code logs through `tracing`. The binary installs a stderr
//! subscriber whose level comes from `RUST_LOG` when set, otherwise from the
//! `-v`/`-q` flags.

use tracing_subscriber::EnvFilter;

/// Filter directive for a verbosity level (negative means quieter).
pub fn level_for(verbosity: i8) -> &'static str {
    match verbosity {
        i8::MIN..=-1 => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(verbosity: i8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("msgcloud={}", level_for(verbosity))));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
