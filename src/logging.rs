use anyhow::{Context, Result};
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

/// Map `-v` count and `-q` to a level: warn by default, off when quiet.
pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber writing compact lines to stderr.
pub fn setup_logging(verbosity: u8, quiet: bool) -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(crate::output::should_use_colors())
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(level_filter(verbosity, quiet))
        .with(stderr_layer)
        .try_init()
        .context("Failed to set up logging")?;

    Ok(())
}
