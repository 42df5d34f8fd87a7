use crate::config::Config;
use crate::error::{QuizError, Result};
use std::fs::OpenOptions;
use std::sync::{Mutex, OnceLock};
use tracing_subscriber::EnvFilter;

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Route `tracing` output to the configured log file. Calling it again once a
/// subscriber is installed does nothing.
pub fn init(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level).map_err(|err| {
        QuizError::Config(format!("invalid log level '{}': {}", config.log_level, err))
    })?;

    if INSTALLED.get().is_some() {
        return Ok(());
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    // Another subscriber may already be global (tests); that is not an error.
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok()
    {
        tracing::info!(path = %config.log_file.display(), "logging initialized");
    }
    let _ = INSTALLED.set(());
    Ok(())
}
