//! Log output setup.
//!
//! The interface owns the terminal, so log messages only go to a file. Without a log file no logger
//! is installed and every log macro is a no-op.

use std::fs::File;

use color_eyre::eyre::Result;
use env_logger::{Builder, Env, Target};
use log::LevelFilter;

use crate::config::Settings;

/// Installs the global logger described by `settings`.
///
/// The level is read from `RUST_LOG`, defaulting to `info`, and forced to `debug` when the debug
/// flag is set.
///
/// # Errors
///
/// This function returns an error when the log file cannot be created or a logger is already
/// installed.
pub fn install(settings: &Settings) -> Result<()> {
    let Some(path) = settings.log_file.as_ref() else {
        return Ok(());
    };

    let file = File::create(path)?;
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    if settings.debug {
        let _ = builder.filter_level(LevelFilter::Debug);
    }
    builder.target(Target::Pipe(Box::new(file))).try_init()?;

    Ok(())
}
