//! Command-line front end for the Al Nakhwa session and locale crates.
//!
//! Every invocation restores the saved identity, runs one command and
//! prints the result as JSON.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod runner;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use runner::Runner;

use an_config::Config;
use an_i18n::{Locale, LocaleStore, LoggingAdapter};
use an_session::SessionContainer;

use std::sync::Arc;

use log::info;

/// Loads configuration, starts logging and restores the session.
pub fn bootstrap(urdu: bool) -> CliResult<Runner> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting al-nakhwa v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let session = SessionContainer::from_config(&config)?;

    let mut locale = LocaleStore::new(Arc::new(LoggingAdapter));
    if urdu {
        locale.set_locale(Locale::Urdu);
    }

    Ok(Runner::new(session, locale))
}

/// Renders a command result for stdout.
pub fn render(value: &serde_json::Value, pretty: bool) -> CliResult<String> {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    Ok(output?)
}
