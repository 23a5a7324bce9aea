//! Logging System
//!
//! Structured logging using the `tracing` crate. Events are written to stderr
//! so stdout stays reserved for the repository list.

use crate::error::ConfigError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Initialize the logging system.
///
/// Filter precedence (highest to lowest): the `AZURE_REPOS_LOG` environment
/// variable, `--log-level`, `--verbose` (info), quiet default (warn).
pub fn init(verbose: bool, level: Option<&str>) -> Result<(), ConfigError> {
    let filter = build_env_filter(verbose, level)?;
    Registry::default()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
    Ok(())
}

fn build_env_filter(verbose: bool, level: Option<&str>) -> Result<EnvFilter, ConfigError> {
    if let Ok(filter) = EnvFilter::try_from_env("AZURE_REPOS_LOG") {
        return Ok(filter);
    }
    Ok(EnvFilter::new(effective_level(verbose, level)?))
}

/// Resolve the effective level, validating an explicit flag value.
fn effective_level(verbose: bool, level: Option<&str>) -> Result<&str, ConfigError> {
    match level {
        Some(level) => match level {
            "trace" | "debug" | "info" | "warn" | "error" | "off" => Ok(level),
            _ => Err(ConfigError::InvalidLogLevel(level.to_string())),
        },
        None if verbose => Ok("info"),
        None => Ok("warn"),
    }
}
