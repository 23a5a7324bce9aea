//! Error types for configuration and remote listing failures.

use thiserror::Error;

/// Configuration failures, raised before any network activity.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not present.
    #[error("Environment variable {0} is not set")]
    MissingVariable(String),

    /// A required environment variable is present but empty.
    #[error("Environment variable {0} is empty")]
    EmptyVariable(String),

    /// An environment overlay file could not be loaded.
    #[error("Failed to load environment file: {0}")]
    InvalidEnvFile(String),

    /// The organization URI could not be resolved to an endpoint and organization.
    #[error("Invalid organization URI {uri}: {reason}")]
    InvalidOrganizationUri { uri: String, reason: String },

    /// Log level outside the accepted set.
    #[error("Invalid log level: {0} (must be 'trace', 'debug', 'info', 'warn', 'error', or 'off')")]
    InvalidLogLevel(String),
}

/// Failures while talking to the remote service.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The SDK call failed (connection, authentication, or API error).
    #[error("{0}")]
    Api(String),

    /// The async runtime backing the fetch could not be created.
    #[error("Failed to create async runtime: {0}")]
    Runtime(String),
}

/// Top-level error surfaced by the CLI runner.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Remote(#[from] RemoteError),
}
