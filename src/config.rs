//! Configuration
//!
//! Loads the required environment variables into an explicit [`AppConfig`],
//! applying the optional `.env` overlay first. Environment state is read once
//! at startup; everything downstream receives the struct.

use crate::error::ConfigError;
use std::path::Path;

/// Environment variable holding the personal access token.
pub const PAT_VAR: &str = "AZURE_DEVOPS_PAT";

/// Environment variable holding the organization base URI.
pub const URI_VAR: &str = "AZURE_DEVOPS_URI";

/// Validated run configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Personal access token used to authenticate API calls.
    pub pat: String,

    /// Base URI of the Azure DevOps organization, e.g. `https://dev.azure.com/my-org`.
    pub organization_uri: String,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// The `.env` overlay is applied first; variables already present in the
    /// process environment are never overridden by the overlay.
    pub fn load(env_file: Option<&Path>) -> Result<Self, ConfigError> {
        load_env_overlay(env_file)?;
        Ok(Self {
            pat: require_env(PAT_VAR)?,
            organization_uri: require_env(URI_VAR)?,
        })
    }
}

/// Apply the `.env` overlay.
///
/// Without an explicit path, a missing `./.env` is a no-op. An explicit file
/// that cannot be read or parsed is a configuration error.
pub fn load_env_overlay(env_file: Option<&Path>) -> Result<(), ConfigError> {
    match env_file {
        Some(path) => dotenvy::from_path(path)
            .map_err(|e| ConfigError::InvalidEnvFile(format!("{}: {}", path.display(), e))),
        None => match dotenvy::dotenv() {
            Ok(_) => Ok(()),
            Err(e) if e.not_found() => Ok(()),
            Err(e) => Err(ConfigError::InvalidEnvFile(e.to_string())),
        },
    }
}

/// Look up a required environment variable, failing when it is unset or empty.
pub fn require_env(name: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if value.is_empty() => Err(ConfigError::EmptyVariable(name.to_string())),
        Ok(value) => Ok(value),
        Err(_) => Err(ConfigError::MissingVariable(name.to_string())),
    }
}
