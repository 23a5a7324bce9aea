//! CLI Tooling
//!
//! Command-line surface and the fetch-then-render runner for the repository
//! listing operation.

use crate::config::AppConfig;
use crate::error::{AppError, ConfigError, RemoteError};
use crate::output::render_repository_list;
use crate::remote::{AdoRepositorySource, RepositorySource};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

/// Azure Repos CLI - list the Git repositories of an Azure DevOps organization
#[derive(Parser)]
#[command(name = "azure-repos")]
#[command(about = "List the Git repositories of an Azure DevOps organization")]
pub struct Cli {
    /// Environment overlay file (defaults to ./.env when present)
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// CLI context holding the validated configuration.
pub struct CliContext {
    config: AppConfig,
}

impl CliContext {
    /// Load configuration for a run.
    ///
    /// Fails before any network activity when a required variable is missing
    /// or empty.
    pub fn new(env_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config = AppConfig::load(env_file)?;
        Ok(Self { config })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Execute the listing: build the SDK source, fetch, render.
    pub fn execute(&self) -> Result<String, AppError> {
        let source = AdoRepositorySource::new(&self.config)?;
        let rt =
            tokio::runtime::Runtime::new().map_err(|e| RemoteError::Runtime(e.to_string()))?;
        let output = rt.block_on(fetch_and_render(&source))?;
        Ok(output)
    }
}

/// Fetch repository names and render them for the console.
///
/// The header is produced only after the fetch has succeeded; a failed fetch
/// yields no output at all.
pub async fn fetch_and_render(source: &dyn RepositorySource) -> Result<String, RemoteError> {
    let names = source.list_repository_names().await?;
    info!(count = names.len(), "fetched repository list");
    Ok(render_repository_list(&names))
}
