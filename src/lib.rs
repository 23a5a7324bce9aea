//! Azure Repos: Azure DevOps repository listing
//!
//! Reads a personal access token and organization URI from the environment,
//! fetches the organization's Git repositories through the Azure DevOps REST
//! SDK, and prints their names.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod remote;
