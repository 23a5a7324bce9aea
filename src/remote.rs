//! Remote repository listing over the Azure DevOps SDK.
//!
//! [`RepositorySource`] is the seam between the runner and the vendor SDK so
//! the fetch-then-render path can be exercised without network access. The
//! SDK owns transport, authentication negotiation, and API versioning.

use crate::config::AppConfig;
use crate::error::{ConfigError, RemoteError};
use async_trait::async_trait;
use azure_devops_rust_api::{core as ado_core, git, Credential};
use tracing::debug;

/// Resolved API endpoint and organization name for an organization URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationLocator {
    /// Service base endpoint, e.g. `https://dev.azure.com`.
    pub endpoint: String,

    /// Organization name, the first path segment of the URI.
    pub organization: String,
}

impl OrganizationLocator {
    /// Resolve an organization base URI such as `https://dev.azure.com/acme`.
    ///
    /// Legacy `https://acme.visualstudio.com` URIs map to the same
    /// organization on the `dev.azure.com` endpoint.
    pub fn parse(uri: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidOrganizationUri {
            uri: uri.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = uri.trim().trim_end_matches('/');
        let (scheme, rest) = if let Some(rest) = trimmed.strip_prefix("https://") {
            ("https", rest)
        } else if let Some(rest) = trimmed.strip_prefix("http://") {
            ("http", rest)
        } else {
            return Err(invalid("URI must start with http:// or https://"));
        };

        let mut segments = rest.split('/');
        let authority = segments.next().unwrap_or_default();
        let host_port = authority.rsplit('@').next().unwrap_or(authority);
        let host = host_port.split(':').next().unwrap_or_default();
        if host.is_empty() {
            return Err(invalid("URI has no host"));
        }
        if host != "localhost" && !host.contains('.') && host.parse::<std::net::IpAddr>().is_err() {
            return Err(invalid("URI host is not a hostname or IP address"));
        }

        if let Some(account) = host.strip_suffix(".visualstudio.com") {
            if account.is_empty() || account.contains('.') {
                return Err(invalid("URI host has no account name"));
            }
            return Ok(Self {
                endpoint: "https://dev.azure.com".to_string(),
                organization: account.to_string(),
            });
        }

        let organization = segments.find(|segment| !segment.is_empty()).ok_or_else(|| {
            invalid("URI must include the organization, e.g. https://dev.azure.com/my-org")
        })?;

        Ok(Self {
            endpoint: format!("{}://{}", scheme, authority),
            organization: organization.to_string(),
        })
    }
}

/// Source of repository names for one organization.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// List repository names in the order the remote returns them.
    async fn list_repository_names(&self) -> Result<Vec<String>, RemoteError>;
}

/// [`RepositorySource`] backed by the Azure DevOps REST SDK.
pub struct AdoRepositorySource {
    core_client: ado_core::Client,
    git_client: git::Client,
    organization: String,
}

impl AdoRepositorySource {
    /// Build authenticated SDK clients for the configured organization.
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        let locator = OrganizationLocator::parse(&config.organization_uri)?;
        let credential = Credential::from_pat(config.pat.clone());
        let endpoint: url::Url =
            locator
                .endpoint
                .parse()
                .map_err(|e| ConfigError::InvalidOrganizationUri {
                    uri: locator.endpoint.clone(),
                    reason: format!("not a valid endpoint URL: {}", e),
                })?;
        let core_client = ado_core::ClientBuilder::new(credential.clone())
            .endpoint(endpoint.clone())
            .build();
        let git_client = git::ClientBuilder::new(credential)
            .endpoint(endpoint)
            .build();
        Ok(Self {
            core_client,
            git_client,
            organization: locator.organization,
        })
    }
}

#[async_trait]
impl RepositorySource for AdoRepositorySource {
    // Repository listing is scoped per project in the REST API, so the
    // organization-wide list is the concatenation over all projects.
    async fn list_repository_names(&self) -> Result<Vec<String>, RemoteError> {
        let projects = self
            .core_client
            .projects_client()
            .list(self.organization.clone())
            .await
            .map_err(|e| RemoteError::Api(format!("Failed to list projects: {}", e)))?
            .value;
        debug!(count = projects.len(), "fetched project list");

        let mut names = Vec::new();
        for project in &projects {
            let repositories = self
                .git_client
                .repositories_client()
                .list(self.organization.clone(), project.name.clone())
                .await
                .map_err(|e| {
                    RemoteError::Api(format!(
                        "Failed to list repositories for project {}: {}",
                        project.name, e
                    ))
                })?
                .value;
            names.extend(repositories.into_iter().map(|repository| repository.name));
        }
        Ok(names)
    }
}
