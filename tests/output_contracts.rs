//! Contracts for the fetch-then-render path, driven through fake sources.

use async_trait::async_trait;
use azure_repos::cli::fetch_and_render;
use azure_repos::error::RemoteError;
use azure_repos::remote::RepositorySource;

struct FixedSource {
    names: Vec<String>,
}

#[async_trait]
impl RepositorySource for FixedSource {
    async fn list_repository_names(&self) -> Result<Vec<String>, RemoteError> {
        Ok(self.names.clone())
    }
}

struct FailingSource;

#[async_trait]
impl RepositorySource for FailingSource {
    async fn list_repository_names(&self) -> Result<Vec<String>, RemoteError> {
        Err(RemoteError::Api(
            "Failed to list projects: TF400813: the user is not authorized to access this resource"
                .to_string(),
        ))
    }
}

#[tokio::test]
async fn listing_prints_header_then_names_in_remote_order() {
    let source = FixedSource {
        names: vec!["repoA".to_string(), "repoB".to_string()],
    };
    let output = fetch_and_render(&source).await.unwrap();
    assert_eq!(output, "Azure Repositories:\nrepoA\nrepoB");
}

#[tokio::test]
async fn empty_collection_prints_header_alone() {
    let source = FixedSource { names: vec![] };
    let output = fetch_and_render(&source).await.unwrap();
    assert_eq!(output, "Azure Repositories:");
}

#[tokio::test]
async fn failed_fetch_yields_the_error_and_no_output() {
    let err = fetch_and_render(&FailingSource).await.unwrap_err();
    // All-or-nothing: the Err carries the SDK message and no rendered string
    // (header included) exists for the caller to print.
    assert!(err.to_string().contains("TF400813"));
}
