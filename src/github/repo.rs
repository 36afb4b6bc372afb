//! Repository operations: listing private repositories and changing visibility.

use serde::Deserialize;
use serde_json::json;

use super::client::GitHubClient;
use super::error::{GitHubError, Result};

/// Snapshot of a repository as returned by the API. Never persisted.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RepoSummary {
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub private: bool,
    pub owner: Owner,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Owner {
    #[serde(rename = "type")]
    pub kind: OwnerType,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub enum OwnerType {
    User,
    Organization,
}

impl GitHubClient {
    /// List the authenticated user's private repositories.
    ///
    /// One page of up to 100 results; no further pagination. The server-side
    /// `visibility=private` filter still returns private repositories of
    /// organizations the user belongs to, so organization-owned entries are
    /// dropped here. API ordering is preserved.
    pub async fn list_private_repos(&self) -> Result<Vec<RepoSummary>> {
        let url = self.url("/user/repos");
        let response = self
            .request(reqwest::Method::GET, &url)
            .query(&[("visibility", "private"), ("per_page", "100")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GitHubError::Status {
                status: response.status(),
                url,
            });
        }

        let repos: Vec<RepoSummary> = response.json().await?;
        Ok(repos
            .into_iter()
            .filter(|r| r.private && r.owner.kind == OwnerType::User)
            .collect())
    }

    /// Change a repository's visibility to public.
    ///
    /// A single PATCH attempt, no retries. Idempotent server-side: repeating
    /// it on an already-public repository is a no-op.
    pub async fn make_public(&self, full_name: &str) -> Result<()> {
        let url = self.url(&format!("/repos/{full_name}"));
        let response = self
            .request(reqwest::Method::PATCH, &url)
            .json(&json!({ "private": false }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GitHubError::Status {
                status: response.status(),
                url,
            });
        }

        Ok(())
    }
}
