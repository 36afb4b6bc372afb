//! GitHub API client built on reqwest.

use reqwest::header::{ACCEPT, AUTHORIZATION};

use super::error::{GitHubError, Result};
use crate::shared::env_var;

const GITHUB_API_URL: &str = "https://api.github.com";
const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!("unveil/", env!("CARGO_PKG_VERSION"));

/// Authenticated GitHub REST API client.
///
/// Holds the token explicitly; nothing in this crate reads the environment
/// after construction, so tests can inject a fake token and base URL.
#[derive(Debug)]
pub struct GitHubClient {
    http: reqwest::Client,
    token: String,
    base_url: String,
}

impl GitHubClient {
    /// Create a client for the real GitHub API from the `GITHUB_TOKEN`
    /// environment variable.
    pub fn from_env() -> Result<Self> {
        let token = env_var::github_token().ok_or(GitHubError::MissingToken)?;
        Ok(Self::new(token, GITHUB_API_URL.to_string()))
    }

    /// Create a client against an arbitrary base URL (used by tests to point
    /// at a mock server).
    pub fn new(token: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            token,
            base_url,
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Build a request with the headers GitHub expects on every call.
    pub(crate) fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        tracing::debug!(%method, url, "sending GitHub API request");
        self.http
            .request(method, url)
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(ACCEPT, ACCEPT_HEADER)
            // GitHub rejects requests without a User-Agent
            .header(reqwest::header::USER_AGENT, USER_AGENT)
    }
}
