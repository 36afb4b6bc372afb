//! GitHub API error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("GITHUB_TOKEN environment variable not set")]
    MissingToken,

    #[error("GitHub API error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("GitHub API error: HTTP {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

pub type Result<T> = std::result::Result<T, GitHubError>;
