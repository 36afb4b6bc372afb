//! GitHub API client module using reqwest.
//!
//! Authentication uses the `GITHUB_TOKEN` environment variable, read once at
//! client construction and passed in explicitly from then on.

mod client;
mod error;
#[cfg(test)]
pub mod mock;
mod repo;

pub use client::GitHubClient;
pub use error::GitHubError;
#[allow(unused_imports)]
pub use repo::{Owner, OwnerType, RepoSummary};
