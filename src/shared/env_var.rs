//! Centralized reader for environment variables.
//!
//! Variable names are private constants here; external code accesses values
//! through the functions below.

const GITHUB_TOKEN: &str = "GITHUB_TOKEN";

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

/// The GitHub API token, or `None` when unset or empty.
pub fn github_token() -> Option<String> {
    non_empty_var(GITHUB_TOKEN)
}
