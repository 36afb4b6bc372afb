use std::io::Write;

use clap::Args;

use crate::github::GitHubClient;

#[derive(Args, Clone, PartialEq, Eq)]
pub struct ListArgs {}

pub async fn run(_args: &ListArgs) -> anyhow::Result<()> {
    let client = GitHubClient::from_env()?;
    let stdout = std::io::stdout();
    run_with_client(&client, &mut stdout.lock()).await
}

/// List the user's private repositories and print them one block per repo.
///
/// An API failure is printed and the command still succeeds; only a missing
/// token makes the process exit non-zero.
pub(crate) async fn run_with_client(
    client: &GitHubClient,
    output: &mut impl Write,
) -> anyhow::Result<()> {
    let repos = match client.list_private_repos().await {
        Ok(repos) => repos,
        Err(e) => {
            writeln!(output, "Error accessing GitHub API: {e}")?;
            return Ok(());
        }
    };

    for repo in &repos {
        super::write_repo_block(output, repo)?;
    }

    Ok(())
}
