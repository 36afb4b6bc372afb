use std::io::{BufRead, Write};

use clap::Args;

use crate::github::{GitHubClient, RepoSummary};

#[derive(Args, Clone, PartialEq, Eq)]
pub struct PublishArgs {}

pub async fn run(_args: &PublishArgs) -> anyhow::Result<()> {
    let client = GitHubClient::from_env()?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_with_client(&client, &mut stdin.lock(), &mut stdout.lock()).await
}

/// Walk the user's private repositories one at a time, asking for
/// confirmation before each visibility change.
///
/// Strictly sequential: a repository is displayed, confirmed or declined, and
/// mutated (if confirmed) before the next one is considered. A failed mutation
/// is reported and the loop moves on; it never aborts the run or affects other
/// repositories.
pub(crate) async fn run_with_client(
    client: &GitHubClient,
    input: &mut impl BufRead,
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

        if !confirm(input, output, repo)? {
            continue;
        }

        match client.make_public(&repo.full_name).await {
            Ok(()) => writeln!(output, "Successfully made {} public", repo.name)?,
            Err(e) => {
                writeln!(output, "Error modifying repository {}: {e}", repo.full_name)?;
                writeln!(output, "Failed to make {} public", repo.name)?;
            }
        }
    }

    Ok(())
}

/// Prompt for a single repository. Returns `Ok(false)` on decline or EOF.
fn confirm(
    input: &mut impl BufRead,
    output: &mut impl Write,
    repo: &RepoSummary,
) -> std::io::Result<bool> {
    write!(output, "\nMake {} public? (y/N): ", repo.name)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(is_affirmative(&line))
}

/// Only an explicit `y` (either case) confirms; anything else declines.
fn is_affirmative(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}
