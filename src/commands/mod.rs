pub mod list;
pub mod publish;

use std::io::Write;

use crate::github::RepoSummary;

/// Print one repository in the block format shared by `list` and `publish`.
pub(crate) fn write_repo_block(output: &mut impl Write, repo: &RepoSummary) -> std::io::Result<()> {
    writeln!(output)?;
    writeln!(output, "Name: {}", repo.name)?;
    writeln!(output, "URL: {}", repo.html_url)?;
    writeln!(
        output,
        "Description: {}",
        repo.description.as_deref().unwrap_or("(none)")
    )?;
    Ok(())
}
