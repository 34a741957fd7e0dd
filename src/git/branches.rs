//! Current and remote branch discovery

use crate::git::GitRunner;
use tracing::debug;

const ORIGIN_PREFIX: &str = "origin/";

/// Name of the checked-out branch
///
/// Returns an empty string when git fails or HEAD is detached.
pub fn current_branch(git: &dyn GitRunner) -> String {
    match git.run(&["branch", "--show-current"]) {
        Ok(output) => output.trim().to_string(),
        Err(e) => {
            debug!("could not read current branch: {e}");
            String::new()
        }
    }
}

/// Remote branches with the `origin/` prefix removed, sorted ascending
///
/// Returns an empty list when git fails.
pub fn remote_branches(git: &dyn GitRunner) -> Vec<String> {
    match git.run(&["branch", "-r"]) {
        Ok(output) => parse_remote_branches(&output),
        Err(e) => {
            debug!("could not list remote branches: {e}");
            Vec::new()
        }
    }
}

/// Parse `git branch -r` output
///
/// Drops the symbolic `HEAD` entry (`origin/HEAD -> origin/main`) and blank
/// lines. Branches of other remotes keep their remote prefix.
pub fn parse_remote_branches(output: &str) -> Vec<String> {
    let mut branches: Vec<String> = output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with("origin/HEAD") && !line.contains(" -> "))
        .map(|line| line.strip_prefix(ORIGIN_PREFIX).unwrap_or(line).to_string())
        .collect();

    branches.sort();
    branches
}
