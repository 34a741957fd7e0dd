//! Remote URL lookup and conversion to a browsable web address

use crate::git::{CommandError, GitRunner};

/// Path appended to the repository web URL to open a new pull request
pub const PULL_REQUEST_PATH: &str = "/pull-requests/new";

/// URL configured for the `origin` remote
pub fn origin_url(git: &dyn GitRunner) -> Result<String, CommandError> {
    git.run(&["config", "--get", "remote.origin.url"])
        .map(|url| url.trim().to_string())
}

/// Convert a remote URL into its web form
///
/// SSH shorthand (`git@host:team/repo.git`) becomes
/// `https://host/team/repo`; only the first `:` is treated as the path
/// separator. A trailing `.git` is always removed. Other shapes pass through.
pub fn normalize_remote_url(url: &str) -> String {
    let url = url.trim();

    let url = url.strip_prefix("git@").map_or_else(
        || url.to_string(),
        |rest| format!("https://{}", rest.replacen(':', "/", 1)),
    );

    url.strip_suffix(".git")
        .map_or_else(|| url.clone(), ToString::to_string)
}

/// Web URL for opening a new pull request against `remote_url`
pub fn pull_request_url(remote_url: &str) -> String {
    format!("{}{PULL_REQUEST_PATH}", normalize_remote_url(remote_url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_ssh_shorthand() {
        assert_eq!(
            normalize_remote_url("git@example.com:team/repo.git"),
            "https://example.com/team/repo"
        );
    }

    #[test]
    fn test_normalize_https_unchanged() {
        assert_eq!(
            normalize_remote_url("https://example.com/team/repo"),
            "https://example.com/team/repo"
        );
    }

    #[test]
    fn test_normalize_strips_git_suffix_from_https() {
        assert_eq!(
            normalize_remote_url("https://bitbucket.org/team/repo.git"),
            "https://bitbucket.org/team/repo"
        );
    }

    #[test]
    fn test_normalize_is_stable_on_its_output() {
        let once = normalize_remote_url("git@bitbucket.org:team/repo.git");
        assert_eq!(normalize_remote_url(&once), once);
    }

    #[test]
    fn test_normalize_only_first_colon() {
        assert_eq!(
            normalize_remote_url("git@example.com:team/a:b.git"),
            "https://example.com/team/a:b"
        );
    }

    #[test]
    fn test_pull_request_url() {
        assert_eq!(
            pull_request_url("git@bitbucket.org:team/repo.git"),
            "https://bitbucket.org/team/repo/pull-requests/new"
        );
    }
}
