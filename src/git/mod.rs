//! Thin wrapper around the `git` command-line tool
//!
//! Everything that shells out goes through [`GitRunner`], so the session can
//! be driven against a scripted runner in tests.

mod branches;
mod remote;

pub use branches::{current_branch, parse_remote_branches, remote_branches};
pub use remote::{normalize_remote_url, origin_url, pull_request_url, PULL_REQUEST_PATH};

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// A failed git invocation
///
/// Carries the argument vector and whatever diagnostic text git produced
/// (stderr, falling back to stdout), or the launch error if git never ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandError {
    /// Arguments passed to git
    pub args: Vec<String>,
    /// Captured diagnostic text
    pub message: String,
}

impl CommandError {
    /// Build an error for `args` with the given diagnostic text
    pub fn new(args: &[&str], message: impl Into<String>) -> Self {
        Self {
            args: args.iter().map(ToString::to_string).collect(),
            message: message.into(),
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "git {} failed", self.args.join(" "))
        } else {
            f.write_str(&self.message)
        }
    }
}

impl std::error::Error for CommandError {}

/// Executes git with an argument vector
///
/// Implementations block until the command finishes and return its trimmed
/// stdout on success.
pub trait GitRunner {
    /// Run `git <args>`
    fn run(&self, args: &[&str]) -> Result<String, CommandError>;
}

/// [`GitRunner`] backed by the `git` binary on `PATH`
#[derive(Debug, Clone)]
pub struct SystemGit {
    workdir: PathBuf,
}

impl SystemGit {
    /// Run git commands inside `workdir`
    pub fn new(workdir: impl AsRef<Path>) -> Self {
        Self {
            workdir: workdir.as_ref().to_path_buf(),
        }
    }
}

impl GitRunner for SystemGit {
    fn run(&self, args: &[&str]) -> Result<String, CommandError> {
        debug!("git {}", args.join(" "));

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| CommandError::new(args, format!("failed to execute git: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            // `git commit` with nothing to commit reports on stdout
            let message = if stderr.is_empty() {
                String::from_utf8_lossy(&output.stdout).trim().to_string()
            } else {
                stderr
            };
            debug!(status = ?output.status.code(), "git {} failed: {message}", args.join(" "));
            return Err(CommandError::new(args, message));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
