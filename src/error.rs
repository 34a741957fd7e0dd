//! Error types for git-prep

use crate::execute::Step;
use crate::git::CommandError;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by a git-prep session
#[derive(Debug, Error)]
pub enum Error {
    /// `git branch --show-current` produced nothing (detached HEAD, not a repo)
    #[error("Could not determine current branch")]
    NoCurrentBranch,

    /// `--source-branch` was given but names a different branch than HEAD
    #[error("source branch `{requested}` does not match the checked-out branch `{current}`")]
    SourceBranchMismatch {
        /// Branch named on the command line
        requested: String,
        /// Branch actually checked out
        current: String,
    },

    /// One of the executor steps failed
    #[error("{}: {source}", .step.failure_label())]
    Step {
        /// Step that failed
        step: Step,
        /// Underlying git failure
        source: CommandError,
    },

    /// `remote.origin.url` is not set or could not be read
    #[error("Could not determine repository URL")]
    RemoteUrlUnavailable,

    /// Terminal prompt failed (closed stdin, not a tty, ...)
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}
