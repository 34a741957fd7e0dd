//! Commit, push and pull request link generation
//!
//! Runs the git steps in a fixed order. Each step only starts once the
//! previous one succeeded; the first failure is reported once and ends the
//! run. Nothing already done is rolled back.

use crate::config::{Configuration, Field};
use crate::error::Error;
use crate::git::{origin_url, pull_request_url, GitRunner};
use std::fmt;
use tracing::{debug, info};

/// Executor step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `git add .`
    Staging,
    /// `git commit -m <message>`
    Committing,
    /// `git push origin <source>`
    Pushing,
    /// `git config --get remote.origin.url`
    ResolvingRemote,
}

impl Step {
    /// Prefix for the error shown when this step fails
    pub const fn failure_label(self) -> &'static str {
        match self {
            Self::Staging => "Error staging changes",
            Self::Committing => "Error creating commit",
            Self::Pushing => "Error pushing changes",
            Self::ResolvingRemote => "Could not determine repository URL",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Staging => write!(f, "Staging changes"),
            Self::Committing => write!(f, "Creating commit"),
            Self::Pushing => write!(f, "Pushing changes"),
            Self::ResolvingRemote => write!(f, "Resolving repository URL"),
        }
    }
}

/// Everything the user needs to open the pull request by hand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestDetails {
    /// Browser URL for a new pull request
    pub url: String,
    /// Head branch
    pub source_branch: String,
    /// Base branch
    pub target_branch: String,
    /// Title to enter
    pub title: String,
    /// Description to enter
    pub description: String,
}

/// Receives executor progress
///
/// The CLI renders a spinner and styled messages; tests record the calls.
pub trait ProgressCallback {
    /// A step is starting
    fn on_step(&self, step: Step);

    /// A step finished successfully
    fn on_step_done(&self, step: Step);

    /// The run failed; called at most once
    fn on_error(&self, error: &Error);

    /// Everything succeeded
    fn on_complete(&self, details: &PullRequestDetails);
}

/// No-op progress callback for when progress isn't needed
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_step(&self, _step: Step) {}
    fn on_step_done(&self, _step: Step) {}
    fn on_error(&self, _error: &Error) {}
    fn on_complete(&self, _details: &PullRequestDetails) {}
}

/// Result of an executor run
#[derive(Debug, Clone, Default)]
pub struct ExecutionResult {
    /// Whether every step succeeded
    pub success: bool,
    /// Steps that completed, in order
    pub completed: Vec<Step>,
    /// Pull request details, when the run got that far
    pub pull_request: Option<PullRequestDetails>,
    /// Error messages (at most one)
    pub errors: Vec<String>,
}

impl ExecutionResult {
    fn fail(mut self, error: &Error, progress: &dyn ProgressCallback) -> Self {
        progress.on_error(error);
        self.errors.push(error.to_string());
        self.success = false;
        self
    }
}

/// Stage, commit and push, then work out the pull request URL
pub fn execute_pr(
    config: &Configuration,
    git: &dyn GitRunner,
    progress: &dyn ProgressCallback,
) -> ExecutionResult {
    let mut result = ExecutionResult::default();
    let source = config.get(Field::SourceBranch);
    let message = config.get(Field::CommitMessage);

    let steps: [(Step, Vec<&str>); 3] = [
        (Step::Staging, vec!["add", "."]),
        (Step::Committing, vec!["commit", "-m", message]),
        (Step::Pushing, vec!["push", "origin", source]),
    ];

    for (step, args) in steps {
        progress.on_step(step);
        if let Err(err) = git.run(&args) {
            debug!("{step} failed");
            return result.fail(&Error::Step { step, source: err }, progress);
        }
        progress.on_step_done(step);
        result.completed.push(step);
    }

    progress.on_step(Step::ResolvingRemote);
    let remote = match origin_url(git) {
        Ok(url) if !url.is_empty() => url,
        Ok(_) => return result.fail(&Error::RemoteUrlUnavailable, progress),
        Err(e) => {
            debug!("reading remote.origin.url failed: {e}");
            return result.fail(&Error::RemoteUrlUnavailable, progress);
        }
    };
    progress.on_step_done(Step::ResolvingRemote);
    result.completed.push(Step::ResolvingRemote);

    let details = PullRequestDetails {
        url: pull_request_url(&remote),
        source_branch: source.to_string(),
        target_branch: config.get(Field::TargetBranch).to_string(),
        title: config.get(Field::PrTitle).to_string(),
        description: config.get(Field::PrDescription).to_string(),
    };
    info!(url = %details.url, "changes pushed");

    progress.on_complete(&details);
    result.pull_request = Some(details);
    result.success = true;
    result
}
