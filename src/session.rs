//! One run of the tool, from branch detection to the executor
//!
//! The binary supplies the git runner, terminal and progress sink; this
//! module decides between the menu and direct flag binding.

use crate::config::{Configuration, Overrides};
use crate::error::{Error, Result};
use crate::execute::{execute_pr, ExecutionResult, ProgressCallback};
use crate::git::{current_branch, GitRunner};
use crate::menu::{run_menu, MenuOutcome};
use crate::review::Invocation;
use crate::terminal::Terminal;
use tracing::{debug, info};

/// Whether to show the menu or use flag values directly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Menu-driven
    #[default]
    Interactive,
    /// Flags only, straight to the executor
    NonInteractive,
}

/// Inputs for a session
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Menu or flags
    pub mode: Mode,
    /// Field values from the command line
    pub overrides: Overrides,
    /// `--source-branch`, checked against the checked-out branch
    pub source_branch: Option<String>,
    /// How the tool was invoked, used in the reproduced command line
    pub invocation: Invocation,
}

/// How a session ended
#[derive(Debug, Clone)]
pub enum SessionOutcome {
    /// The executor ran (successfully or not)
    Executed {
        /// Configuration the executor ran with
        config: Configuration,
        /// Executor result
        result: ExecutionResult,
    },
    /// The user left the menu
    Exited,
}

impl SessionOutcome {
    /// Whether the session ended without a failed executor step
    pub const fn is_success(&self) -> bool {
        match self {
            Self::Executed { result, .. } => result.success,
            Self::Exited => true,
        }
    }
}

/// Run a session
///
/// Fails only when the current branch cannot be determined, the requested
/// source branch is not checked out, or a prompt fails. Executor failures
/// are reported through `progress` and returned in the outcome.
pub fn run_session(
    options: &SessionOptions,
    git: &dyn GitRunner,
    terminal: &dyn Terminal,
    progress: &dyn ProgressCallback,
) -> Result<SessionOutcome> {
    let current = current_branch(git);
    if current.is_empty() {
        return Err(Error::NoCurrentBranch);
    }

    let requested = options.source_branch.as_deref().unwrap_or_default();
    if !requested.is_empty() && requested != current {
        return Err(Error::SourceBranchMismatch {
            requested: requested.to_string(),
            current,
        });
    }

    info!(branch = %current, mode = ?options.mode, "starting session");
    let mut config = Configuration::for_branch(current);

    match options.mode {
        Mode::NonInteractive => config.apply(&options.overrides),
        Mode::Interactive => {
            if !options.overrides.is_empty() {
                debug!("field flags are ignored in interactive mode");
            }
            if run_menu(&mut config, git, terminal, &options.invocation)? == MenuOutcome::Exited {
                return Ok(SessionOutcome::Exited);
            }
        }
    }

    let result = execute_pr(&config, git, progress);
    Ok(SessionOutcome::Executed { config, result })
}
