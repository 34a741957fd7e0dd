//! CLI glue
//!
//! Wires the real git runner, the `dialoguer` terminal and the spinner
//! progress into a session.

mod progress;
mod style;
mod terminal;

use crate::cli::style::Stylize;
use anstream::eprintln;
use anyhow::Result;
use git_prep::git::SystemGit;
use git_prep::session::{run_session, SessionOptions};
use progress::CliProgress;
use std::path::Path;
use std::process::ExitCode;
use terminal::DialoguerTerminal;

/// Run one session against the repository at `path`
pub fn run_prep(path: &Path, options: &SessionOptions) -> Result<ExitCode> {
    let git = SystemGit::new(path);
    let terminal = DialoguerTerminal::new();
    let progress = CliProgress::new();

    match run_session(options, &git, &terminal, &progress) {
        Ok(outcome) if outcome.is_success() => Ok(ExitCode::SUCCESS),
        // Executor failures were already printed by the progress callback
        Ok(_) => Ok(ExitCode::FAILURE),
        Err(e) => {
            eprintln!("{}: {}", "error".error(), e.to_string().error());
            Ok(ExitCode::FAILURE)
        }
    }
}
