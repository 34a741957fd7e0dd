//! Executor progress with a spinner and styled output

use crate::cli::style::{check, cross, hyperlink_url, spinner_style, Stream, Stylize};
use anstream::{eprintln, println};
use git_prep::error::Error;
use git_prep::execute::{ProgressCallback, PullRequestDetails, Step};
use indicatif::ProgressBar;
use std::cell::OnceCell;
use std::time::Duration;

/// Spinner-backed progress for the executor
///
/// The spinner is created on the first step so nothing is drawn while the
/// menu is still up.
#[derive(Default)]
pub struct CliProgress {
    spinner: OnceCell<ProgressBar>,
}

impl CliProgress {
    pub const fn new() -> Self {
        Self {
            spinner: OnceCell::new(),
        }
    }

    fn spinner(&self) -> &ProgressBar {
        self.spinner.get_or_init(|| {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(spinner_style());
            spinner.enable_steady_tick(Duration::from_millis(80));
            spinner
        })
    }

    fn finish(&self) {
        if let Some(spinner) = self.spinner.get() {
            spinner.finish_and_clear();
        }
    }
}

impl ProgressCallback for CliProgress {
    fn on_step(&self, step: Step) {
        self.spinner()
            .set_message(format!("{}...", step.to_string().emphasis()));
    }

    fn on_step_done(&self, step: Step) {
        self.spinner().suspend(|| {
            println!("  {} {}", check(), step.to_string().muted());
        });
    }

    fn on_error(&self, error: &Error) {
        self.finish();
        eprintln!("{} {}", cross(), error.to_string().error());
    }

    fn on_complete(&self, details: &PullRequestDetails) {
        self.finish();
        println!("{} {}", check(), "Changes pushed successfully!".success());
        println!("{}", "Please create a pull request in Bitbucket:".warn().for_stdout());
        println!("URL: {}", hyperlink_url(Stream::Stdout, &details.url).accent());
        println!();
        println!("{}", "Pull Request details:".emphasis());
        println!("Source branch: {}", details.source_branch.accent());
        println!("Target branch: {}", details.target_branch.accent());
        println!("Title: {}", details.title);
        println!("Description: {}", details.description);
    }
}
