//! git-prep - commit, push and prepare a pull request
//!
//! CLI binary: interactive menu by default, flags with `--no-interactive`.

use anyhow::Result;
use clap::Parser;
use git_prep::config::Overrides;
use git_prep::review::Invocation;
use git_prep::session::{Mode, SessionOptions};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;

#[derive(Parser)]
#[command(name = "git-prep")]
#[command(about = "Commit, push and prepare a pull request from the current branch")]
#[command(version)]
struct Cli {
    /// Path to git repository (defaults to current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Branch the pull request should merge into
    #[arg(long)]
    target_branch: Option<String>,

    /// Commit message
    #[arg(long)]
    commit_message: Option<String>,

    /// Pull request title
    #[arg(long)]
    pr_title: Option<String>,

    /// Pull request description
    #[arg(long)]
    pr_description: Option<String>,

    /// Branch being submitted; must be the checked-out branch
    #[arg(long)]
    source_branch: Option<String>,

    /// Run in interactive mode (default)
    #[arg(long, overrides_with = "no_interactive")]
    interactive: bool,

    /// Skip the menu and use the flag values directly
    #[arg(long, overrides_with = "interactive")]
    no_interactive: bool,

    /// Log git invocations and decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    const fn mode(&self) -> Mode {
        if self.no_interactive {
            Mode::NonInteractive
        } else {
            Mode::Interactive
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "git_prep=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let path = cli.path.clone().unwrap_or_else(|| PathBuf::from("."));
    let options = SessionOptions {
        mode: cli.mode(),
        overrides: Overrides {
            target_branch: cli.target_branch,
            commit_message: cli.commit_message,
            pr_title: cli.pr_title,
            pr_description: cli.pr_description,
        },
        source_branch: cli.source_branch,
        invocation: invocation(cli.path.as_deref()),
    };

    cli::run_prep(&path, &options)
}

/// How to spell this run again, with `--path` made absolute so it works anywhere
fn invocation(path: Option<&Path>) -> Invocation {
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| "git-prep".to_string());
    let invocation = Invocation::new(program);
    match path {
        Some(path) => invocation
            .with_path(std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())),
        None => invocation,
    }
}
