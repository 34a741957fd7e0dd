//! Scripted git runner for testing
//!
//! These are test utilities - not every helper is used by every test binary.

#![allow(dead_code)]

use git_prep::git::{CommandError, GitRunner};
use std::collections::HashMap;
use std::sync::Mutex;

/// Default `origin` URL used by [`MockGit::on_branch`]
pub const ORIGIN_URL: &str = "git@bitbucket.org:team/repo.git";

/// Pull request URL that [`ORIGIN_URL`] normalizes to
pub const PULL_REQUEST_URL: &str = "https://bitbucket.org/team/repo/pull-requests/new";

/// Mock git runner
///
/// Responses are looked up by the full command (`"branch -r"`) first and
/// then by subcommand (`"commit"`). Unscripted commands succeed with empty
/// output.
///
/// Features:
/// - Call tracking for verification
/// - Per-command responses
/// - Error injection for failure path testing
pub struct MockGit {
    responses: Mutex<HashMap<String, Result<String, String>>>,
    calls: Mutex<Vec<String>>,
}

impl MockGit {
    /// Runner with nothing scripted (no current branch)
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Runner sitting on `branch` with a Bitbucket SSH `origin`
    pub fn on_branch(branch: &str) -> Self {
        let git = Self::new();
        git.respond("branch --show-current", branch);
        git.respond("config --get remote.origin.url", ORIGIN_URL);
        git
    }

    /// Script `git branch -r` to list `branches` on origin
    pub fn with_remote_branches(self, branches: &[&str]) -> Self {
        let mut output = String::from("  origin/HEAD -> origin/main\n");
        for branch in branches {
            output.push_str(&format!("  origin/{branch}\n"));
        }
        self.respond("branch -r", &output);
        self
    }

    // === Scripting ===

    /// Succeed with `output` for `command`
    pub fn respond(&self, command: &str, output: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(command.to_string(), Ok(output.to_string()));
    }

    /// Fail `command` with `message`
    pub fn fail(&self, command: &str, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(command.to_string(), Err(message.to_string()));
    }

    // === Call verification ===

    /// Every command run so far, joined with spaces
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Whether any call starts with `prefix`
    pub fn was_called(&self, prefix: &str) -> bool {
        self.calls().iter().any(|c| c.starts_with(prefix))
    }

    /// Assert `command` was run exactly
    pub fn assert_called(&self, command: &str) {
        let calls = self.calls();
        assert!(
            calls.iter().any(|c| c == command),
            "Expected git {command} but got: {calls:?}"
        );
    }

    /// Assert no command starting with `prefix` was run
    pub fn assert_not_called(&self, prefix: &str) {
        let calls = self.calls();
        assert!(
            !calls.iter().any(|c| c.starts_with(prefix)),
            "Did not expect git {prefix} but got: {calls:?}"
        );
    }
}

impl GitRunner for MockGit {
    fn run(&self, args: &[&str]) -> Result<String, CommandError> {
        let command = args.join(" ");
        self.calls.lock().unwrap().push(command.clone());

        let responses = self.responses.lock().unwrap();
        let response = responses
            .get(&command)
            .or_else(|| args.first().and_then(|sub| responses.get(*sub)));

        match response {
            Some(Ok(output)) => Ok(output.trim().to_string()),
            Some(Err(message)) => Err(CommandError::new(args, message.clone())),
            None => Ok(String::new()),
        }
    }
}
