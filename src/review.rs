//! Review screen: summary, reproducible command line, confirmation

use crate::config::{Configuration, Field};
use crate::error::Result;
use crate::terminal::Terminal;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Flag that forces the reproduced command to skip the menu
pub const NON_INTERACTIVE_FLAG: &str = "--no-interactive";

const CONFIRM_CHOICES: [&str; 2] = ["Yes, create PR", "No, return to menu"];

/// How the tool was started, as far as the reproduced command needs it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Program name as typed (`argv[0]`)
    pub program: String,
    /// Repository given with `--path`, if any
    pub path: Option<PathBuf>,
}

impl Invocation {
    /// Invocation of `program` in the current directory
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            path: None,
        }
    }

    /// Same invocation operating on the repository at `path`
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    fn repository(&self) -> Option<&Path> {
        self.path.as_deref().filter(|p| *p != Path::new("."))
    }
}

/// What the review screen shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    /// Every field with its current value, in display order
    pub entries: Vec<(Field, String)>,
    /// Command line that repeats this run without the menu
    pub command: String,
}

impl Review {
    /// Build the review for `config` as started by `invocation`
    pub fn new(invocation: &Invocation, config: &Configuration) -> Self {
        Self {
            entries: config
                .fields()
                .map(|(field, value)| (field, value.to_string()))
                .collect(),
            command: non_interactive_command(invocation, config),
        }
    }
}

/// Command line reproducing `config` in non-interactive mode
///
/// Carries `--path` when the run targeted another repository. Only fields
/// with a value are emitted, as `--<flag> "<value>"`.
pub fn non_interactive_command(invocation: &Invocation, config: &Configuration) -> String {
    let mut command = invocation.program.clone();
    if let Some(path) = invocation.repository() {
        let _ = write!(command, " --path \"{}\"", quote(&path.display().to_string()));
    }
    for (field, value) in config.fields().filter(|(_, v)| !v.is_empty()) {
        let _ = write!(command, " --{} \"{}\"", field.flag_name(), quote(value));
    }
    command.push(' ');
    command.push_str(NON_INTERACTIVE_FLAG);
    command
}

/// Escape `value` for use inside shell double quotes
///
/// `!` is left alone: a backslash before it survives in POSIX `sh`.
fn quote(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Show the review and ask whether to go ahead
pub fn confirm(
    terminal: &dyn Terminal,
    invocation: &Invocation,
    config: &Configuration,
) -> Result<bool> {
    terminal.clear();
    terminal.show_review(&Review::new(invocation, config));

    let choices: Vec<String> = CONFIRM_CHOICES.iter().map(ToString::to_string).collect();
    let picked = terminal.select("Is this configuration correct?", &choices, 0)?;
    Ok(picked == 0)
}
