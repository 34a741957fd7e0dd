//! Interactive main menu
//!
//! Shows every field with its current value plus "Review and Create PR" and
//! "Exit", and loops until the user either confirms the review or exits.

use crate::config::{Configuration, Field};
use crate::env_order::is_valid_target;
use crate::error::Result;
use crate::git::{remote_branches, GitRunner};
use crate::review::{self, Invocation};
use crate::terminal::Terminal;
use tracing::debug;

/// Label of the entry that opens the review screen
pub const REVIEW_LABEL: &str = "Review and Create PR";
/// Label of the entry that leaves without doing anything
pub const EXIT_LABEL: &str = "Exit";

/// What selecting a menu entry does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Display-only field; re-shows the menu
    Show(Field),
    /// Prompt for a new value
    Edit(Field),
    /// Open the review screen
    Review,
    /// Leave the menu
    Exit,
}

/// One rendered menu line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// Text shown to the user
    pub label: String,
    /// Action taken when selected
    pub action: MenuAction,
}

/// How the menu loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// The user confirmed the review; the executor should run
    Confirmed,
    /// The user chose Exit
    Exited,
}

/// Menu lines for the current configuration
///
/// Field labels are padded to the widest label plus two, followed by the
/// value in brackets.
pub fn menu_entries(config: &Configuration) -> Vec<MenuEntry> {
    let width = Field::ALL.iter().map(|f| f.label().len()).max().unwrap_or(0) + 2;

    let mut entries: Vec<MenuEntry> = config
        .fields()
        .map(|(field, value)| MenuEntry {
            label: format!("{:<width$} : [{value}]", field.label()),
            action: if field.is_editable() {
                MenuAction::Edit(field)
            } else {
                MenuAction::Show(field)
            },
        })
        .collect();

    entries.push(MenuEntry {
        label: REVIEW_LABEL.to_string(),
        action: MenuAction::Review,
    });
    entries.push(MenuEntry {
        label: EXIT_LABEL.to_string(),
        action: MenuAction::Exit,
    });
    entries
}

/// Shown when no remote branch is a valid promotion target
pub const NO_TARGETS_MESSAGE: &str = "No valid target branches found!";

/// Run the menu loop until the user confirms the review or exits
pub fn run_menu(
    config: &mut Configuration,
    git: &dyn GitRunner,
    terminal: &dyn Terminal,
    invocation: &Invocation,
) -> Result<MenuOutcome> {
    let mut cursor = 0;
    // Printed after the next clear so it stays visible above the menu
    let mut notice: Option<&str> = None;

    loop {
        terminal.clear();
        if let Some(message) = notice.take() {
            terminal.error(message);
        }
        let entries = menu_entries(config);
        let labels: Vec<String> = entries.iter().map(|e| e.label.clone()).collect();
        cursor = terminal.select("Select action", &labels, cursor.min(labels.len() - 1))?;

        let Some(entry) = entries.get(cursor) else {
            continue;
        };
        debug!(action = ?entry.action, "menu selection");

        match entry.action {
            MenuAction::Show(_) => {}
            MenuAction::Edit(Field::TargetBranch) => {
                let branch = choose_target_branch(config.get(Field::SourceBranch), git, terminal)?;
                if branch.is_none() {
                    notice = Some(NO_TARGETS_MESSAGE);
                }
                config.set(Field::TargetBranch, branch.unwrap_or_default());
            }
            MenuAction::Edit(field) => {
                terminal.clear();
                let value = terminal.input(field.prompt())?;
                config.set(field, value);
            }
            MenuAction::Review => {
                if review::confirm(terminal, invocation, config)? {
                    return Ok(MenuOutcome::Confirmed);
                }
            }
            MenuAction::Exit => return Ok(MenuOutcome::Exited),
        }
    }
}

/// Offer the remote branches `source` may be promoted into
///
/// Returns `None` without prompting when none qualify.
fn choose_target_branch(
    source: &str,
    git: &dyn GitRunner,
    terminal: &dyn Terminal,
) -> Result<Option<String>> {
    let candidates: Vec<String> = remote_branches(git)
        .into_iter()
        .filter(|branch| is_valid_target(source, branch))
        .collect();
    debug!(source, ?candidates, "target branch candidates");

    if candidates.is_empty() {
        return Ok(None);
    }

    terminal.clear();
    let picked = terminal.select(Field::TargetBranch.prompt(), &candidates, 0)?;
    Ok(candidates.into_iter().nth(picked))
}
