//! Shared test helpers

pub mod mock_git;
pub mod terminal;

pub use mock_git::{MockGit, PULL_REQUEST_URL};
pub use terminal::{pick, type_text, RecordingProgress, ScriptedTerminal};
