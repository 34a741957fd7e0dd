//! Terminal interaction used by the menu and review screens
//!
//! The binary implements this with `dialoguer`; tests replay scripted
//! answers. Keeping prompts behind a trait means no component reaches for a
//! global console.

use crate::error::Result;
use crate::review::Review;

/// Prompting and display capability handed to the interactive flow
pub trait Terminal {
    /// Clear the screen before a new menu or prompt
    fn clear(&self);

    /// Let the user pick one of `items`; returns its index
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize>;

    /// Free-text input; empty answers are allowed
    fn input(&self, prompt: &str) -> Result<String>;

    /// Show a non-fatal error and carry on
    fn error(&self, message: &str);

    /// Show the configuration summary and equivalent command line
    fn show_review(&self, review: &Review);
}
