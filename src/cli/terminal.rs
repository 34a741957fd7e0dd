//! `dialoguer`-backed prompts

use crate::cli::style::Stylize;
use anstream::{eprintln, println};
use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use git_prep::error::Result;
use git_prep::review::Review;
use git_prep::terminal::Terminal;
use tracing::debug;

/// Terminal prompts on stdout/stderr
#[derive(Default)]
pub struct DialoguerTerminal {
    theme: ColorfulTheme,
}

impl DialoguerTerminal {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Terminal for DialoguerTerminal {
    fn clear(&self) {
        if let Err(e) = Term::stdout().clear_screen() {
            debug!("could not clear screen: {e}");
        }
    }

    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        let picked = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()?;
        Ok(picked)
    }

    fn input(&self, prompt: &str) -> Result<String> {
        let value = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(value)
    }

    fn error(&self, message: &str) {
        eprintln!("{}", message.error());
    }

    fn show_review(&self, review: &Review) {
        println!("{}", "Current configuration:".emphasis());
        for (field, value) in &review.entries {
            println!("{}: {}", field.key().accent(), value.success());
        }
        println!();
        println!("{}", "Non-interactive command:".warn().for_stdout());
        println!("{}", review.command.success());
    }
}
