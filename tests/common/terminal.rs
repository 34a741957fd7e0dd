//! Scripted terminal and recording progress for testing
//!
//! These are test utilities - not every helper is used by every test binary.

#![allow(dead_code)]

use git_prep::error::{Error, Result};
use git_prep::execute::{ProgressCallback, PullRequestDetails, Step};
use git_prep::review::Review;
use git_prep::terminal::Terminal;
use std::collections::VecDeque;
use std::sync::Mutex;

/// One scripted answer
#[derive(Debug, Clone)]
pub enum Answer {
    /// Pick the first item starting with this text
    Pick(String),
    /// Type this text
    Type(String),
}

/// Pick the item starting with `label`
pub fn pick(label: &str) -> Answer {
    Answer::Pick(label.to_string())
}

/// Type `text` at an input prompt
pub fn type_text(text: &str) -> Answer {
    Answer::Type(text.to_string())
}

/// A prompt the terminal was shown
#[derive(Debug, Clone)]
pub struct Shown {
    pub prompt: String,
    pub items: Vec<String>,
}

/// Terminal that replays answers and records what it was asked to show
///
/// Panics when prompted with no answer left, so a test that expects no
/// interaction fails loudly.
pub struct ScriptedTerminal {
    answers: Mutex<VecDeque<Answer>>,
    shown: Mutex<Vec<Shown>>,
    errors: Mutex<Vec<String>>,
    reviews: Mutex<Vec<Review>>,
    events: Mutex<Vec<String>>,
}

impl ScriptedTerminal {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
            shown: Mutex::new(Vec::new()),
            errors: Mutex::new(Vec::new()),
            reviews: Mutex::new(Vec::new()),
            events: Mutex::new(Vec::new()),
        }
    }

    /// Terminal that must never be prompted
    pub fn silent() -> Self {
        Self::new(Vec::new())
    }

    pub fn shown(&self) -> Vec<Shown> {
        self.shown.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn reviews(&self) -> Vec<Review> {
        self.reviews.lock().unwrap().clone()
    }

    /// Everything that reached the screen, in order: `clear`,
    /// `select:<prompt>`, `input:<prompt>`, `error:<message>`, `review`
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }

    pub fn remaining(&self) -> usize {
        self.answers.lock().unwrap().len()
    }

    fn next(&self, prompt: &str) -> Answer {
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected prompt: {prompt}"))
    }
}

impl Terminal for ScriptedTerminal {
    fn clear(&self) {
        self.record("clear".to_string());
    }

    fn select(&self, prompt: &str, items: &[String], _default: usize) -> Result<usize> {
        self.record(format!("select:{prompt}"));
        self.shown.lock().unwrap().push(Shown {
            prompt: prompt.to_string(),
            items: items.to_vec(),
        });
        match self.next(prompt) {
            Answer::Pick(label) => Ok(items
                .iter()
                .position(|item| item.starts_with(&label))
                .unwrap_or_else(|| panic!("no item starting with {label:?} in {items:?}"))),
            Answer::Type(text) => panic!("expected a selection for {prompt}, script has {text:?}"),
        }
    }

    fn input(&self, prompt: &str) -> Result<String> {
        self.record(format!("input:{prompt}"));
        self.shown.lock().unwrap().push(Shown {
            prompt: prompt.to_string(),
            items: Vec::new(),
        });
        match self.next(prompt) {
            Answer::Type(text) => Ok(text),
            Answer::Pick(label) => panic!("expected text for {prompt}, script picks {label:?}"),
        }
    }

    fn error(&self, message: &str) {
        self.record(format!("error:{message}"));
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn show_review(&self, review: &Review) {
        self.record("review".to_string());
        self.reviews.lock().unwrap().push(review.clone());
    }
}

/// Progress callback that records every event
#[derive(Default)]
pub struct RecordingProgress {
    started: Mutex<Vec<Step>>,
    finished: Mutex<Vec<Step>>,
    errors: Mutex<Vec<String>>,
    completed: Mutex<Option<PullRequestDetails>>,
}

impl RecordingProgress {
    pub fn started(&self) -> Vec<Step> {
        self.started.lock().unwrap().clone()
    }

    pub fn finished(&self) -> Vec<Step> {
        self.finished.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn completed(&self) -> Option<PullRequestDetails> {
        self.completed.lock().unwrap().clone()
    }
}

impl ProgressCallback for RecordingProgress {
    fn on_step(&self, step: Step) {
        self.started.lock().unwrap().push(step);
    }

    fn on_step_done(&self, step: Step) {
        self.finished.lock().unwrap().push(step);
    }

    fn on_error(&self, error: &Error) {
        self.errors.lock().unwrap().push(error.to_string());
    }

    fn on_complete(&self, details: &PullRequestDetails) {
        *self.completed.lock().unwrap() = Some(details.clone());
    }
}
