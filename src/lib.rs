//! git-prep - commit, push and pull request preparation for git
//!
//! Collects a source branch, target branch, commit message and PR text,
//! either through an interactive menu or from flags, then stages, commits
//! and pushes with `git` and prints the URL for opening the pull request.
//!
//! The binary lives in `main.rs`; everything it drives is in this library so
//! that the session can be exercised with a mock [`git::GitRunner`] and a
//! scripted [`terminal::Terminal`].

pub mod config;
pub mod env_order;
pub mod error;
pub mod execute;
pub mod git;
pub mod menu;
pub mod review;
pub mod session;
pub mod terminal;
