//! Environment promotion rules
//!
//! Branches named like `dev2` or `uat1` denote deployment stages. A change
//! may only be proposed into a later stage: `sbx` -> `dev` -> `uat`.

use regex::Regex;
use std::sync::LazyLock;

/// Stage prefixes in promotion order
pub const ENVIRONMENT_ORDER: [&str; 3] = ["sbx", "dev", "uat"];

static ENV_BRANCH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z]+)(\d+)").expect("hardcoded regex is valid"));

/// An environment branch split into stage prefix and number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Environment<'a> {
    /// Lowercase stage prefix, e.g. `dev`
    pub prefix: &'a str,
    /// Digits following the prefix, e.g. `2`
    pub number: &'a str,
}

impl Environment<'_> {
    /// Position of this stage in [`ENVIRONMENT_ORDER`], if it is a known stage
    pub fn stage(&self) -> Option<usize> {
        ENVIRONMENT_ORDER.iter().position(|p| *p == self.prefix)
    }
}

/// Parse the leading `<letters><digits>` of a branch name
pub fn environment_of(branch: &str) -> Option<Environment<'_>> {
    let caps = ENV_BRANCH.captures(branch)?;
    Some(Environment {
        prefix: caps.get(1)?.as_str(),
        number: caps.get(2)?.as_str(),
    })
}

/// Whether `target` is an allowed promotion target for `source`
///
/// Non-environment branches and unknown stages are unconstrained. Between
/// two known stages only strictly forward moves are valid.
pub fn is_valid_target(source: &str, target: &str) -> bool {
    let (Some(source_env), Some(target_env)) = (environment_of(source), environment_of(target))
    else {
        return true;
    };

    match (source_env.stage(), target_env.stage()) {
        (Some(source_idx), Some(target_idx)) => target_idx > source_idx,
        _ => true,
    }
}
