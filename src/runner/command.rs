//! Command classification
//!
//! A command is either run through a shell or, when written as
//! `run@task1,task2`, replaced by running the named tasks.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TASK_REFERENCE_RE: Regex = Regex::new(r"^run@(.+)$").unwrap();
}

/// A classified command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Shell command, passed through unchanged
    Literal(String),

    /// Tasks to run in place of this command
    TaskReference(Vec<String>),
}

/// Classify a command string
///
/// Names are split on `,` and not trimmed, so `run@a, b` refers to `" b"`.
pub fn classify(command: &str) -> Command {
    match TASK_REFERENCE_RE.captures(command) {
        Some(caps) => Command::TaskReference(caps[1].split(',').map(str::to_string).collect()),
        None => Command::Literal(command.to_string()),
    }
}
