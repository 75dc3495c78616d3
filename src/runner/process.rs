//! Process spawning
//!
//! The executor hands every resolved invocation to a [`Spawner`]. The real
//! implementation runs a child process attached to the caller's terminal.

use crate::runner::Invocation;
use std::io;
use std::process::{Command as StdCommand, Stdio};

/// How a finished child process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Exit status zero
    Success,

    /// Non-zero exit, `None` when no code is available (killed by a signal)
    Failure(Option<i32>),
}

/// Runs one invocation to completion
pub trait Spawner {
    /// Block until the process exits. `Err` means it could not be started.
    fn spawn(&self, invocation: &Invocation) -> io::Result<Outcome>;
}

/// Spawns real child processes that inherit stdin, stdout, stderr and the
/// environment of the current process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessSpawner;

impl Spawner for ProcessSpawner {
    fn spawn(&self, invocation: &Invocation) -> io::Result<Outcome> {
        let mut command = StdCommand::new(&invocation.program);
        command.args(&invocation.args);

        // Set up stdio
        command.stdin(Stdio::inherit());
        command.stdout(Stdio::inherit());
        command.stderr(Stdio::inherit());

        let status = command.status()?;

        if status.success() {
            Ok(Outcome::Success)
        } else {
            Ok(Outcome::Failure(status.code()))
        }
    }
}
