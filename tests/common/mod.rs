//! Common test utilities

#![allow(dead_code)]

use orbit::runner::{HostOs, Invocation, Outcome, ShellEnv, ShellResolver, Spawner};
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory with an orbit.yml file
pub fn create_test_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("orbit.yml");
    fs::write(&config_path, content).unwrap();
    (temp_dir, config_path)
}

/// Create a test config in a temporary directory with a subdirectory
pub fn create_test_config_in_subdir(content: &str) -> (TempDir, PathBuf, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("orbit.yml");
    let sub_dir = temp_dir.path().join("subdir");

    fs::write(&config_path, content).unwrap();
    fs::create_dir(&sub_dir).unwrap();

    (temp_dir, config_path, sub_dir)
}

/// A POSIX resolver with a fixed `SHELL`
pub fn posix_resolver(shell: &str) -> ShellResolver {
    ShellResolver::new(
        HostOs::Posix,
        ShellEnv {
            windows_shell: String::new(),
            posix_shell: shell.to_string(),
        },
    )
}

/// Records every invocation instead of starting processes
///
/// Commands listed in `failing` report exit code 1.
#[derive(Default)]
pub struct RecordingSpawner {
    pub calls: RefCell<Vec<Invocation>>,
    pub failing: Vec<String>,
}

impl RecordingSpawner {
    pub fn failing(cmds: &[&str]) -> Self {
        RecordingSpawner {
            calls: RefCell::new(Vec::new()),
            failing: cmds.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// The command string (last argument) of each invocation
    pub fn commands(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|inv| inv.args.last().cloned().unwrap_or_default())
            .collect()
    }
}

impl Spawner for RecordingSpawner {
    fn spawn(&self, invocation: &Invocation) -> io::Result<Outcome> {
        self.calls.borrow_mut().push(invocation.clone());
        let cmd = invocation.args.last().cloned().unwrap_or_default();
        if self.failing.contains(&cmd) {
            Ok(Outcome::Failure(Some(1)))
        } else {
            Ok(Outcome::Success)
        }
    }
}
