//! Execution context for task running
//!
//! The context holds everything the executor reads but never changes during
//! a run: where the configuration came from and how shells are resolved.

use crate::runner::ShellResolver;
use std::path::{Path, PathBuf};

/// Read-only state shared by every (recursive) task run
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    /// Configuration file path, named in resolution errors
    pub config_path: PathBuf,

    /// Shell selection for literal commands
    pub shell: ShellResolver,

    /// Fail when a task re-enters itself through `run@` references
    pub detect_cycles: bool,
}

impl ExecutionContext {
    /// Create a context for a configuration file, with the host's shells
    pub fn new<P: Into<PathBuf>>(config_path: P) -> Self {
        ExecutionContext {
            config_path: config_path.into(),
            shell: ShellResolver::from_env(),
            detect_cycles: true,
        }
    }

    /// Set the shell resolver
    pub fn with_shell(mut self, shell: ShellResolver) -> Self {
        self.shell = shell;
        self
    }

    /// Enable or disable the re-entry check
    pub fn with_cycle_detection(mut self, enabled: bool) -> Self {
        self.detect_cycles = enabled;
        self
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}
