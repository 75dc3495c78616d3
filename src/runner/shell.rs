//! Shell selection
//!
//! Builds the program and arguments used to run a literal command, from the
//! task's own `shell` or the platform default.

use crate::config::TaskDefinition;
use std::env;
use std::fmt;

/// Variable naming the command interpreter on Windows
pub const WINDOWS_SHELL_ENV_VAR: &str = "COMSPEC";

/// Variable naming the user's shell on POSIX systems
pub const POSIX_SHELL_ENV_VAR: &str = "SHELL";

/// Operating system family of the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    Windows,
    Posix,
}

impl HostOs {
    /// The family this binary was built for
    pub fn current() -> Self {
        if cfg!(windows) {
            HostOs::Windows
        } else {
            HostOs::Posix
        }
    }
}

/// Shell binaries discovered from the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellEnv {
    /// Value of `COMSPEC`
    pub windows_shell: String,

    /// Value of `SHELL`
    pub posix_shell: String,
}

impl ShellEnv {
    /// Read both variables from the process environment; unset means empty
    pub fn from_env() -> Self {
        ShellEnv {
            windows_shell: env::var(WINDOWS_SHELL_ENV_VAR).unwrap_or_default(),
            posix_shell: env::var(POSIX_SHELL_ENV_VAR).unwrap_or_default(),
        }
    }
}

/// A program and its arguments, ready to spawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<S: Into<String>>(program: S, args: Vec<String>) -> Self {
        Invocation {
            program: program.into(),
            args,
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.program)?;
        for arg in &self.args {
            write!(f, " {:?}", arg)?;
        }
        Ok(())
    }
}

/// Resolves the shell invocation for a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellResolver {
    os: HostOs,
    env: ShellEnv,
}

impl ShellResolver {
    pub fn new(os: HostOs, env: ShellEnv) -> Self {
        ShellResolver { os, env }
    }

    /// Resolver for the running host
    pub fn from_env() -> Self {
        Self::new(HostOs::current(), ShellEnv::from_env())
    }

    pub fn os(&self) -> HostOs {
        self.os
    }

    /// Build the invocation for `command` as run by `task`
    ///
    /// The program is not checked here; an empty shell variable gives an
    /// empty program and fails when spawned.
    pub fn resolve(&self, task: &TaskDefinition, command: &str) -> Invocation {
        if let Some(invocation) = task
            .shell
            .as_deref()
            .and_then(|shell| override_invocation(shell, command))
        {
            return invocation;
        }

        match self.os {
            HostOs::Windows => Invocation::new(
                self.env.windows_shell.clone(),
                vec!["/c".to_string(), command.to_string()],
            ),
            HostOs::Posix => Invocation::new(
                self.env.posix_shell.clone(),
                vec!["-c".to_string(), command.to_string()],
            ),
        }
    }
}

impl Default for ShellResolver {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Split a shell override into program and leading arguments, then append the
/// command as one argument. `None` when the override has no fields.
fn override_invocation(shell: &str, command: &str) -> Option<Invocation> {
    let mut fields = shell.split_whitespace();
    let program = fields.next()?;

    let mut args: Vec<String> = fields.map(str::to_string).collect();
    args.push(command.to_string());

    Some(Invocation::new(program, args))
}
