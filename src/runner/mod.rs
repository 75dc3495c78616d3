//! Task execution engine
//!
//! This module classifies commands, resolves the shell used to run them,
//! spawns child processes and drives tasks, including `run@` references.

pub mod command;
pub mod context;
pub mod process;
pub mod shell;
pub mod task;

// Re-export main types
pub use command::*;
pub use context::*;
pub use process::*;
pub use shell::*;
pub use task::*;
