//! Orbit - a YAML-based task runner
//!
//! Tasks are named lists of shell commands declared in an orbit.yml file.
//! A command written as `run@build,test` runs other tasks in its place, which
//! is how tasks are composed.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod template;
pub mod ui;

// Re-export commonly used types
pub use error::{OrbitError, Result};

/// Current version of Orbit
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
