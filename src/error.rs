//! Error types for Orbit

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Orbit operations
pub type Result<T> = std::result::Result<T, OrbitError>;

/// Main error type for Orbit
#[derive(Error, Debug)]
pub enum OrbitError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Task execution errors
    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    /// Template rendering errors
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Configuration discovery, decoding and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to find config file (searched: {0})")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("configuration file {} is not a valid YAML file. Details:\n{source}", .path.display())]
    InvalidYaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("task '{task}' references task '{reference}' which does not exist in configuration file {}", .path.display())]
    UnknownReference {
        task: String,
        reference: String,
        path: PathBuf,
    },

    #[error("Circular task reference detected: {0}")]
    CircularReference(String),
}

/// Task execution errors
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("task {name} does not exist in configuration file {}", .config.display())]
    TaskNotFound { name: String, config: PathBuf },

    #[error("failed to start {program:?} for task '{task}': {source}")]
    Spawn {
        task: String,
        program: String,
        source: io::Error,
    },

    #[error("command {command:?} from task '{task}' failed with exit code {}", display_code(.code))]
    CommandFailed {
        task: String,
        command: String,
        code: Option<i32>,
    },

    #[error("task re-entered itself: {0}")]
    RecursiveTask(String),
}

/// Template rendering errors
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Failed to read template '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to load env file '{}': {error}", .path.display())]
    EnvFile { path: PathBuf, error: String },
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for execution operations
pub type ExecutionResult<T> = std::result::Result<T, ExecutionError>;

/// Specialized result type for template operations
pub type TemplateResult<T> = std::result::Result<T, TemplateError>;

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "none (terminated by signal)".to_string(),
    }
}

/// Helper function to determine if an error is a resolution failure
/// (an unknown task name) rather than a failed command
pub fn is_resolution_error(err: &ExecutionError) -> bool {
    matches!(err, ExecutionError::TaskNotFound { .. })
}
