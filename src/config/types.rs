//! Core configuration types
//!
//! This module defines the data structures that represent an orbit.yml configuration file.

use serde::{Deserialize, Serialize};

/// Ordered collection of task definitions decoded from a configuration file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TaskRegistry {
    /// Tasks in definition order
    #[serde(default, deserialize_with = "null_as_default")]
    pub tasks: Vec<TaskDefinition>,
}

/// A task definition
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TaskDefinition {
    /// Name of the task, the only lookup key
    #[serde(rename = "use")]
    pub name: String,

    /// Shell invocation used instead of the platform default (e.g. "bash -x")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,

    /// Short description for listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,

    /// Whether this task is private (hidden from listings)
    #[serde(default, deserialize_with = "null_as_default")]
    pub private: bool,

    /// Commands to execute, literal or `run@task1,task2`
    #[serde(default, deserialize_with = "deserialize_run_items")]
    pub run: Vec<String>,
}

impl TaskRegistry {
    /// Build a registry from task definitions
    pub fn new(tasks: Vec<TaskDefinition>) -> Self {
        TaskRegistry { tasks }
    }

    /// Find the first task with the given name
    pub fn lookup(&self, name: &str) -> Option<&TaskDefinition> {
        self.tasks.iter().find(|task| task.name == name)
    }

    /// Iterate over all tasks in definition order
    pub fn iter(&self) -> impl Iterator<Item = &TaskDefinition> {
        self.tasks.iter()
    }

    /// Iterate over tasks that are not private
    pub fn visible(&self) -> impl Iterator<Item = &TaskDefinition> {
        self.tasks.iter().filter(|task| !task.private)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl TaskDefinition {
    /// Create a task with the given name and commands
    pub fn new<S: Into<String>>(name: S, run: Vec<String>) -> Self {
        TaskDefinition {
            name: name.into(),
            shell: None,
            short: None,
            private: false,
            run,
        }
    }

    /// Set the shell override
    pub fn with_shell<S: Into<String>>(mut self, shell: S) -> Self {
        self.shell = Some(shell.into());
        self
    }

    /// Set the short description
    pub fn with_short<S: Into<String>>(mut self, short: S) -> Self {
        self.short = Some(short.into());
        self
    }

    /// Mark the task as private
    pub fn private(mut self) -> Self {
        self.private = true;
        self
    }
}

/// Custom deserializer for run items that handles both single values and arrays
fn deserialize_run_items<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    use serde_yaml::Value;

    let value = Value::deserialize(deserializer)?;

    match value {
        // Array of commands
        Value::Sequence(seq) => seq
            .into_iter()
            .map(|item| scalar_to_string(item).ok_or_else(|| D::Error::custom("run items must be strings")))
            .collect(),
        // Null or not present
        Value::Null => Ok(Vec::new()),
        // Single command
        other => scalar_to_string(other)
            .map(|cmd| vec![cmd])
            .ok_or_else(|| D::Error::custom("run must be a string or array")),
    }
}

/// An explicit null (`private:` with no value) decodes to the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Scalars are accepted in their textual form, so `- 42` runs the command `42`
fn scalar_to_string(value: serde_yaml::Value) -> Option<String> {
    use serde_yaml::Value;

    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
