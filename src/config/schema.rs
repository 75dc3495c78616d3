//! Configuration validation
//!
//! Pre-flight checks over the whole task reference tree. Running tasks never
//! calls into this module: references are resolved lazily at execution time,
//! and this pass exists for callers that want every `run@` target checked up
//! front.

use crate::config::types::{TaskDefinition, TaskRegistry};
use crate::error::{ConfigError, ConfigResult};
use crate::runner::{classify, Command};
use std::collections::HashSet;
use std::path::Path;

/// Validate every task reference in the registry
///
/// Fails on the first reference to an undefined task and on any cycle of
/// references.
pub fn validate_references(registry: &TaskRegistry, config_path: &Path) -> ConfigResult<()> {
    let mut visited = HashSet::new();

    for task in registry.iter() {
        let mut stack = Vec::new();
        check_task(registry, config_path, task, &mut visited, &mut stack)?;
    }

    Ok(())
}

/// Names referenced by a task's commands, in order
pub fn task_references(task: &TaskDefinition) -> Vec<String> {
    task.run
        .iter()
        .filter_map(|cmd| match classify(cmd) {
            Command::TaskReference(names) => Some(names),
            Command::Literal(_) => None,
        })
        .flatten()
        .collect()
}

/// Recursively check one task and everything it references
fn check_task<'a>(
    registry: &'a TaskRegistry,
    config_path: &Path,
    task: &'a TaskDefinition,
    visited: &mut HashSet<&'a str>,
    stack: &mut Vec<&'a str>,
) -> ConfigResult<()> {
    // Check if we've found a cycle
    if stack.contains(&task.name.as_str()) {
        let mut chain: Vec<&str> = stack.clone();
        chain.push(&task.name);
        return Err(ConfigError::CircularReference(chain.join(" -> ")));
    }

    // Skip if already fully processed
    if visited.contains(task.name.as_str()) {
        return Ok(());
    }

    stack.push(&task.name);

    for reference in task_references(task) {
        let target = registry
            .lookup(&reference)
            .ok_or_else(|| ConfigError::UnknownReference {
                task: task.name.clone(),
                reference: reference.clone(),
                path: config_path.to_path_buf(),
            })?;

        check_task(registry, config_path, target, visited, stack)?;
    }

    stack.pop();
    visited.insert(&task.name);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(name: &str, run: &[&str]) -> TaskDefinition {
        TaskDefinition::new(name, run.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_task_references_in_order() {
        let t = task("all", &["echo start", "run@build,test", "run@deploy"]);
        assert_eq!(task_references(&t), vec!["build", "test", "deploy"]);
    }

    #[test]
    fn test_validate_valid_config() {
        let registry = TaskRegistry::new(vec![
            task("all", &["run@build,test"]),
            task("build", &["cargo build"]),
            task("test", &["run@build", "cargo test"]),
        ]);

        assert!(validate_references(&registry, Path::new("orbit.yml")).is_ok());
    }

    #[test]
    fn test_detect_unknown_reference() {
        let registry = TaskRegistry::new(vec![
            task("all", &["run@build"]),
            task("build", &["run@compile"]),
        ]);

        let result = validate_references(&registry, Path::new("orbit.yml"));
        match result {
            Err(ConfigError::UnknownReference { task, reference, .. }) => {
                assert_eq!(task, "build");
                assert_eq!(reference, "compile");
            }
            other => panic!("expected UnknownReference, got {:?}", other),
        }
    }

    #[test]
    fn test_untrimmed_reference_is_unknown() {
        let registry = TaskRegistry::new(vec![
            task("all", &["run@build, test"]),
            task("build", &[]),
            task("test", &[]),
        ]);

        let result = validate_references(&registry, Path::new("orbit.yml"));
        assert!(matches!(
            result,
            Err(ConfigError::UnknownReference { reference, .. }) if reference == " test"
        ));
    }

    #[test]
    fn test_detect_circular_reference() {
        let registry = TaskRegistry::new(vec![
            task("a", &["run@b"]),
            task("b", &["echo b", "run@a"]),
        ]);

        let result = validate_references(&registry, Path::new("orbit.yml"));
        match result {
            Err(ConfigError::CircularReference(chain)) => assert_eq!(chain, "a -> b -> a"),
            other => panic!("expected CircularReference, got {:?}", other),
        }
    }

    #[test]
    fn test_detect_self_reference() {
        let registry = TaskRegistry::new(vec![task("loop", &["run@loop"])]);

        let result = validate_references(&registry, Path::new("orbit.yml"));
        assert!(matches!(result, Err(ConfigError::CircularReference(_))));
    }

    #[test]
    fn test_shared_dependency_is_not_a_cycle() {
        let registry = TaskRegistry::new(vec![
            task("all", &["run@lint,test"]),
            task("lint", &["run@setup"]),
            task("test", &["run@setup"]),
            task("setup", &["echo setup"]),
        ]);

        assert!(validate_references(&registry, Path::new("orbit.yml")).is_ok());
    }
}
