//! Task listing

use crate::config::TaskRegistry;
use std::io::{self, Write};
use std::path::Path;

/// Render the configuration path and every non-private task
///
/// Task names are padded to a common width so descriptions line up.
pub fn render_task_list(registry: &TaskRegistry, config_path: &Path) -> String {
    let mut out = String::new();

    out.push_str("Configuration file:\n");
    out.push_str(&format!("  {}\n", config_path.display()));
    out.push_str("\nAvailable tasks:\n");

    let width = registry
        .visible()
        .map(|task| task.name.chars().count())
        .max()
        .unwrap_or(0);

    for task in registry.visible() {
        let short = task.short.as_deref().unwrap_or("");
        let line = format!("  {:<width$} {}", task.name, short, width = width);
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

/// Print the task listing to stdout
pub fn print_task_list(registry: &TaskRegistry, config_path: &Path) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(render_task_list(registry, config_path).as_bytes())?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TaskDefinition;

    #[test]
    fn test_render_aligned_columns() {
        let registry = TaskRegistry::new(vec![
            TaskDefinition::new("build", vec![]).with_short("Build the project"),
            TaskDefinition::new("secret", vec![]).private(),
            TaskDefinition::new("up", vec![]).with_short("Start services"),
            TaskDefinition::new("lint", vec![]),
        ]);

        let output = render_task_list(&registry, Path::new("orbit.yml"));

        assert_eq!(
            output,
            "Configuration file:\n  orbit.yml\n\nAvailable tasks:\n  build Build the project\n  up    Start services\n  lint\n"
        );
    }

    #[test]
    fn test_render_no_visible_tasks() {
        let registry = TaskRegistry::new(vec![TaskDefinition::new("hidden", vec![]).private()]);

        let output = render_task_list(&registry, Path::new("/tmp/orbit.yml"));

        assert_eq!(
            output,
            "Configuration file:\n  /tmp/orbit.yml\n\nAvailable tasks:\n"
        );
    }
}
