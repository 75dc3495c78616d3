//! Task execution
//!
//! The executor resolves task names against the registry and runs their
//! commands top to bottom, recursing into `run@` references. The first error
//! at any depth stops everything and is returned as is.

use crate::config::{TaskDefinition, TaskRegistry};
use crate::error::{ExecutionError, ExecutionResult};
use crate::runner::{classify, Command, ExecutionContext, Outcome, Spawner};

/// Runs tasks from a registry
pub struct Executor<'a> {
    registry: &'a TaskRegistry,
    ctx: &'a ExecutionContext,
    spawner: &'a dyn Spawner,
}

impl<'a> Executor<'a> {
    pub fn new(
        registry: &'a TaskRegistry,
        ctx: &'a ExecutionContext,
        spawner: &'a dyn Spawner,
    ) -> Self {
        Executor {
            registry,
            ctx,
            spawner,
        }
    }

    /// Run the given tasks in order
    ///
    /// Every name is resolved before the first command runs. Names reached
    /// through `run@` are resolved only when that command is reached.
    pub fn run<S: AsRef<str>>(&self, names: &[S]) -> ExecutionResult<()> {
        let mut stack = Vec::new();
        self.run_names(names, &mut stack)
    }

    fn run_names<S: AsRef<str>>(
        &self,
        names: &[S],
        stack: &mut Vec<&'a str>,
    ) -> ExecutionResult<()> {
        let tasks = self.resolve(names)?;

        for task in tasks {
            self.run_task(task, stack)?;
        }

        Ok(())
    }

    /// Look up every name, failing on the first unknown one
    fn resolve<S: AsRef<str>>(&self, names: &[S]) -> ExecutionResult<Vec<&'a TaskDefinition>> {
        names
            .iter()
            .map(|name| {
                let name: &str = name.as_ref();
                self.registry
                    .lookup(name)
                    .ok_or_else(|| ExecutionError::TaskNotFound {
                        name: name.to_string(),
                        config: self.ctx.config_path.clone(),
                    })
            })
            .collect()
    }

    fn run_task(
        &self,
        task: &'a TaskDefinition,
        stack: &mut Vec<&'a str>,
    ) -> ExecutionResult<()> {
        if self.ctx.detect_cycles && stack.contains(&task.name.as_str()) {
            let mut chain = stack.clone();
            chain.push(&task.name);
            return Err(ExecutionError::RecursiveTask(chain.join(" -> ")));
        }

        match &task.short {
            Some(short) if !short.is_empty() => log::info!("running task {}: {}", task.name, short),
            _ => log::info!("running task {}", task.name),
        }

        stack.push(&task.name);
        let result = task
            .run
            .iter()
            .try_for_each(|cmd| self.run_command(task, cmd, stack));
        stack.pop();

        result
    }

    fn run_command(
        &self,
        task: &'a TaskDefinition,
        cmd: &str,
        stack: &mut Vec<&'a str>,
    ) -> ExecutionResult<()> {
        match classify(cmd) {
            Command::TaskReference(names) => {
                log::debug!("task {} calls {}", task.name, names.join(", "));
                self.run_names(&names, stack)
            }
            Command::Literal(literal) => self.execute(task, &literal),
        }
    }

    /// Spawn a literal command through the task's shell and wait for it
    fn execute(&self, task: &TaskDefinition, cmd: &str) -> ExecutionResult<()> {
        let invocation = self.ctx.shell.resolve(task, cmd);

        log::info!("executing command {} from task {}", invocation, task.name);

        let outcome = self
            .spawner
            .spawn(&invocation)
            .map_err(|source| ExecutionError::Spawn {
                task: task.name.clone(),
                program: invocation.program.clone(),
                source,
            })?;

        match outcome {
            Outcome::Success => Ok(()),
            Outcome::Failure(code) => Err(ExecutionError::CommandFailed {
                task: task.name.clone(),
                command: cmd.to_string(),
                code,
            }),
        }
    }
}
