//! Main CLI application

use crate::config::{find_config_file, load_config, validate_references, TaskRegistry};
use crate::error::{is_resolution_error, OrbitError};
use crate::runner::{ExecutionContext, Executor, ProcessSpawner};
use crate::template::{Renderer, TemplateRenderer};
use crate::ui::{init_logger, print_task_list, Verbosity};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use clap_complete::Shell;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// CLI application
pub struct App {
    /// Decoded tasks
    registry: TaskRegistry,
    /// Config file path
    config_path: PathBuf,
}

impl App {
    /// Render and decode a configuration file
    pub fn load(config_path: PathBuf, renderer: &dyn Renderer) -> Result<Self, OrbitError> {
        let registry = load_config(&config_path, renderer)?;
        Ok(App {
            registry,
            config_path,
        })
    }

    pub fn registry(&self) -> &TaskRegistry {
        &self.registry
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Run tasks as child processes of this one
    pub fn run_tasks(&self, names: &[String], detect_cycles: bool) -> Result<(), OrbitError> {
        let ctx = ExecutionContext::new(self.config_path.clone()).with_cycle_detection(detect_cycles);
        let spawner = ProcessSpawner;

        Executor::new(&self.registry, &ctx, &spawner)
            .run(names)
            .map_err(|err| {
                if is_resolution_error(&err) {
                    log::info!("run `orbit list` to see the available tasks");
                }
                err
            })?;
        Ok(())
    }

    /// Print the available tasks
    pub fn list(&self) -> Result<(), OrbitError> {
        print_task_list(&self.registry, &self.config_path)?;
        Ok(())
    }

    /// Check every task reference without running anything
    pub fn check(&self) -> Result<(), OrbitError> {
        validate_references(&self.registry, &self.config_path)?;
        log::info!(
            "all task references in {} resolve",
            self.config_path.display()
        );
        Ok(())
    }
}

/// Build the clap command
pub fn build_cli() -> Command {
    Command::new("orbit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A YAML-based task runner with composable tasks")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Path to orbit.yml config file")
                .global(true),
        )
        .arg(
            Arg::new("env")
                .short('e')
                .long("env")
                .value_name("ENV_FILE")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Append)
                .help("Load template values from a .env file (repeatable)")
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print command output and errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("run")
                .about("Run one or more tasks; lists tasks when none is given")
                .arg(
                    Arg::new("tasks")
                        .value_name("TASK")
                        .num_args(0..)
                        .help("Tasks to run, in order"),
                )
                .arg(
                    Arg::new("allow-recursion")
                        .long("allow-recursion")
                        .help("Do not stop tasks that re-enter themselves through run@")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("list").about("List available tasks"))
        .subcommand(Command::new("check").about("Check that every run@ reference resolves"))
        .subcommand(
            Command::new("completion")
                .about("Print a shell completion script")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .required(true)
                        .value_parser(value_parser!(Shell)),
                ),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Locate and load the configuration named by the global flags
fn load_app(matches: &ArgMatches) -> Result<App, OrbitError> {
    let config_path = match matches.get_one::<PathBuf>("file") {
        Some(path) => path.clone(),
        None => find_config_file()?,
    };

    let env_files: Vec<PathBuf> = matches
        .get_many::<PathBuf>("env")
        .map(|files| files.cloned().collect())
        .unwrap_or_default();

    let renderer = TemplateRenderer::new().with_env_files(&env_files)?;
    App::load(config_path, &renderer)
}

/// Run the CLI application with the process arguments
pub fn run() -> Result<(), OrbitError> {
    run_from(std::env::args_os())
}

/// Run the CLI application with provided arguments
pub fn run_from<I, T>(args: I) -> Result<(), OrbitError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_cli().get_matches_from(args);

    init_logger(get_verbosity(&matches));

    match matches.subcommand() {
        Some(("completion", sub)) => {
            if let Some(shell) = sub.get_one::<Shell>("shell").copied() {
                clap_complete::generate(shell, &mut build_cli(), "orbit", &mut io::stdout());
            }
            Ok(())
        }
        Some(("run", sub)) => {
            let app = load_app(&matches)?;
            let tasks: Vec<String> = sub
                .get_many::<String>("tasks")
                .map(|names| names.cloned().collect())
                .unwrap_or_default();

            if tasks.is_empty() {
                return app.list();
            }

            app.run_tasks(&tasks, !sub.get_flag("allow-recursion"))
        }
        Some(("list", _)) => load_app(&matches)?.list(),
        Some(("check", _)) => load_app(&matches)?.check(),
        _ => {
            build_cli().print_help()?;
            Ok(())
        }
    }
}
