//! Terminal output
//!
//! Logger setup for progress and diagnostic messages, and the task listing.

pub mod list;

pub use list::*;

use colored::Colorize;
use log::{Level, LevelFilter};
use std::io::Write;

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Silent = 0,
    Quiet = 1,
    Normal = 2,
    Verbose = 3,
}

impl Verbosity {
    /// Most detailed log level shown at this verbosity
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Silent => LevelFilter::Off,
            Verbosity::Quiet => LevelFilter::Error,
            Verbosity::Normal => LevelFilter::Info,
            Verbosity::Verbose => LevelFilter::Debug,
        }
    }
}

/// Install the stderr logger
///
/// `RUST_LOG` overrides the verbosity flags when it is set.
pub fn init_logger(verbosity: Verbosity) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(verbosity.level_filter())
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "{} {}", level_tag(record.level()), record.args()));

    // A logger may already be installed (tests)
    let _ = builder.try_init();
}

fn level_tag(level: Level) -> colored::ColoredString {
    match level {
        Level::Error => "[ERROR]".red().bold(),
        Level::Warn => "[WARN]".yellow().bold(),
        Level::Info => "[INFO]".cyan(),
        Level::Debug => "[DEBUG]".dimmed(),
        Level::Trace => "[TRACE]".dimmed(),
    }
}
