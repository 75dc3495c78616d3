//! Configuration templating
//!
//! A configuration file is rendered into YAML bytes before it is decoded.
//! The runner only depends on the [`Renderer`] trait and calls it once per
//! registry construction.

pub mod interpolate;

pub use interpolate::*;

use crate::error::{TemplateError, TemplateResult};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Turns a configuration source into YAML bytes
pub trait Renderer {
    fn render(&self, source: &Path) -> TemplateResult<Vec<u8>>;
}

/// Reads the configuration file verbatim
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn render(&self, source: &Path) -> TemplateResult<Vec<u8>> {
        read_source(source).map(String::into_bytes)
    }
}

/// Substitutes `${name}` placeholders before decoding
///
/// Values come from env files (later files win) and the built-in `os`
/// value. The process environment is never read, so shell parameters in
/// commands reach the shell untouched.
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    vars: HashMap<String, String>,
}

impl TemplateRenderer {
    /// Create a renderer with only the built-in values
    pub fn new() -> Self {
        let mut vars = HashMap::new();
        vars.insert("os".to_string(), std::env::consts::OS.to_string());
        TemplateRenderer { vars }
    }

    /// Load values from a dotenv file
    pub fn with_env_file(mut self, path: &Path) -> TemplateResult<Self> {
        let env_error = |error: dotenvy::Error| TemplateError::EnvFile {
            path: path.to_path_buf(),
            error: error.to_string(),
        };

        for item in dotenvy::from_path_iter(path).map_err(env_error)? {
            let (key, value) = item.map_err(env_error)?;
            self.vars.insert(key, value);
        }

        Ok(self)
    }

    /// Load values from several dotenv files, in order
    pub fn with_env_files(self, paths: &[PathBuf]) -> TemplateResult<Self> {
        paths
            .iter()
            .try_fold(self, |renderer, path| renderer.with_env_file(path))
    }

    /// Get a value
    pub fn get_var(&self, key: &str) -> Option<&String> {
        self.vars.get(key)
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TemplateRenderer {
    fn render(&self, source: &Path) -> TemplateResult<Vec<u8>> {
        let text = read_source(source)?;
        let found = placeholders(&text);
        let rendered = interpolate(&text, &self.vars);

        if !found.is_empty() {
            log::debug!(
                "rendered {} placeholder(s) in {}",
                found.len(),
                source.display()
            );
        }

        Ok(rendered.into_bytes())
    }
}

fn read_source(source: &Path) -> TemplateResult<String> {
    fs::read_to_string(source).map_err(|source_err| TemplateError::Read {
        path: source.to_path_buf(),
        source: source_err,
    })
}
