//! Configuration file parsing and discovery

use crate::config::types::TaskRegistry;
use crate::error::{ConfigError, ConfigResult, OrbitError};
use crate::template::Renderer;
use std::env;
use std::path::{Path, PathBuf};

/// Default configuration file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["orbit.yml", "orbit.yaml"];

/// Find the configuration file by searching current and parent directories
pub fn find_config_file() -> ConfigResult<PathBuf> {
    find_config_file_from(env::current_dir().map_err(|e| {
        ConfigError::Invalid(format!("Failed to get current directory: {}", e))
    })?)
}

/// Find the configuration file starting from a specific directory
pub fn find_config_file_from(start_dir: PathBuf) -> ConfigResult<PathBuf> {
    let mut current_dir = start_dir;
    let mut searched_paths = Vec::new();

    loop {
        for file_name in CONFIG_FILE_NAMES {
            let config_path = current_dir.join(file_name);
            searched_paths.push(config_path.display().to_string());

            if config_path.is_file() {
                return Ok(config_path);
            }
        }

        // Try parent directory
        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => return Err(ConfigError::NotFound(searched_paths.join(", "))),
        }
    }
}

/// Decode already-rendered configuration text
///
/// `config_path` only names the source in error messages.
pub fn parse_config(yaml: &[u8], config_path: &Path) -> ConfigResult<TaskRegistry> {
    serde_yaml::from_slice(yaml).map_err(|source| ConfigError::InvalidYaml {
        path: config_path.to_path_buf(),
        source,
    })
}

/// Render a configuration file once and decode it into a registry
pub fn load_config(path: &Path, renderer: &dyn Renderer) -> Result<TaskRegistry, OrbitError> {
    let data = renderer.render(path)?;
    let registry = parse_config(&data, path)?;

    log::debug!(
        "loaded {} task(s) from configuration file {}",
        registry.len(),
        path.display()
    );

    Ok(registry)
}
