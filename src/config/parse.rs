//! Configuration file parsing and discovery

use crate::config::types::Config;
use crate::error::{ConfigError, ConfigResult, GitaskError};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["gitask.yml", "gitask.yaml"];

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

            if config_path.exists() && config_path.is_file() {
                return Ok(config_path);
            }
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => {
                return Err(ConfigError::NotFound(searched_paths.join(", ")));
            }
        }
    }
}

/// Parse a configuration file from a path
pub fn parse_config_file(path: &Path) -> Result<Config, GitaskError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ConfigError::Invalid(format!("Failed to read file: {}", e)))?;

    parse_config(&contents)
}

/// Parse configuration from a string
pub fn parse_config(yaml: &str) -> Result<Config, GitaskError> {
    let config: Config = serde_yaml::from_str(yaml)?;
    Ok(config)
}

/// Parse configuration with automatic file discovery
pub fn parse_config_auto() -> Result<(Config, PathBuf), GitaskError> {
    let config_path = find_config_file()?;
    let config = parse_config_file(&config_path)?;
    Ok((config, config_path))
}

/// Validate a parsed configuration
///
/// Namespace and task-name syntax is enforced at registration time as well;
/// checking here lets a bad file fail before any task runs.
pub fn validate_config(config: &Config) -> ConfigResult<()> {
    for (namespace, task) in &config.tasks {
        if !is_valid_identifier(namespace) {
            return Err(ConfigError::InvalidNamespace(namespace.clone()));
        }
        if !is_valid_identifier(&task.name) {
            return Err(ConfigError::InvalidTaskName(task.name.clone()));
        }
        if task.working_directory.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "Task '{}:{}' has an empty working-directory",
                namespace, task.name
            )));
        }
    }

    Ok(())
}

fn is_valid_identifier(s: &str) -> bool {
    !s.is_empty() && !s.contains(':') && !s.contains(char::is_whitespace)
}
