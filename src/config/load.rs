use std::fs;
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use super::paths::default_config_file;
use super::types::RunConfig;

#[derive(Debug)]
pub struct LoadedConfig {
    pub config: RunConfig,
    pub path: PathBuf,
    pub config_exists: bool,
}

/// Loads the config from `path_override` or the default location.
///
/// A missing file yields the defaults.
pub fn load_config(path_override: Option<PathBuf>) -> Result<LoadedConfig, ConfigError> {
    let path = match path_override {
        Some(path) => path,
        None => default_config_file()?,
    };
    let read = read_config(&path)?;
    log::debug!(
        "config {} ({})",
        path.display(),
        if read.exists { "loaded" } else { "defaults" }
    );
    Ok(LoadedConfig {
        config: read.config,
        path,
        config_exists: read.exists,
    })
}

fn read_config(path: &Path) -> Result<ConfigRead, ConfigError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(ConfigRead {
            config: toml::from_str(&contents)?,
            exists: true,
        }),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(ConfigRead {
            config: RunConfig::default(),
            exists: false,
        }),
        Err(err) => Err(ConfigError::Io(err)),
    }
}

struct ConfigRead {
    config: RunConfig,
    exists: bool,
}
