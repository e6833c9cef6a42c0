use std::path::PathBuf;

use super::error::ConfigError;

/// `~/.config/fetchpool/config.toml`
pub fn default_config_file() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::MissingHome)?;
    Ok(home.join(".config").join("fetchpool").join("config.toml"))
}
