use std::io;

use crate::error::FetchError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config IO error: {0}")]
    Io(#[from] io::Error),
    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("missing home directory for config paths")]
    MissingHome,
}

impl From<ConfigError> for FetchError {
    fn from(err: ConfigError) -> Self {
        FetchError::ConfigError(err.to_string())
    }
}
