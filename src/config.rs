#[path = "config/error.rs"]
mod error;

#[path = "config/load.rs"]
mod load;

#[path = "config/paths.rs"]
mod paths;

#[path = "config/types.rs"]
mod types;

pub use error::ConfigError;
pub use load::{load_config, LoadedConfig};
pub use paths::default_config_file;
pub use types::{LoggingConfig, RunConfig};
