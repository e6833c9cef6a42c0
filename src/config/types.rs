use serde::{Deserialize, Serialize};

use crate::{
    error::FetchError,
    fetch::{FetcherBuilder, DEFAULT_USER_AGENT},
    limit::ConcurrencyLimit,
};

const DEFAULT_MAX_CONCURRENCY: i64 = 4;
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_LOG_ROTATE_SIZE: u64 = 10 * 1024 * 1024;
const DEFAULT_LOG_ROTATE_KEEP: usize = 5;

/// Settings for one batch run.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RunConfig {
    /// Signed so that zero and negative values in a file reach validation
    /// instead of failing as a parse error.
    pub max_concurrency: i64,
    pub timeout_seconds: Option<u64>,
    pub user_agent: String,
    pub error_for_status: bool,
    pub logging: LoggingConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            timeout_seconds: Some(DEFAULT_TIMEOUT_SECONDS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            error_for_status: false,
            logging: LoggingConfig::default(),
        }
    }
}

impl RunConfig {
    pub fn limit(&self) -> Result<ConcurrencyLimit, FetchError> {
        ConcurrencyLimit::try_from(self.max_concurrency)
    }

    /// Fetcher builder preloaded with these settings.
    pub fn fetcher_builder(&self) -> FetcherBuilder {
        let builder = FetcherBuilder::new()
            .user_agent(self.user_agent.clone())
            .error_for_status(self.error_for_status);
        match self.timeout_seconds {
            Some(sec) => builder.timeout_seconds(sec),
            None => builder,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub path: Option<String>,
    pub rotate_size: u64,
    pub rotate_keep: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            path: None,
            rotate_size: DEFAULT_LOG_ROTATE_SIZE,
            rotate_keep: DEFAULT_LOG_ROTATE_KEEP,
        }
    }
}
