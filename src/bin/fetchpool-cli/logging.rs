use std::path::PathBuf;

use fetchpool::config::LoggingConfig;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};

/// Starts the logger. Logs go to stderr unless the config names a file.
///
/// The returned handle must be kept alive for file output to be flushed.
pub fn init_logging(
    config: &LoggingConfig,
    level_override: Option<&str>,
) -> anyhow::Result<LoggerHandle> {
    let level = level_override.unwrap_or(&config.level);
    let logger = Logger::try_with_env_or_str(level)?;
    let Some(path) = config.path.as_ref().map(PathBuf::from) else {
        return Ok(logger.log_to_stderr().start()?);
    };

    let directory = path
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let basename = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("fetchpool")
        .to_string();
    let handle = logger
        .log_to_file(FileSpec::default().directory(directory).basename(basename))
        .rotate(
            Criterion::Size(config.rotate_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.rotate_keep),
        )
        .start()?;
    Ok(handle)
}
