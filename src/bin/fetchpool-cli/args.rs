use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fetchpool",
    version,
    about = "Fetch URLs with a bounded number of concurrent requests"
)]
pub struct CliArgs {
    /// URLs to fetch. Read from --file or stdin when none are given
    pub urls: Vec<String>,
    /// File with one URL per line; blank lines and # comments are skipped
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,
    /// Maximum number of requests in flight
    #[arg(long, short = 'j', allow_negative_numbers = true)]
    pub max_concurrency: Option<f64>,
    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
    /// Count non-2xx responses as failures
    #[arg(long)]
    pub error_for_status: bool,
    /// Print results as a JSON array
    #[arg(long)]
    pub json: bool,
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
    /// Log level or filter spec, overrides the config file
    #[arg(long)]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_negative_and_fractional_limits() {
        let args = CliArgs::try_parse_from(["fetchpool", "-j", "-1", "https://a"]).unwrap();
        assert_eq!(args.max_concurrency, Some(-1.0));
        assert_eq!(args.urls, vec!["https://a".to_string()]);

        let args = CliArgs::try_parse_from(["fetchpool", "--max-concurrency", "1.5"]).unwrap();
        assert_eq!(args.max_concurrency, Some(1.5));
        assert!(args.urls.is_empty());
    }

    #[test]
    fn flags_default_off() {
        let args = CliArgs::try_parse_from(["fetchpool"]).unwrap();
        assert!(!args.json);
        assert!(!args.error_for_status);
        assert!(args.file.is_none());
    }
}
