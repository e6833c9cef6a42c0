use std::process::ExitCode;

use clap::Parser;
use fetchpool::{
    config::{load_config, RunConfig},
    BoundedExecutor, ConcurrencyLimit, ExecutionSummary,
};

use crate::args::CliArgs;
use crate::input::collect_urls;
use crate::logging::init_logging;
use crate::output::{render_json, render_line};

pub async fn run() -> anyhow::Result<ExitCode> {
    let args = CliArgs::parse();
    let loaded = load_config(args.config.clone())?;
    let _logger = init_logging(&loaded.config.logging, args.log_level.as_deref())?;
    let config = apply_overrides(loaded.config, &args);

    let limit = match args.max_concurrency {
        Some(value) => ConcurrencyLimit::try_from(value)?,
        None => config.limit()?,
    };

    let urls = collect_urls(&args)?;
    if urls.is_empty() {
        log::warn!("no URLs given");
        return Ok(ExitCode::SUCCESS);
    }

    let fetcher = config.fetcher_builder().build()?;
    let executor = BoundedExecutor::new(fetcher, limit)?;
    let outcomes = executor.execute(&urls).await;
    let summary = ExecutionSummary::from_outcomes(&outcomes);

    if args.json {
        println!("{}", render_json(&urls, &outcomes)?);
    } else {
        for (url, outcome) in urls.iter().zip(&outcomes) {
            println!("{}", render_line(url, outcome));
        }
        eprintln!("{summary}");
    }

    Ok(if summary.all_succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn apply_overrides(mut config: RunConfig, args: &CliArgs) -> RunConfig {
    if let Some(timeout) = args.timeout {
        config.timeout_seconds = Some(timeout);
    }
    if args.error_for_status {
        config.error_for_status = true;
    }
    config
}
