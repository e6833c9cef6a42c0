#[path = "fetchpool-cli/app.rs"]
mod app;
#[path = "fetchpool-cli/args.rs"]
mod args;
#[path = "fetchpool-cli/input.rs"]
mod input;
#[path = "fetchpool-cli/logging.rs"]
mod logging;
#[path = "fetchpool-cli/output.rs"]
mod output;

use std::process::ExitCode;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    app::run().await
}
