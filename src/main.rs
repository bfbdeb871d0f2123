mod cli;
mod iteration;
mod payload;
mod report;
mod test_request;
#[cfg(test)]
mod test_support;

use clap::Parser;
use cli::Cli;
use iteration::run_iteration;
use report::Tally;
use std::process::ExitCode;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

const EXIT_OK: u8 = 0;
const EXIT_CHECKS_FAILED: u8 = 1;

#[tokio::main]
async fn main() -> ExitCode {
    pretty_env_logger::init();

    let cli = Cli::parse();
    log::info!(
        "running {} iteration(s) from {} against {}",
        cli.iterations,
        cli.start_iteration,
        cli.url
    );

    let mut tally = Tally::default();
    for iteration in cli.start_iteration..cli.start_iteration.saturating_add(cli.iterations) {
        let report = run_iteration(&cli.url, iteration).await;
        tally.record(&report);
    }

    println!("{} checks passed, {} checks failed", tally.passed, tally.failed);

    if tally.all_passed() {
        ExitCode::from(EXIT_OK)
    } else {
        ExitCode::from(EXIT_CHECKS_FAILED)
    }
}
