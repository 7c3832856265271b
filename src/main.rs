use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

fn main() -> ExitCode {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn try_main() -> anyhow::Result<()> {
    activitybook::logging::init().context("init logging")?;

    let cli = activitybook::cli::Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        activitybook::cli::Command::Plan(args) => {
            activitybook::build::run(args).context("plan")?;
        }
        activitybook::cli::Command::Estimate(args) => {
            activitybook::build::run_estimate(args).context("estimate")?;
        }
        activitybook::cli::Command::Summary(args) => {
            activitybook::build::run_summary(args).context("summary")?;
        }
    }

    Ok(())
}
