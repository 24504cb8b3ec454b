mod cli;
mod commands;
mod error;
mod output;
mod report;
mod universe;

use clap::Parser;
use std::process::ExitCode;

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();

    let outcome = commands::run(&cli).await?;
    output::render(&outcome, cli.format, cli.pretty)?;

    if cli.strict
        && (!outcome.envelope.meta.warnings.is_empty() || !outcome.envelope.errors.is_empty())
    {
        return Err(CliError::StrictModeViolation {
            warning_count: outcome.envelope.meta.warnings.len(),
            error_count: outcome.envelope.errors.len(),
        });
    }

    // Skipped tickers are not fatal, but a clean exit would hide them.
    if !outcome.envelope.errors.is_empty() {
        return Ok(ExitCode::from(3));
    }

    Ok(ExitCode::SUCCESS)
}
