use std::io::Write;
use std::process::ExitCode;
use std::time::Instant;

use tokio::io::{AsyncBufReadExt, BufReader};

use tickerdash_core::{DataSource, Settings, ValidationError};

use crate::cli::{Cli, SeriesShapeArgs};
use crate::commands::{finish, lookup};
use crate::error::CliError;
use crate::output;

const PROMPT: &str = "Enter stock symbol (e.g., AAPL, MSFT, GOOGL): ";

/// Interactive loop: one lookup per stdin line until EOF.
///
/// Validation failures are printed and the loop continues. Fetch failures
/// are rendered inside the envelope like any one-shot lookup.
pub async fn run(
    cli: &Cli,
    shape: SeriesShapeArgs,
    source: &dyn DataSource,
    settings: &Settings,
) -> Result<ExitCode, CliError> {
    if let Some(notice) = settings.notice() {
        eprintln!("{notice}");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        show_prompt()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let started = Instant::now();
        match lookup::run(&line, shape, source).await {
            Ok(command_result) => {
                let envelope = finish(command_result, started, settings)?;
                output::render(&envelope, cli.format, cli.pretty)?;
            }
            Err(CliError::Validation(error)) => report_invalid(&error)?,
            Err(other) => return Err(other),
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn show_prompt() -> Result<(), CliError> {
    let mut stderr = std::io::stderr().lock();
    write!(stderr, "{PROMPT}")?;
    stderr.flush()?;
    Ok(())
}

fn report_invalid(error: &ValidationError) -> Result<(), CliError> {
    let mut stderr = std::io::stderr().lock();
    writeln!(stderr, "{error}")?;
    Ok(())
}
