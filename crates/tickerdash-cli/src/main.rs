mod cli;
mod commands;
mod error;
mod logging;
mod metadata;
mod output;

use clap::Parser;
use std::process::ExitCode;

use tickerdash_core::{Settings, TwelveDataClient};

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
    logging::init(cli.verbose);

    let settings = Settings::from_env().with_timeout_ms(cli.timeout_ms);
    tracing::debug!(?settings, "resolved settings");
    let client = TwelveDataClient::new(&settings);

    commands::run(&cli, &client, &settings).await
}
