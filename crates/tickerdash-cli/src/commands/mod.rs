mod lookup;
mod price;
mod prompt;
mod series;

use std::process::ExitCode;
use std::time::Instant;

use serde::Serialize;
use tickerdash_core::{
    Bar, DataSource, Envelope, EnvelopeError, Interval, LookupOptions, Quote, SeriesMeta,
    SeriesSummary, Settings, Symbol,
};

use crate::cli::{Cli, Command, SeriesShapeArgs};
use crate::error::CliError;
use crate::metadata::Metadata;
use crate::output;

/// Presenter-facing payload shared by every command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportData {
    pub symbol: Symbol,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<Interval>,
    pub quote: Option<Quote>,
    pub summary: Option<SeriesSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<SeriesMeta>,
    pub bars: Vec<Bar>,
}

impl ReportData {
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            interval: None,
            quote: None,
            summary: None,
            meta: None,
            bars: Vec::new(),
        }
    }
}

pub struct CommandResult {
    pub data: ReportData,
    pub warnings: Vec<String>,
    pub errors: Vec<EnvelopeError>,
}

impl CommandResult {
    pub fn ok(data: ReportData) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }

    pub fn with_error(mut self, code: &str, message: impl Into<String>) -> Result<Self, CliError> {
        self.errors.push(EnvelopeError::new(code, message)?);
        Ok(self)
    }
}

impl From<SeriesShapeArgs> for LookupOptions {
    fn from(args: SeriesShapeArgs) -> Self {
        Self {
            interval: args.interval,
            output_size: args.outputsize,
        }
    }
}

/// Run the selected command, render its envelope and map the outcome to an
/// exit code.
pub async fn run(
    cli: &Cli,
    source: &dyn DataSource,
    settings: &Settings,
) -> Result<ExitCode, CliError> {
    let started = Instant::now();

    let command_result = match &cli.command {
        Command::Lookup(args) => lookup::run(&args.symbol, args.shape, source).await?,
        Command::Price(args) => price::run(&args.symbol, source).await?,
        Command::Series(args) => series::run(&args.symbol, args.shape, source).await?,
        Command::Prompt(shape) => return prompt::run(cli, *shape, source, settings).await,
    };

    let envelope = finish(command_result, started, settings)?;
    output::render(&envelope, cli.format, cli.pretty)?;

    if cli.strict && !envelope.is_clean() {
        return Err(CliError::StrictModeViolation {
            warning_count: envelope.meta.warnings.len(),
            error_count: envelope.errors.len(),
        });
    }

    if !envelope.errors.is_empty() {
        return Ok(ExitCode::from(3));
    }

    Ok(ExitCode::SUCCESS)
}

/// Attach metadata, warnings and the demo-key notice.
pub fn finish(
    command_result: CommandResult,
    started: Instant,
    settings: &Settings,
) -> Result<Envelope<ReportData>, CliError> {
    let CommandResult {
        data,
        warnings,
        errors,
    } = command_result;

    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let mut metadata = Metadata::new(latency_ms);
    for warning in warnings {
        metadata.push_warning(warning);
    }
    if let Some(notice) = settings.notice() {
        metadata.push_warning(notice);
    }

    let meta = metadata.into_envelope_meta()?;
    Envelope::with_errors(meta, data, errors).map_err(CliError::from)
}
