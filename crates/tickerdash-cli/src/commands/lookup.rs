use tickerdash_core::{DataSource, History};

use crate::cli::SeriesShapeArgs;
use crate::commands::{CommandResult, ReportData};
use crate::error::CliError;

pub async fn run(
    symbol: &str,
    shape: SeriesShapeArgs,
    source: &dyn DataSource,
) -> Result<CommandResult, CliError> {
    let lookup = tickerdash_core::lookup(source, symbol, shape.into()).await?;
    let warnings = lookup.warnings();

    let mut data = ReportData::new(lookup.symbol);
    data.quote = lookup.quote.ok();

    match lookup.history {
        Ok(History { series, summary }) => {
            data.interval = Some(series.interval);
            data.meta = Some(series.meta);
            data.summary = summary;
            data.bars = series.bars;
            Ok(CommandResult::ok(data).with_warnings(warnings))
        }
        Err(error) => CommandResult::ok(data)
            .with_warnings(warnings)
            .with_error(error.code(), error.to_string()),
    }
}
