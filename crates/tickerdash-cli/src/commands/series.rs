use tickerdash_core::{normalize, DataSource, History, HistoryError, SeriesRequest, Symbol};

use crate::cli::SeriesShapeArgs;
use crate::commands::{CommandResult, ReportData};
use crate::error::CliError;

pub async fn run(
    symbol: &str,
    shape: SeriesShapeArgs,
    source: &dyn DataSource,
) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(symbol)?;
    let request = SeriesRequest::new(symbol.clone())
        .with_interval(shape.interval)
        .with_output_size(shape.outputsize)?;

    let history = source
        .series(&request)
        .await
        .map_err(HistoryError::from)
        .and_then(|raw| normalize(raw).map_err(HistoryError::from))
        .map(History::from_series);

    let mut data = ReportData::new(symbol);
    data.interval = Some(shape.interval);

    match history {
        Ok(History { series, summary }) => {
            data.meta = Some(series.meta);
            data.summary = summary;
            data.bars = series.bars;
            Ok(CommandResult::ok(data))
        }
        Err(error) => CommandResult::ok(data).with_error(error.code(), error.to_string()),
    }
}
