use tickerdash_core::{DataSource, Symbol};

use crate::commands::{CommandResult, ReportData};
use crate::error::CliError;

/// Current price only. Unlike `lookup`, a failed quote is the whole answer
/// and is reported as an error.
pub async fn run(symbol: &str, source: &dyn DataSource) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(symbol)?;

    match source.current_price(&symbol).await {
        Ok(quote) => {
            let mut data = ReportData::new(symbol);
            data.quote = Some(quote);
            Ok(CommandResult::ok(data))
        }
        Err(error) => {
            tracing::warn!(symbol = %symbol, code = error.code(), "price request failed");
            CommandResult::ok(ReportData::new(symbol)).with_error(error.code(), error.to_string())
        }
    }
}
