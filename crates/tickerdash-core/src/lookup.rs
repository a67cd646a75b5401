//! Request-scoped lookup pipeline: validate, fetch both endpoints, normalize.
//!
//! ```text
//! input ─▶ Symbol::parse ─▶ ┬─ current_price ───────────────▶ quote
//!                           └─ series ─▶ normalize ─▶ summary ▶ history
//! ```
//!
//! Validation failures stop the flow before any request is issued. After
//! that, the two halves are reported independently: a failed price is a soft
//! warning and never hides the history, and a failed history never hides a
//! price that was fetched.

use serde::Serialize;

use crate::data_source::{DataSource, SeriesRequest, DEFAULT_OUTPUT_SIZE};
use crate::normalize::normalize;
use crate::summary::SeriesSummary;
use crate::{FetchError, HistoryError, Interval, Quote, Series, Symbol, ValidationError};

/// Caller-selected series shape for one lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupOptions {
    pub interval: Interval,
    pub output_size: usize,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            interval: Interval::default(),
            output_size: DEFAULT_OUTPUT_SIZE,
        }
    }
}

/// Normalized series plus its headline metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct History {
    pub series: Series,
    /// `None` only when the series is empty.
    pub summary: Option<SeriesSummary>,
}

impl History {
    pub fn from_series(series: Series) -> Self {
        let summary = SeriesSummary::from_series(&series);
        Self { series, summary }
    }
}

/// Everything one lookup produced. Each half carries its own outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct Lookup {
    pub symbol: Symbol,
    pub quote: Result<Quote, FetchError>,
    pub history: Result<History, HistoryError>,
}

impl Lookup {
    /// Soft warnings for the presenter; the history is still shown.
    pub fn warnings(&self) -> Vec<String> {
        match &self.quote {
            Ok(_) => Vec::new(),
            Err(error) => vec![format!("Current price not available: {error}")],
        }
    }

    /// The hard failure for this lookup, if any.
    pub fn history_error(&self) -> Option<&HistoryError> {
        self.history.as_ref().err()
    }

    pub fn is_complete(&self) -> bool {
        self.quote.is_ok() && self.history.is_ok()
    }
}

/// Run one lookup for raw user input.
///
/// # Errors
///
/// Only [`ValidationError`]; no request is issued in that case. Fetch and
/// processing failures are recorded inside the returned [`Lookup`].
pub async fn lookup(
    source: &dyn DataSource,
    input: &str,
    options: LookupOptions,
) -> Result<Lookup, ValidationError> {
    let symbol = Symbol::parse(input)?;
    let request = SeriesRequest::new(symbol.clone())
        .with_interval(options.interval)
        .with_output_size(options.output_size)?;

    tracing::info!(symbol = %symbol, interval = %options.interval, "starting lookup");

    let (quote, raw) = tokio::join!(source.current_price(&symbol), source.series(&request));

    if let Err(error) = &quote {
        tracing::warn!(symbol = %symbol, error = %error, "current price unavailable");
    }

    let history = raw
        .map_err(HistoryError::from)
        .and_then(|raw| normalize(raw).map_err(HistoryError::from))
        .map(History::from_series);

    if let Err(error) = &history {
        tracing::warn!(symbol = %symbol, code = error.code(), error = %error, "history unavailable");
    }

    Ok(Lookup {
        symbol,
        quote,
        history,
    })
}
