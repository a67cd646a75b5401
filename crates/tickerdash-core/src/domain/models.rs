use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::{Interval, Symbol};

/// Latest traded price for a symbol at fetch time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: Symbol,
    pub price: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub as_of: OffsetDateTime,
}

impl Quote {
    pub fn new(symbol: Symbol, price: f64) -> Self {
        Self {
            symbol,
            price,
            as_of: OffsetDateTime::now_utc(),
        }
    }
}

/// Descriptive fields the provider attaches to a time series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_timezone: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub instrument_type: Option<String>,
}

/// One loosely-typed OHLCV row as the provider sends it.
///
/// Every field is optional so that a single bad row is reported by the
/// normalizer with its index instead of failing the whole body decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBar {
    #[serde(default)]
    pub datetime: Option<String>,
    #[serde(default)]
    pub open: Option<String>,
    #[serde(default)]
    pub high: Option<String>,
    #[serde(default)]
    pub low: Option<String>,
    #[serde(default)]
    pub close: Option<String>,
    #[serde(default)]
    pub volume: Option<String>,
}

impl RawBar {
    pub fn new(
        datetime: &str,
        open: &str,
        high: &str,
        low: &str,
        close: &str,
        volume: &str,
    ) -> Self {
        Self {
            datetime: Some(datetime.to_owned()),
            open: Some(open.to_owned()),
            high: Some(high.to_owned()),
            low: Some(low.to_owned()),
            close: Some(close.to_owned()),
            volume: Some(volume.to_owned()),
        }
    }
}

/// Historical series exactly as fetched, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSeries {
    pub symbol: Symbol,
    pub interval: Interval,
    pub meta: SeriesMeta,
    pub values: Vec<RawBar>,
}

/// Typed OHLCV record. Price relations (`low <= close <= high`) are not checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    #[serde(with = "crate::domain::iso_date")]
    pub date: Date,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Date-ordered OHLCV records for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub symbol: Symbol,
    pub interval: Interval,
    #[serde(default)]
    pub meta: SeriesMeta,
    pub bars: Vec<Bar>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Record with the greatest date.
    pub fn latest(&self) -> Option<&Bar> {
        self.bars.last()
    }
}
