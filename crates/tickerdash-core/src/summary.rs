use serde::{Deserialize, Serialize};
use time::Date;

use crate::Series;

/// Headline metrics derived from a normalized series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    /// Close of the record with the greatest date.
    pub latest_close: f64,
    pub period_high: f64,
    pub period_low: f64,
    #[serde(with = "crate::domain::iso_date")]
    pub first_date: Date,
    #[serde(with = "crate::domain::iso_date")]
    pub last_date: Date,
    pub count: usize,
}

impl SeriesSummary {
    /// `None` for an empty series.
    pub fn from_series(series: &Series) -> Option<Self> {
        let first = series.bars.first()?;
        let latest = series.latest()?;

        let (period_high, period_low) = series.bars.iter().fold(
            (f64::NEG_INFINITY, f64::INFINITY),
            |(high, low), bar| (high.max(bar.high), low.min(bar.low)),
        );

        Some(Self {
            latest_close: latest.close,
            period_high,
            period_low,
            first_date: first.date,
            last_date: latest.date,
            count: series.len(),
        })
    }
}
