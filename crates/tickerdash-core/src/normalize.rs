//! Raw provider series → typed, date-ordered [`Series`].

use std::str::FromStr;

use time::macros::format_description;
use time::Date;

use crate::{Bar, ProcessingError, RawBar, RawSeries, Series};

/// Convert every raw record and sort ascending by date.
///
/// Fails on the first record with a missing or unparseable field. The sort is
/// stable, so records sharing a date keep their provider order. Duplicate
/// dates are kept and price relations are not checked.
pub fn normalize(raw: RawSeries) -> Result<Series, ProcessingError> {
    let RawSeries {
        symbol,
        interval,
        meta,
        values,
    } = raw;

    let mut bars = values
        .iter()
        .enumerate()
        .map(|(index, record)| normalize_bar(index, record))
        .collect::<Result<Vec<_>, _>>()?;

    bars.sort_by_key(|bar| bar.date);

    tracing::debug!(symbol = %symbol, records = bars.len(), "normalized series");

    Ok(Series {
        symbol,
        interval,
        meta,
        bars,
    })
}

fn normalize_bar(index: usize, record: &RawBar) -> Result<Bar, ProcessingError> {
    let datetime = require(index, "datetime", record.datetime.as_deref())?;
    Ok(Bar {
        date: parse_date(datetime).map_err(|cause| malformed(index, "datetime", datetime, cause))?,
        open: parse_price(index, "open", record.open.as_deref())?,
        high: parse_price(index, "high", record.high.as_deref())?,
        low: parse_price(index, "low", record.low.as_deref())?,
        close: parse_price(index, "close", record.close.as_deref())?,
        volume: parse_volume(index, record.volume.as_deref())?,
    })
}

/// Accepts `YYYY-MM-DD`, or a `YYYY-MM-DD HH:MM:SS` stamp truncated to its day.
fn parse_date(value: &str) -> Result<Date, String> {
    let day = value.trim();
    let day = day.split_once(' ').map_or(day, |(date, _)| date);
    Date::parse(day, format_description!("[year]-[month]-[day]")).map_err(|e| e.to_string())
}

fn parse_price(index: usize, field: &'static str, value: Option<&str>) -> Result<f64, ProcessingError> {
    let text = require(index, field, value)?;
    let parsed = f64::from_str(text.trim()).map_err(|e| malformed(index, field, text, e.to_string()))?;
    if !parsed.is_finite() {
        return Err(malformed(index, field, text, String::from("value must be finite")));
    }
    Ok(parsed)
}

/// Integer text, or float text with no fractional part (`"1234.0"`).
fn parse_volume(index: usize, value: Option<&str>) -> Result<u64, ProcessingError> {
    let text = require(index, "volume", value)?;
    let trimmed = text.trim();
    if let Ok(volume) = u64::from_str(trimmed) {
        return Ok(volume);
    }

    let parsed =
        f64::from_str(trimmed).map_err(|e| malformed(index, "volume", text, e.to_string()))?;
    if !parsed.is_finite() || parsed < 0.0 || parsed.fract() != 0.0 || parsed >= u64::MAX as f64 {
        return Err(malformed(
            index,
            "volume",
            text,
            String::from("volume must be a non-negative whole number"),
        ));
    }
    Ok(parsed as u64)
}

fn require<'a>(
    index: usize,
    field: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, ProcessingError> {
    value.ok_or_else(|| ProcessingError::MalformedRecord {
        index,
        field,
        value: None,
        cause: String::from("field is missing"),
    })
}

fn malformed(index: usize, field: &'static str, value: &str, cause: String) -> ProcessingError {
    ProcessingError::MalformedRecord {
        index,
        field,
        value: Some(value.to_owned()),
        cause,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Interval, SeriesMeta, Symbol};
    use time::macros::date;

    fn raw_series(values: Vec<RawBar>) -> RawSeries {
        RawSeries {
            symbol: Symbol::parse("AAPL").expect("valid symbol"),
            interval: Interval::OneDay,
            meta: SeriesMeta::default(),
            values,
        }
    }

    fn row(day: &str, close: &str) -> RawBar {
        RawBar::new(day, "100.00", "110.00", "90.00", close, "1000")
    }

    #[test]
    fn sorts_out_of_order_records_ascending() {
        let raw = raw_series(vec![
            row("2024-03-05", "105.5"),
            row("2024-03-01", "101.5"),
            row("2024-03-07", "107.5"),
            row("2024-03-04", "104.5"),
            row("2024-03-06", "106.5"),
            row("2024-03-02", "102.5"),
            row("2024-03-03", "103.5"),
        ]);

        let series = normalize(raw).expect("series should normalize");

        assert_eq!(series.len(), 7);
        let dates = series.bars.iter().map(|bar| bar.date).collect::<Vec<_>>();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
        assert_eq!(series.bars[0].date, date!(2024 - 03 - 01));
        assert_eq!(series.latest().map(|bar| bar.close), Some(107.5));
    }

    #[test]
    fn converts_numeric_strings_losslessly() {
        let raw = raw_series(vec![RawBar::new(
            "2024-03-01",
            "123.45",
            "130.01",
            "120.99",
            "125.5",
            "98765432",
        )]);

        let bar = normalize(raw).expect("series should normalize").bars[0];
        assert_eq!(bar.open, 123.45);
        assert_eq!(bar.high, 130.01);
        assert_eq!(bar.low, 120.99);
        assert_eq!(bar.close, 125.5);
        assert_eq!(bar.volume, 98_765_432);
    }

    #[test]
    fn identifies_record_and_field_for_non_numeric_close() {
        let raw = raw_series(vec![
            row("2024-03-01", "101.0"),
            row("2024-03-02", "n/a"),
        ]);

        let err = normalize(raw).expect_err("must fail");
        match err {
            ProcessingError::MalformedRecord {
                index,
                field,
                value,
                ..
            } => {
                assert_eq!(index, 1);
                assert_eq!(field, "close");
                assert_eq!(value.as_deref(), Some("n/a"));
            }
        }
    }

    #[test]
    fn whole_number_float_volume_is_accepted() {
        let mut record = row("2024-03-01", "101.0");
        record.volume = Some(String::from("1234.0"));

        let series = normalize(raw_series(vec![record])).expect("whole float volume");
        assert_eq!(series.bars[0].volume, 1_234);
    }

    #[test]
    fn fractional_or_negative_volume_is_malformed() {
        for text in ["12.5", "-3", "-3.0", "inf"] {
            let mut record = row("2024-03-01", "101.0");
            record.volume = Some(String::from(text));

            let err = normalize(raw_series(vec![record])).expect_err("must fail");
            assert!(
                matches!(
                    &err,
                    ProcessingError::MalformedRecord { field: "volume", value: Some(v), .. } if v == text
                ),
                "{text}: {err:?}"
            );
        }
    }

    #[test]
    fn missing_field_is_malformed() {
        let mut record = row("2024-03-01", "101.0");
        record.volume = None;

        let err = normalize(raw_series(vec![record])).expect_err("must fail");
        assert!(matches!(
            err,
            ProcessingError::MalformedRecord { field: "volume", value: None, .. }
        ));
    }

    #[test]
    fn rejects_non_finite_prices_and_bad_dates() {
        let err = normalize(raw_series(vec![row("2024-03-01", "NaN")])).expect_err("must fail");
        assert!(matches!(err, ProcessingError::MalformedRecord { field: "close", .. }));

        let err = normalize(raw_series(vec![row("03/01/2024", "1.0")])).expect_err("must fail");
        assert!(matches!(err, ProcessingError::MalformedRecord { field: "datetime", .. }));
    }

    #[test]
    fn truncates_time_of_day_to_date() {
        let series = normalize(raw_series(vec![row("2024-03-01 15:30:00", "1.0")]))
            .expect("series should normalize");
        assert_eq!(series.bars[0].date, date!(2024 - 03 - 01));
    }

    #[test]
    fn keeps_duplicate_dates_in_provider_order() {
        let series = normalize(raw_series(vec![
            row("2024-03-02", "2.0"),
            row("2024-03-01", "1.0"),
            row("2024-03-02", "3.0"),
        ]))
        .expect("series should normalize");

        let closes = series.bars.iter().map(|bar| bar.close).collect::<Vec<_>>();
        assert_eq!(closes, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn empty_input_yields_empty_series() {
        let series = normalize(raw_series(Vec::new())).expect("empty series is valid");
        assert!(series.is_empty());
        assert!(series.latest().is_none());
    }
}
