//! # Domain Models
//!
//! Request-scoped value types for a single ticker lookup.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated, uppercased ticker |
//! | [`Interval`] | Series sampling granularity (1day, 1week, 1month) |
//! | [`Quote`] | Latest traded price at fetch time |
//! | [`RawSeries`] / [`RawBar`] | Provider payload before normalization |
//! | [`Series`] / [`Bar`] | Typed, date-ordered OHLCV records |
//!
//! Nothing here is cached or persisted. Each lookup builds fresh values and
//! drops them when the next one starts.

mod interval;
mod models;
mod symbol;

pub use interval::Interval;
pub use models::{Bar, Quote, RawBar, RawSeries, Series, SeriesMeta};
pub use symbol::{validate, Symbol, MAX_SYMBOL_LEN};


time::serde::format_description!(pub(crate) iso_date, Date, "[year]-[month]-[day]");
