//! # tickerdash core
//!
//! Single-symbol stock lookup: validate a ticker, fetch the current price and
//! a short OHLCV history from Twelve Data, normalize the history into a typed
//! series and derive its headline metrics.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Twelve Data client |
//! | [`config`] | Environment settings and the demo-key fallback |
//! | [`data_source`] | Provider trait and series request |
//! | [`domain`] | Symbol, interval, quote, raw and typed series |
//! | [`envelope`] | Machine-readable output wrapper |
//! | [`error`] | Validation, fetch and processing errors |
//! | [`http_client`] | Transport seam (reqwest in production) |
//! | [`lookup`] | Request-scoped pipeline |
//! | [`normalize`] | Raw series to typed, date-ordered series |
//! | [`summary`] | Latest close, period high and low |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tickerdash_core::{lookup, LookupOptions, Settings, TwelveDataClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings::from_env();
//!     let client = TwelveDataClient::new(&settings);
//!
//!     let result = lookup(&client, "aapl", LookupOptions::default()).await?;
//!     if let Ok(history) = &result.history {
//!         if let Some(summary) = history.summary {
//!             println!("latest close: ${:.2}", summary.latest_close);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Security
//!
//! The API key is read from the environment only and is redacted from logs
//! and `Debug` output.

pub mod adapters;
pub mod config;
pub mod data_source;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod http_client;
pub mod lookup;
pub mod normalize;
pub mod summary;

pub use adapters::TwelveDataClient;

pub use config::Settings;

pub use data_source::{DataSource, SeriesRequest, DEFAULT_OUTPUT_SIZE, MAX_OUTPUT_SIZE};

pub use domain::{
    validate, Bar, Interval, Quote, RawBar, RawSeries, Series, SeriesMeta, Symbol, MAX_SYMBOL_LEN,
};

pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta};

pub use error::{FetchError, HistoryError, ProcessingError, ValidationError};

pub use http_client::{
    HttpClient, HttpError, HttpErrorKind, HttpRequest, HttpResponse, ReqwestHttpClient,
};

pub use lookup::{lookup, History, Lookup, LookupOptions};

pub use normalize::normalize;

pub use summary::SeriesSummary;
