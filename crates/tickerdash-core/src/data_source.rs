//! Provider contract used by the lookup pipeline.
//!
//! | Operation | Request | Response |
//! |-----------|---------|----------|
//! | [`current_price`](DataSource::current_price) | [`Symbol`] | [`Quote`] |
//! | [`series`](DataSource::series) | [`SeriesRequest`] | [`RawSeries`] |
//!
//! The two operations are independent. Neither retries and neither caches.

use std::future::Future;
use std::pin::Pin;

use crate::{FetchError, Interval, Quote, RawSeries, Symbol, ValidationError};

pub const DEFAULT_OUTPUT_SIZE: usize = 7;
/// Largest `outputsize` the provider accepts.
pub const MAX_OUTPUT_SIZE: usize = 5_000;

/// Request payload for the time-series endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesRequest {
    pub symbol: Symbol,
    pub interval: Interval,
    pub output_size: usize,
}

impl SeriesRequest {
    /// Daily interval, seven points.
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            interval: Interval::default(),
            output_size: DEFAULT_OUTPUT_SIZE,
        }
    }

    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_output_size(mut self, output_size: usize) -> Result<Self, ValidationError> {
        if output_size == 0 || output_size > MAX_OUTPUT_SIZE {
            return Err(ValidationError::InvalidOutputSize {
                value: output_size,
                max: MAX_OUTPUT_SIZE,
            });
        }
        self.output_size = output_size;
        Ok(self)
    }
}

/// Source of current prices and historical series.
///
/// Implementations must be `Send + Sync`; the pipeline polls both operations
/// concurrently from one task.
pub trait DataSource: Send + Sync {
    /// Latest traded price for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] classified once at the transport boundary.
    fn current_price<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> Pin<Box<dyn Future<Output = Result<Quote, FetchError>> + Send + 'a>>;

    /// Raw OHLCV records for `req`, in provider order.
    ///
    /// # Errors
    ///
    /// Same classification as [`current_price`](DataSource::current_price),
    /// plus [`FetchError::MissingData`] when no records are returned.
    fn series<'a>(
        &'a self,
        req: &'a SeriesRequest,
    ) -> Pin<Box<dyn Future<Output = Result<RawSeries, FetchError>> + Send + 'a>>;
}
