use thiserror::Error;

/// Validation and contract errors exposed by `tickerdash-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a stock symbol")]
    EmptyInput,
    #[error(
        "Stock symbol should only contain letters, numbers, and periods (found '{ch}' at index {index})"
    )]
    InvalidCharacters { ch: char, index: usize },
    #[error("Stock symbol should be {max} characters or less (got {len})")]
    TooLong { len: usize, max: usize },

    #[error("invalid interval '{value}', expected one of 1day, 1week, 1month")]
    InvalidInterval { value: String },
    #[error("outputsize {value} is out of range, expected 1..={max}")]
    InvalidOutputSize { value: usize, max: usize },

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },

    #[error("error code cannot be empty")]
    EmptyErrorCode,
    #[error("error message cannot be empty")]
    EmptyErrorMessage,
}

impl ValidationError {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "validation.empty_input",
            Self::InvalidCharacters { .. } => "validation.invalid_characters",
            Self::TooLong { .. } => "validation.too_long",
            Self::InvalidInterval { .. } => "validation.invalid_interval",
            Self::InvalidOutputSize { .. } => "validation.invalid_output_size",
            Self::InvalidRequestId => "validation.invalid_request_id",
            Self::InvalidSchemaVersion { .. } => "validation.invalid_schema_version",
            Self::EmptyErrorCode => "validation.empty_error_code",
            Self::EmptyErrorMessage => "validation.empty_error_message",
        }
    }
}

/// Outcome classification for a single provider call.
///
/// The variant is decided once, at the client boundary. Nothing downstream
/// re-inspects HTTP status codes or response bodies.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("{message}")]
    ProviderError { code: Option<u16>, message: String },
    #[error("{field} data not available")]
    MissingField { field: &'static str },
    #[error("No data available for this symbol")]
    MissingData,
    #[error("API request failed with status code: {status_code}")]
    HttpError { status_code: u16 },
    #[error("Request timed out. Please try again.")]
    Timeout,
    #[error("Network error: {cause}")]
    NetworkError { cause: String },
    #[error("Unexpected response body: {cause}")]
    InvalidBody { cause: String },
}

impl FetchError {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ProviderError { .. } => "fetch.provider_error",
            Self::MissingField { .. } => "fetch.missing_field",
            Self::MissingData => "fetch.missing_data",
            Self::HttpError { .. } => "fetch.http_error",
            Self::Timeout => "fetch.timeout",
            Self::NetworkError { .. } => "fetch.network_error",
            Self::InvalidBody { .. } => "fetch.invalid_body",
        }
    }
}

/// Failure while turning a raw provider series into a typed [`crate::Series`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProcessingError {
    #[error("Error processing data: record {index} field '{field}' value {value:?}: {cause}")]
    MalformedRecord {
        index: usize,
        field: &'static str,
        value: Option<String>,
        cause: String,
    },
}

impl ProcessingError {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MalformedRecord { .. } => "processing.malformed_record",
        }
    }
}

/// Failure of the historical half of a lookup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("Error fetching stock data: {0}")]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Processing(#[from] ProcessingError),
}

impl HistoryError {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Fetch(error) => error.code(),
            Self::Processing(error) => error.code(),
        }
    }
}
