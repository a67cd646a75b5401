use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config::Settings;
use crate::data_source::{DataSource, SeriesRequest};
use crate::http_client::{HttpClient, HttpErrorKind, HttpRequest, ReqwestHttpClient};
use crate::{FetchError, Quote, RawBar, RawSeries, SeriesMeta, Symbol};

const UNKNOWN_PROVIDER_ERROR: &str = "Unknown API error";

/// Twelve Data REST client for the `price` and `time_series` endpoints.
#[derive(Clone)]
pub struct TwelveDataClient {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
    api_key: String,
    timeout_ms: u64,
}

impl TwelveDataClient {
    /// Client backed by a real reqwest transport.
    pub fn new(settings: &Settings) -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::new()), settings)
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>, settings: &Settings) -> Self {
        Self {
            http_client,
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone(),
            timeout_ms: settings.timeout_ms,
        }
    }

    /// `GET /price?symbol=..&apikey=..`
    pub async fn fetch_current_price(&self, symbol: &Symbol) -> Result<Quote, FetchError> {
        let body = self.get_json("price", &[("symbol", symbol.as_str())]).await?;
        let response: PriceResponse = decode(body)?;

        let price = match response.price {
            None => return Err(FetchError::MissingField { field: "price" }),
            Some(NumericField::Number(value)) => value,
            Some(NumericField::Text(text)) => text.trim().parse::<f64>().map_err(|e| {
                FetchError::InvalidBody {
                    cause: format!("price {text:?} is not numeric: {e}"),
                }
            })?,
        };

        if !price.is_finite() {
            return Err(FetchError::InvalidBody {
                cause: format!("price {price} is not finite"),
            });
        }

        tracing::debug!(symbol = %symbol, price, "fetched current price");
        Ok(Quote::new(symbol.clone(), price))
    }

    /// `GET /time_series?symbol=..&interval=..&outputsize=..&apikey=..`
    pub async fn fetch_series(&self, req: &SeriesRequest) -> Result<RawSeries, FetchError> {
        let output_size = req.output_size.to_string();
        let body = self
            .get_json(
                "time_series",
                &[
                    ("symbol", req.symbol.as_str()),
                    ("interval", req.interval.as_str()),
                    ("outputsize", output_size.as_str()),
                ],
            )
            .await?;
        let response: TimeSeriesResponse = decode(body)?;

        let values = match response.values {
            Some(values) if !values.is_empty() => values,
            _ => return Err(FetchError::MissingData),
        };

        tracing::debug!(
            symbol = %req.symbol,
            interval = %req.interval,
            records = values.len(),
            "fetched time series"
        );

        Ok(RawSeries {
            symbol: req.symbol.clone(),
            interval: req.interval,
            meta: response.meta.unwrap_or_default(),
            values,
        })
    }

    /// Issue one GET and classify the outcome. Returns the JSON object body of
    /// a successful, non-error response.
    async fn get_json(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Map<String, Value>, FetchError> {
        let query = params
            .iter()
            .map(|(name, value)| format!("{name}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        let endpoint = format!("{}/{path}?{query}", self.base_url);
        let url = format!("{endpoint}&apikey={}", urlencoding::encode(&self.api_key));

        tracing::debug!(url = %format!("{endpoint}&apikey=<redacted>"), "provider request");

        let request = HttpRequest::get(url)
            .with_header("accept", "application/json")
            .with_timeout_ms(self.timeout_ms);

        let response = self.http_client.execute(request).await.map_err(|error| {
            tracing::warn!(path, error = %error, "provider transport failure");
            match error.kind() {
                HttpErrorKind::Timeout => FetchError::Timeout,
                HttpErrorKind::Connect => FetchError::NetworkError {
                    cause: format!("could not connect to provider: {}", error.message()),
                },
                HttpErrorKind::Other => FetchError::NetworkError {
                    cause: error.message().to_owned(),
                },
            }
        })?;

        if !response.is_ok() {
            tracing::warn!(path, status = response.status, "provider returned non-200 status");
            return Err(FetchError::HttpError {
                status_code: response.status,
            });
        }

        let body = match serde_json::from_str::<Value>(&response.body) {
            Ok(Value::Object(body)) => body,
            Ok(other) => {
                return Err(FetchError::InvalidBody {
                    cause: format!("expected a JSON object, found {}", json_kind(&other)),
                })
            }
            Err(error) => {
                return Err(FetchError::InvalidBody {
                    cause: error.to_string(),
                })
            }
        };

        if body.get("status").and_then(Value::as_str) == Some("error") {
            let code = body
                .get("code")
                .and_then(Value::as_u64)
                .and_then(|code| u16::try_from(code).ok());
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .filter(|message| !message.trim().is_empty())
                .unwrap_or(UNKNOWN_PROVIDER_ERROR)
                .to_owned();
            tracing::warn!(path, ?code, %message, "provider reported an error");
            return Err(FetchError::ProviderError { code, message });
        }

        Ok(body)
    }
}

impl DataSource for TwelveDataClient {
    fn current_price<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> Pin<Box<dyn Future<Output = Result<Quote, FetchError>> + Send + 'a>> {
        Box::pin(self.fetch_current_price(symbol))
    }

    fn series<'a>(
        &'a self,
        req: &'a SeriesRequest,
    ) -> Pin<Box<dyn Future<Output = Result<RawSeries, FetchError>> + Send + 'a>> {
        Box::pin(self.fetch_series(req))
    }
}

fn decode<T>(body: Map<String, Value>) -> Result<T, FetchError>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_value(Value::Object(body)).map_err(|error| FetchError::InvalidBody {
        cause: error.to_string(),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// Twelve Data response payloads
#[derive(Debug, Deserialize)]
struct PriceResponse {
    #[serde(default)]
    price: Option<NumericField>,
}

/// Twelve Data sends prices as strings; plain numbers are accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumericField {
    Number(f64),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct TimeSeriesResponse {
    #[serde(default)]
    meta: Option<SeriesMeta>,
    #[serde(default)]
    values: Option<Vec<RawBar>>,
}
