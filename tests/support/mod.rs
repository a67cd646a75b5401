//! Shared fixtures for the behavior suites.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use tickerdash_core::config::{API_KEY_ENV, BASE_URL_ENV};
use tickerdash_core::{HttpClient, HttpError, HttpRequest, HttpResponse, Settings, TwelveDataClient};

pub const TEST_KEY: &str = "test-key";
pub const BASE_URL: &str = "https://provider.test";

/// Scripted transport: replies per endpoint (`price`, `time_series`) so the
/// concurrent lookup halves never race for a shared queue.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    replies: Mutex<HashMap<&'static str, VecDeque<Result<HttpResponse, HttpError>>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(self: &Arc<Self>, endpoint: &'static str, reply: Result<HttpResponse, HttpError>) -> Arc<Self> {
        self.replies
            .lock()
            .expect("reply store should not be poisoned")
            .entry(endpoint)
            .or_default()
            .push_back(reply);
        Arc::clone(self)
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|request| request.url).collect()
    }
}

impl HttpClient for ScriptedProvider {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let endpoint = if request.url.contains("/time_series?") {
            "time_series"
        } else {
            "price"
        };
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);
        let reply = self
            .replies
            .lock()
            .expect("reply store should not be poisoned")
            .get_mut(endpoint)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(HttpError::other(format!("no scripted reply for {endpoint}"))));
        Box::pin(async move { reply })
    }
}

pub fn settings() -> Settings {
    Settings::from_lookup(|name| match name {
        API_KEY_ENV => Some(String::from(TEST_KEY)),
        BASE_URL_ENV => Some(String::from(BASE_URL)),
        _ => None,
    })
}

pub fn client(provider: &Arc<ScriptedProvider>) -> TwelveDataClient {
    TwelveDataClient::with_http_client(Arc::clone(provider) as Arc<dyn HttpClient>, &settings())
}

pub fn price_body(price: &str) -> HttpResponse {
    HttpResponse::ok_json(format!(r#"{{"price":"{price}"}}"#))
}

/// Seven daily rows, newest first as the provider sends them.
///
/// High 175.00 on 2024-03-11, low 163.80 on 2024-03-04, latest close 174.60.
pub fn week_body() -> HttpResponse {
    HttpResponse::ok_json(
        r#"{
            "meta": {
                "symbol": "AAPL",
                "interval": "1day",
                "currency": "USD",
                "exchange_timezone": "America/New_York",
                "exchange": "NASDAQ",
                "type": "Common Stock"
            },
            "values": [
                {"datetime":"2024-03-11","open":"173.0","high":"175.0","low":"172.1","close":"174.6","volume":"45500000"},
                {"datetime":"2024-03-08","open":"172.9","high":"174.2","low":"171.0","close":"173.1","volume":"56000000"},
                {"datetime":"2024-03-07","open":"171.0","high":"173.5","low":"170.2","close":"172.9","volume":"51234000"},
                {"datetime":"2024-03-06","open":"169.2","high":"171.4","low":"168.5","close":"171.0","volume":"47000000"},
                {"datetime":"2024-03-05","open":"168.0","high":"169.9","low":"166.7","close":"169.0","volume":"48000000"},
                {"datetime":"2024-03-04","open":"166.5","high":"168.2","low":"163.8","close":"167.9","volume":"52000000"},
                {"datetime":"2024-03-01","open":"165.0","high":"167.1","low":"164.0","close":"166.5","volume":"60000000"}
            ],
            "status": "ok"
        }"#,
    )
}

pub fn provider_error(code: u16, message: &str) -> HttpResponse {
    HttpResponse::ok_json(format!(
        r#"{{"code":{code},"message":"{message}","status":"error"}}"#
    ))
}
