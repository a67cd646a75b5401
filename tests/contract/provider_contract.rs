//! Wire contract with the Twelve Data REST API: endpoints, query parameters,
//! key placement and per-request timeout.

#[path = "../support/mod.rs"]
mod support;

use tickerdash_core::{DataSource, Interval, SeriesRequest, Symbol};

use support::{client, price_body, week_body, ScriptedProvider, BASE_URL, TEST_KEY};

#[tokio::test]
async fn price_call_hits_price_endpoint_with_symbol_and_key() {
    // Given: a provider that answers the price endpoint
    let provider = ScriptedProvider::new().reply("price", Ok(price_body("150.25")));
    let client = client(&provider);

    // When: the current price is requested
    let symbol = Symbol::parse("AAPL").expect("valid");
    let quote = client.current_price(&symbol).await.expect("price should parse");

    // Then: exactly one GET with symbol and apikey was issued
    assert_eq!(quote.price, 150.25);
    assert_eq!(
        provider.urls(),
        vec![format!("{BASE_URL}/price?symbol=AAPL&apikey={TEST_KEY}")]
    );
}

#[tokio::test]
async fn series_call_carries_interval_and_output_size() {
    // Given: a provider that answers the time_series endpoint
    let provider = ScriptedProvider::new().reply("time_series", Ok(week_body()));
    let client = client(&provider);

    // When: a weekly series of 12 points is requested
    let request = SeriesRequest::new(Symbol::parse("brk.b").expect("valid"))
        .with_interval(Interval::OneWeek)
        .with_output_size(12)
        .expect("valid size");
    let raw = client.series(&request).await.expect("series should parse");

    // Then: the query names every parameter and the raw rows are returned as sent
    assert_eq!(
        provider.urls(),
        vec![format!(
            "{BASE_URL}/time_series?symbol=BRK.B&interval=1week&outputsize=12&apikey={TEST_KEY}"
        )]
    );
    assert_eq!(raw.values.len(), 7);
    assert_eq!(raw.values[0].datetime.as_deref(), Some("2024-03-11"));
    assert_eq!(raw.meta.currency.as_deref(), Some("USD"));
    assert_eq!(raw.meta.instrument_type.as_deref(), Some("Common Stock"));
}

#[tokio::test]
async fn every_request_carries_the_configured_timeout() {
    // Given: a client built with default settings (10 second timeout)
    let provider = ScriptedProvider::new()
        .reply("price", Ok(price_body("1.00")))
        .reply("time_series", Ok(week_body()));
    let client = client(&provider);
    let symbol = Symbol::parse("MSFT").expect("valid");

    // When: both endpoints are called
    client.current_price(&symbol).await.expect("price");
    client
        .series(&SeriesRequest::new(symbol))
        .await
        .expect("series");

    // Then: each request asked for JSON with a 10 000 ms bound
    let requests = provider.requests();
    assert_eq!(requests.len(), 2);
    for request in requests {
        assert_eq!(request.timeout_ms, 10_000);
        assert_eq!(
            request.headers.get("accept").map(String::as_str),
            Some("application/json")
        );
    }
}

#[tokio::test]
async fn default_series_request_asks_for_seven_daily_points() {
    // Given: a default series request
    let provider = ScriptedProvider::new().reply("time_series", Ok(week_body()));
    let client = client(&provider);

    // When: it is sent
    client
        .series(&SeriesRequest::new(Symbol::parse("GOOGL").expect("valid")))
        .await
        .expect("series");

    // Then: the provider sees interval=1day and outputsize=7
    let url = &provider.urls()[0];
    assert!(url.contains("interval=1day"), "{url}");
    assert!(url.contains("outputsize=7"), "{url}");
}
