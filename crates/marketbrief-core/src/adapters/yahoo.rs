//! Yahoo Finance daily-price adapter.
//!
//! Downloads a one-day window from the unauthenticated v8 chart endpoint and
//! reads the session's open/close out of the quote indicator arrays. The end
//! bound of the window is exclusive, so one session maps to
//! `[midnight, next midnight)`.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;

use crate::http_client::{HttpClient, HttpRequest};
use crate::price_source::{DailyPriceRequest, PriceSource, SourceError};
use crate::{PriceObservation, ProviderId, Symbol};

const CHART_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
const DEFAULT_TIMEOUT_MS: u64 = 3_000;

pub struct YahooDailyAdapter {
    http: Arc<dyn HttpClient>,
    timeout_ms: u64,
}

impl YahooDailyAdapter {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self {
            http,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    fn chart_url(&self, request: &DailyPriceRequest) -> Result<String, SourceError> {
        let (period1, period2) = request
            .date
            .unix_session_bounds()
            .map_err(|e| SourceError::invalid_request(e.to_string()))?;

        Ok(format!(
            "{CHART_BASE_URL}/{}?period1={period1}&period2={period2}&interval=1d",
            urlencoding::encode(request.symbol.as_str()),
        ))
    }
}

impl PriceSource for YahooDailyAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::Yahoo
    }

    fn daily<'a>(
        &'a self,
        request: &'a DailyPriceRequest,
    ) -> Pin<Box<dyn Future<Output = Result<PriceObservation, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            let url = self.chart_url(request)?;
            let http_request = HttpRequest::get(url)
                .with_header("accept", "application/json")
                .with_timeout_ms(self.timeout_ms);

            let response = self.http.execute(http_request).await.map_err(|e| {
                if e.retryable() {
                    SourceError::unavailable(format!("yahoo chart request failed: {e}"))
                } else {
                    SourceError::internal(format!("yahoo chart request failed: {e}"))
                }
            })?;

            if response.status == 429 {
                return Err(SourceError::rate_limited(
                    "yahoo chart endpoint rate limited the request",
                ));
            }
            if response.status == 404 {
                return Err(SourceError::no_data(format!(
                    "no chart data for '{}' on {}",
                    request.symbol, request.date
                )));
            }
            if !response.is_success() {
                return Err(SourceError::unavailable(format!(
                    "yahoo chart endpoint returned HTTP {}",
                    response.status
                )));
            }

            parse_chart_observation(&response.body, &request.symbol)
        })
    }
}

/// Extracts one session's open/close from a chart payload.
///
/// Percent change is never read from the provider; only the open/close
/// arrays are trusted, and the first/last non-null entries are taken so a
/// partially-null session still resolves.
fn parse_chart_observation(body: &str, symbol: &Symbol) -> Result<PriceObservation, SourceError> {
    let parsed: ChartEnvelope = serde_json::from_str(body)
        .map_err(|e| SourceError::internal(format!("malformed yahoo chart payload: {e}")))?;

    if let Some(error) = parsed.chart.error {
        return Err(SourceError::no_data(format!(
            "yahoo chart error for '{symbol}': {} ({})",
            error.description, error.code
        )));
    }

    let result = parsed
        .chart
        .result
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| SourceError::no_data(format!("yahoo chart returned no result for '{symbol}'")))?;

    let quote = result
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| SourceError::no_data(format!("yahoo chart returned no quotes for '{symbol}'")))?;

    let open = quote
        .open
        .iter()
        .flatten()
        .copied()
        .next()
        .ok_or_else(|| SourceError::no_data(format!("no opening price for '{symbol}'")))?;
    let close = quote
        .close
        .iter()
        .flatten()
        .copied()
        .last()
        .ok_or_else(|| SourceError::no_data(format!("no closing price for '{symbol}'")))?;

    PriceObservation::new(symbol.clone(), open, close)
        .map_err(|e| SourceError::internal(format!("yahoo prices failed validation: {e}")))
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartNode,
}

#[derive(Debug, Deserialize)]
struct ChartNode {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    #[serde(default)]
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize)]
struct ChartQuote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
}
