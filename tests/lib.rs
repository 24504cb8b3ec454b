// Test library for marketbrief behavior tests: scripted doubles shared by
// the test binaries.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

pub use marketbrief_core::{
    DailyPriceRequest, FixtureAdapter, HttpClient, HttpError, HttpRequest, HttpResponse,
    MoversEngine, MoversRequest, PriceObservation, PriceSource, ProviderId, RankedChange,
    SourceError, SourceErrorKind, Symbol, TradingDate, YahooDailyAdapter,
};
pub use std::sync::Arc;

/// Price source scripted per symbol: canned prices or a canned failure.
/// Unscripted symbols answer with a no-data error.
#[derive(Default)]
pub struct ScriptedSource {
    sessions: HashMap<String, Result<(f64, f64), SourceError>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prices(mut self, symbol: &str, open: f64, close: f64) -> Self {
        self.sessions.insert(symbol.to_owned(), Ok((open, close)));
        self
    }

    pub fn with_failure(mut self, symbol: &str, error: SourceError) -> Self {
        self.sessions.insert(symbol.to_owned(), Err(error));
        self
    }
}

impl PriceSource for ScriptedSource {
    fn id(&self) -> ProviderId {
        ProviderId::Fixture
    }

    fn daily<'a>(
        &'a self,
        request: &'a DailyPriceRequest,
    ) -> Pin<Box<dyn Future<Output = Result<PriceObservation, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            match self.sessions.get(request.symbol.as_str()) {
                Some(Ok((open, close))) => {
                    PriceObservation::new(request.symbol.clone(), *open, *close)
                        .map_err(|e| SourceError::internal(e.to_string()))
                }
                Some(Err(error)) => Err(error.clone()),
                None => Err(SourceError::no_data(format!(
                    "no scripted session for '{}'",
                    request.symbol
                ))),
            }
        })
    }
}

/// HTTP client returning one canned response for every request.
pub struct StaticHttpClient {
    status: u16,
    body: String,
}

impl StaticHttpClient {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

impl HttpClient for StaticHttpClient {
    fn execute<'a>(
        &'a self,
        _request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        Box::pin(async move {
            Ok(HttpResponse {
                status: self.status,
                body: self.body.clone(),
            })
        })
    }
}

pub fn symbol(raw: &str) -> Symbol {
    Symbol::parse(raw).expect("test symbol must parse")
}

pub fn date(raw: &str) -> TradingDate {
    TradingDate::parse(raw).expect("test date must parse")
}
