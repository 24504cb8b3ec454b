//! Price-source trait and request types.
//!
//! A price source answers exactly one question: for a symbol and a trading
//! date, what were the session's opening and closing prices? Everything else
//! a concrete provider exposes is out of contract.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{PriceObservation, ProviderId, Symbol, TradingDate};

/// Adapter-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// The session exists but the provider has no prices for it
    /// (non-trading day, delisted symbol, empty payload).
    NoData,
    Unavailable,
    RateLimited,
    InvalidRequest,
    Internal,
}

/// Structured source error carried through skip lists and envelopes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
    retryable: bool,
}

impl SourceError {
    pub fn no_data(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::NoData,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::RateLimited,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidRequest,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Internal,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::NoData => "source.no_data",
            SourceErrorKind::Unavailable => "source.unavailable",
            SourceErrorKind::RateLimited => "source.rate_limited",
            SourceErrorKind::InvalidRequest => "source.invalid_request",
            SourceErrorKind::Internal => "source.internal",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Request for one symbol's open/close prices on one session date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPriceRequest {
    pub symbol: Symbol,
    pub date: TradingDate,
}

impl DailyPriceRequest {
    pub fn new(symbol: Symbol, date: TradingDate) -> Self {
        Self { symbol, date }
    }
}

/// Price-source adapter contract.
pub trait PriceSource: Send + Sync {
    fn id(&self) -> ProviderId;

    /// Fetches the session's open/close prices for one symbol.
    fn daily<'a>(
        &'a self,
        request: &'a DailyPriceRequest,
    ) -> Pin<Box<dyn Future<Output = Result<PriceObservation, SourceError>> + Send + 'a>>;
}
