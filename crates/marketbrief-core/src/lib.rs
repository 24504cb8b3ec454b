//! Core contracts for marketbrief.
//!
//! This crate contains:
//! - Canonical domain models and validation
//! - The price-source trait, structured source errors, and adapters
//! - The top-movers ranking engine
//! - Response envelope used by machine-readable CLI output

pub mod adapters;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod http_client;
pub mod movers;
pub mod price_source;
pub mod source;
pub mod throttling;

pub use adapters::{FixtureAdapter, YahooDailyAdapter};
pub use domain::{PriceObservation, RankedChange, Symbol, TradingDate, UtcDateTime};
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta};
pub use error::{CoreError, ValidationError};
pub use http_client::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, NoopHttpClient,
    ReqwestHttpClient,
};
pub use movers::{Movers, MoversEngine, MoversReport, MoversRequest, SkippedSymbol, rank_movers};
pub use price_source::{DailyPriceRequest, PriceSource, SourceError, SourceErrorKind};
pub use source::ProviderId;
pub use throttling::RequestPacer;
