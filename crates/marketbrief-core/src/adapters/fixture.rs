//! Deterministic offline price source.
//!
//! Produces stable, plausible session prices derived from the symbol and the
//! date, so demos and tests run without network access. The same
//! symbol/date pair always yields the same observation, and a universe maps
//! to a mix of gainers and losers.

use std::future::Future;
use std::pin::Pin;

use crate::price_source::{DailyPriceRequest, PriceSource, SourceError};
use crate::{PriceObservation, ProviderId, Symbol};

#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureAdapter;

impl PriceSource for FixtureAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::Fixture
    }

    fn daily<'a>(
        &'a self,
        request: &'a DailyPriceRequest,
    ) -> Pin<Box<dyn Future<Output = Result<PriceObservation, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            let seed = session_seed(&request.symbol, request.date.into_inner().to_julian_day());

            let open = 50.0 + (seed % 4_500) as f64 / 10.0;
            // Signed drift in basis points, -450..=450 (at most +-4.5%).
            let drift_bp = ((seed >> 8) % 901) as i64 - 450;
            let close = open * (1.0 + drift_bp as f64 / 10_000.0);

            PriceObservation::new(request.symbol.clone(), open, close)
                .map_err(|e| SourceError::internal(format!("fixture prices failed validation: {e}")))
        })
    }
}

fn session_seed(symbol: &Symbol, julian_day: i32) -> u64 {
    let symbol_seed = symbol
        .as_str()
        .bytes()
        .fold(0u64, |acc, byte| acc.wrapping_mul(131).wrapping_add(u64::from(byte)));

    symbol_seed ^ (julian_day as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
