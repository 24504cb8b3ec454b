//! Top-movers ranking engine.
//!
//! Given a symbol universe and a session date, fetch each symbol's open and
//! close from a [`PriceSource`], derive percent changes, and rank the top-N
//! gainers and losers. Per-symbol fetch failures are collected, never raised:
//! the worst outcome of a batch is an empty (but valid) report.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::price_source::{DailyPriceRequest, PriceSource, SourceError};
use crate::throttling::RequestPacer;
use crate::{RankedChange, Symbol, TradingDate, ValidationError};

/// Validated input for one movers computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoversRequest {
    pub symbols: Vec<Symbol>,
    pub date: TradingDate,
    pub top_n: usize,
}

impl MoversRequest {
    /// `top_n` is taken signed so a negative value from the boundary is
    /// rejected with a descriptive error instead of being coerced.
    /// An empty universe is legal and yields an empty report.
    pub fn new(
        symbols: Vec<Symbol>,
        date: TradingDate,
        top_n: i64,
    ) -> Result<Self, ValidationError> {
        if top_n < 0 {
            return Err(ValidationError::NegativeTopN { value: top_n });
        }

        Ok(Self {
            symbols,
            date,
            top_n: top_n as usize,
        })
    }
}

/// Ranked gainer/loser lists drawn from one set of session changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movers {
    pub gainers: Vec<RankedChange>,
    pub losers: Vec<RankedChange>,
}

/// A symbol excluded from ranking, with the error that excluded it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSymbol {
    pub symbol: Symbol,
    pub error: SourceError,
}

/// Result of one movers computation.
#[derive(Debug, Clone, PartialEq)]
pub struct MoversReport {
    pub date: TradingDate,
    /// Count of symbols that produced a usable observation.
    pub observed: usize,
    pub movers: Movers,
    pub skipped: Vec<SkippedSymbol>,
}

/// Ranks session changes into top-N gainers and losers.
///
/// Both lists are drawn independently from the full set, so a symbol can
/// appear in both when `top_n` exceeds half the universe. Sorting is stable:
/// symbols with identical percent change keep their input order. `top_n`
/// larger than the data is clamped.
pub fn rank_movers(changes: &[RankedChange], top_n: usize) -> Movers {
    let take = top_n.min(changes.len());

    let mut gainers = changes.to_vec();
    gainers.sort_by(|a, b| {
        b.percent_change
            .partial_cmp(&a.percent_change)
            .unwrap_or(Ordering::Equal)
    });
    gainers.truncate(take);

    let mut losers = changes.to_vec();
    losers.sort_by(|a, b| {
        a.percent_change
            .partial_cmp(&b.percent_change)
            .unwrap_or(Ordering::Equal)
    });
    losers.truncate(take);

    Movers { gainers, losers }
}

/// Sequential fetch-and-rank engine over one price source.
pub struct MoversEngine {
    source: Arc<dyn PriceSource>,
    pacer: Option<RequestPacer>,
}

impl MoversEngine {
    pub fn new(source: Arc<dyn PriceSource>) -> Self {
        Self {
            source,
            pacer: None,
        }
    }

    /// Gates every provider call on the pacer's rate budget.
    pub fn with_pacer(mut self, pacer: RequestPacer) -> Self {
        self.pacer = Some(pacer);
        self
    }

    /// Fetches every symbol's session change, sequentially.
    ///
    /// Each fetch completes (or fails) before the next begins. A failed
    /// symbol lands in the skip list and is not retried; it never aborts the
    /// batch.
    pub async fn session_changes(
        &self,
        symbols: &[Symbol],
        date: TradingDate,
    ) -> (Vec<RankedChange>, Vec<SkippedSymbol>) {
        let mut changes = Vec::with_capacity(symbols.len());
        let mut skipped = Vec::new();

        for symbol in symbols {
            if let Some(pacer) = &self.pacer {
                pacer.ready().await;
            }

            let request = DailyPriceRequest::new(symbol.clone(), date);
            match self.source.daily(&request).await {
                Ok(observation) => changes.push(RankedChange::from_observation(&observation)),
                Err(error) => skipped.push(SkippedSymbol {
                    symbol: symbol.clone(),
                    error,
                }),
            }
        }

        (changes, skipped)
    }

    /// Computes the top movers for one request.
    ///
    /// A batch where every symbol failed yields empty gainer/loser lists,
    /// which is a normal result rather than an error.
    pub async fn compute(&self, request: &MoversRequest) -> MoversReport {
        let (changes, skipped) = self.session_changes(&request.symbols, request.date).await;
        let movers = rank_movers(&changes, request.top_n);

        MoversReport {
            date: request.date,
            observed: changes.len(),
            movers,
            skipped,
        }
    }
}
