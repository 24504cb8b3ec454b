//! Behavior tests for the movers engine.
//!
//! These tests verify HOW the engine handles mixed fetch outcomes: ranked
//! lists, per-symbol skips, empty batches, and pacing.

use std::time::Duration;

use marketbrief_core::{RequestPacer, SourceErrorKind};
use marketbrief_tests::*;

fn universe(raw: &[&str]) -> Vec<Symbol> {
    raw.iter().map(|s| symbol(s)).collect()
}

#[tokio::test]
async fn when_all_symbols_resolve_both_lists_hold_min_of_top_n_and_data() {
    // Given: four symbols with valid prices
    let source = ScriptedSource::new()
        .with_prices("AAA", 100.0, 103.0)
        .with_prices("BBB", 100.0, 96.0)
        .with_prices("CCC", 100.0, 108.0)
        .with_prices("DDD", 100.0, 100.0);
    let engine = MoversEngine::new(Arc::new(source));
    let request = MoversRequest::new(universe(&["AAA", "BBB", "CCC", "DDD"]), date("2024-01-02"), 3)
        .expect("valid request");

    // When: the engine computes movers
    let report = engine.compute(&request).await;

    // Then: both lists hold min(top_n, observed) entries and nothing is skipped
    assert_eq!(report.observed, 4);
    assert_eq!(report.movers.gainers.len(), 3);
    assert_eq!(report.movers.losers.len(), 3);
    assert!(report.skipped.is_empty());
}

#[tokio::test]
async fn when_a_symbol_fails_it_is_skipped_and_the_batch_continues() {
    // Given: one scripted failure in the middle of the universe
    let source = ScriptedSource::new()
        .with_prices("AAA", 100.0, 110.0)
        .with_failure("BBB", SourceError::unavailable("connection reset"))
        .with_prices("CCC", 200.0, 202.0);
    let engine = MoversEngine::new(Arc::new(source));
    let request = MoversRequest::new(universe(&["AAA", "BBB", "CCC"]), date("2024-01-02"), 5)
        .expect("valid request");

    // When: the engine computes movers
    let report = engine.compute(&request).await;

    // Then: the failed symbol is excluded, the rest are ranked
    assert_eq!(report.observed, 2);
    assert_eq!(report.movers.gainers.len(), 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].symbol.as_str(), "BBB");
    assert_eq!(report.skipped[0].error.kind(), SourceErrorKind::Unavailable);
    assert!(report.skipped[0].error.retryable());
}

#[tokio::test]
async fn when_every_symbol_fails_the_report_is_empty_not_an_error() {
    // Given: a universe where nothing resolves
    let source = ScriptedSource::new()
        .with_failure("AAA", SourceError::no_data("non-trading day"))
        .with_failure("BBB", SourceError::unavailable("timeout"));
    let engine = MoversEngine::new(Arc::new(source));
    let request = MoversRequest::new(universe(&["AAA", "BBB"]), date("2024-01-02"), 5)
        .expect("valid request");

    // When: the engine computes movers
    let report = engine.compute(&request).await;

    // Then: both lists are empty and every symbol appears in the skip list
    assert_eq!(report.observed, 0);
    assert!(report.movers.gainers.is_empty());
    assert!(report.movers.losers.is_empty());
    assert_eq!(report.skipped.len(), 2);
}

#[tokio::test]
async fn when_the_universe_is_empty_the_report_is_empty() {
    let engine = MoversEngine::new(Arc::new(ScriptedSource::new()));
    let request =
        MoversRequest::new(Vec::new(), date("2024-01-02"), 5).expect("empty universe is legal");

    let report = engine.compute(&request).await;

    assert_eq!(report.observed, 0);
    assert!(report.movers.gainers.is_empty());
    assert!(report.movers.losers.is_empty());
    assert!(report.skipped.is_empty());
}

#[tokio::test]
async fn when_changes_tie_input_order_is_preserved() {
    // Given: two symbols with identical percent change
    let source = ScriptedSource::new()
        .with_prices("AAA", 100.0, 105.0)
        .with_prices("BBB", 200.0, 210.0);
    let engine = MoversEngine::new(Arc::new(source));
    let request = MoversRequest::new(universe(&["AAA", "BBB"]), date("2024-01-02"), 2)
        .expect("valid request");

    // When: the engine computes movers
    let report = engine.compute(&request).await;

    // Then: tie-break falls back to input order in both lists
    let gainers: Vec<&str> = report
        .movers
        .gainers
        .iter()
        .map(|c| c.symbol.as_str())
        .collect();
    let losers: Vec<&str> = report
        .movers
        .losers
        .iter()
        .map(|c| c.symbol.as_str())
        .collect();
    assert_eq!(gainers, vec!["AAA", "BBB"]);
    assert_eq!(losers, vec!["AAA", "BBB"]);
}

#[tokio::test]
async fn when_a_pacer_is_configured_the_batch_still_completes() {
    // Given: a pacer with enough budget for the whole universe
    let source = ScriptedSource::new()
        .with_prices("AAA", 100.0, 101.0)
        .with_prices("BBB", 100.0, 99.0);
    let engine = MoversEngine::new(Arc::new(source))
        .with_pacer(RequestPacer::new(Duration::from_secs(1), 10));
    let request = MoversRequest::new(universe(&["AAA", "BBB"]), date("2024-01-02"), 1)
        .expect("valid request");

    // When: the engine computes movers through the pacer
    let report = engine.compute(&request).await;

    // Then: every symbol was fetched
    assert_eq!(report.observed, 2);
    assert_eq!(report.movers.gainers[0].symbol.as_str(), "AAA");
    assert_eq!(report.movers.losers[0].symbol.as_str(), "BBB");
}

#[tokio::test]
async fn when_a_symbol_opens_at_zero_its_change_is_zero() {
    // Given: a zero opening price
    let source = ScriptedSource::new()
        .with_prices("ZZZ", 0.0, 5.0)
        .with_prices("AAA", 100.0, 99.0);
    let engine = MoversEngine::new(Arc::new(source));
    let request = MoversRequest::new(universe(&["ZZZ", "AAA"]), date("2024-01-02"), 2)
        .expect("valid request");

    // When: the engine computes movers
    let report = engine.compute(&request).await;

    // Then: the zero-open symbol ranks with a defined 0% change
    let zero = report
        .movers
        .gainers
        .iter()
        .find(|c| c.symbol.as_str() == "ZZZ")
        .expect("ZZZ must rank");
    assert_eq!(zero.percent_change, 0.0);
}
