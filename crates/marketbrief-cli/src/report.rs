//! Text rendering for the market summary report.
//!
//! The report consumer seam: ranked lists and index sessions in, one
//! human-readable text block out. The same text feeds stdout in text mode
//! and the `--out` file sink.

use std::fmt::Write as _;
use std::path::Path;

use marketbrief_core::{Movers, MoversReport, RankedChange, SkippedSymbol, TradingDate};

pub fn render_market_summary(
    date: TradingDate,
    index_changes: &[RankedChange],
    index_skipped: &[SkippedSymbol],
    report: &MoversReport,
) -> String {
    let mut text = format!("Market Summary for {}:\n\n", date.format_long());

    for change in index_changes {
        let _ = writeln!(
            text,
            "{}: Last Close: {:.2}, Change: {:.2}, Percent Change: {:.2}%",
            change.symbol,
            change.close,
            change.change(),
            change.percent_change
        );
    }
    for skipped in index_skipped {
        let _ = writeln!(text, "{}: Data not available.", skipped.symbol);
    }

    text.push_str(&movers_sections(&report.movers));
    text.push_str(&excluded_section(&report.skipped));
    text
}

pub fn render_movers(report: &MoversReport) -> String {
    let mut text = format!("Top movers for {}:\n", report.date.format_long());
    text.push_str(&movers_sections(&report.movers));
    text.push_str(&excluded_section(&report.skipped));
    text
}

pub fn write_report(path: &Path, text: &str) -> std::io::Result<()> {
    std::fs::write(path, text)
}

fn movers_sections(movers: &Movers) -> String {
    let mut text = String::from("\nTop Gainers:\n");
    text.push_str(&ranked_lines(&movers.gainers));
    text.push_str("\nTop Losers:\n");
    text.push_str(&ranked_lines(&movers.losers));
    text
}

fn ranked_lines(changes: &[RankedChange]) -> String {
    if changes.is_empty() {
        return String::from("  (none)\n");
    }

    let mut text = String::new();
    for change in changes {
        let _ = writeln!(
            text,
            "  {}: {:.2} -> {:.2} ({:+.2}%)",
            change.symbol, change.open, change.close, change.percent_change
        );
    }
    text
}

fn excluded_section(skipped: &[SkippedSymbol]) -> String {
    if skipped.is_empty() {
        return String::new();
    }

    let symbols: Vec<&str> = skipped.iter().map(|s| s.symbol.as_str()).collect();
    format!("\nExcluded (no usable data): {}\n", symbols.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use marketbrief_core::{rank_movers, PriceObservation, SourceError, Symbol};

    fn change(raw: &str, open: f64, close: f64) -> RankedChange {
        let symbol = Symbol::parse(raw).expect("test symbol must parse");
        let observation =
            PriceObservation::new(symbol, open, close).expect("test observation must build");
        RankedChange::from_observation(&observation)
    }

    fn sample_report() -> MoversReport {
        let changes = vec![
            change("AAA", 100.0, 110.0),
            change("BBB", 50.0, 40.0),
            change("CCC", 200.0, 202.0),
        ];
        MoversReport {
            date: TradingDate::parse("2024-01-02").expect("must parse"),
            observed: changes.len(),
            movers: rank_movers(&changes, 2),
            skipped: vec![SkippedSymbol {
                symbol: Symbol::parse("GONE.NS").expect("must parse"),
                error: SourceError::no_data("no chart data"),
            }],
        }
    }

    #[test]
    fn renders_summary_with_indices_and_movers() {
        let indices = vec![change("^NSEI", 21700.0, 21741.9)];
        let text = render_market_summary(
            TradingDate::parse("2024-01-02").expect("must parse"),
            &indices,
            &[],
            &sample_report(),
        );

        assert!(text.starts_with("Market Summary for 02 Jan, 2024:"));
        assert!(text.contains("^NSEI: Last Close: 21741.90"));
        assert!(text.contains("Top Gainers:\n  AAA: 100.00 -> 110.00 (+10.00%)"));
        assert!(text.contains("Top Losers:\n  BBB: 50.00 -> 40.00 (-20.00%)"));
        assert!(text.contains("Excluded (no usable data): GONE.NS"));
    }

    #[test]
    fn unavailable_index_is_called_out() {
        let skipped = vec![SkippedSymbol {
            symbol: Symbol::parse("^NSEBANK").expect("must parse"),
            error: SourceError::no_data("non-trading day"),
        }];
        let text = render_market_summary(
            TradingDate::parse("2024-01-02").expect("must parse"),
            &[],
            &skipped,
            &sample_report(),
        );

        assert!(text.contains("^NSEBANK: Data not available."));
    }

    #[test]
    fn empty_lists_render_none_markers() {
        let report = MoversReport {
            date: TradingDate::parse("2024-01-02").expect("must parse"),
            observed: 0,
            movers: rank_movers(&[], 5),
            skipped: Vec::new(),
        };

        let text = render_movers(&report);
        assert_eq!(text.matches("  (none)").count(), 2);
        assert!(!text.contains("Excluded"));
    }

    #[test]
    fn writes_report_to_file() {
        let dir = tempfile::tempdir().expect("temp dir must create");
        let path = dir.path().join("market_report.txt");

        write_report(&path, "Market Summary for 02 Jan, 2024:\n").expect("must write");

        let written = std::fs::read_to_string(&path).expect("must read back");
        assert!(written.starts_with("Market Summary"));
    }
}
