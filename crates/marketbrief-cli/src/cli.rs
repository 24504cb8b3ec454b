//! CLI argument definitions for marketbrief.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `movers` | Rank top gainers and losers for one session |
//! | `report` | Full market summary: index sessions plus top movers |
//!
//! # Global options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `text` | Output format (text, json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings and skipped tickers as failures |
//! | `--source` | `yahoo` | Price source (yahoo, fixture) |
//! | `--timeout-ms` | `3000` | Per-request timeout in ms |
//! | `--pace-ms` | `200` | Minimum delay between provider calls (0 disables) |

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Session market summaries and top-movers rankings from one price source.
#[derive(Debug, Parser)]
#[command(
    name = "marketbrief",
    author,
    version,
    about = "Market summary and top-movers CLI"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings and skipped tickers as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Price source answering daily open/close queries.
    #[arg(long, global = true, value_enum, default_value_t = SourceSelector::Yahoo)]
    pub source: SourceSelector,

    /// Per-request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = 3000)]
    pub timeout_ms: u64,

    /// Minimum delay between sequential provider calls, in milliseconds.
    /// Zero disables pacing.
    #[arg(long, global = true, default_value_t = 200)]
    pub pace_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable market summary text.
    Text,
    /// Envelope-wrapped JSON object.
    Json,
    /// Key/value metadata dump plus pretty JSON data.
    Table,
}

/// Price source selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceSelector {
    /// Yahoo Finance v8 chart endpoint.
    Yahoo,
    /// Deterministic offline fixture source.
    Fixture,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rank the top gainers and losers for a session.
    Movers(MoversArgs),
    /// Build the full market summary report.
    Report(ReportArgs),
}

#[derive(Debug, Args)]
pub struct MoversArgs {
    /// Ticker symbols to rank. May be combined with --universe.
    #[arg(value_name = "SYMBOL")]
    pub symbols: Vec<String>,

    /// Session date, YYYY-MM-DD.
    #[arg(long)]
    pub date: String,

    /// How many gainers/losers to keep.
    #[arg(long, default_value_t = 5)]
    pub top: i64,

    /// Universe file: one symbol per line, '#' starts a comment.
    #[arg(long, value_name = "FILE")]
    pub universe: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub movers: MoversArgs,

    /// Index symbols summarized above the movers sections.
    #[arg(
        long = "index",
        value_name = "SYMBOL",
        default_values_t = [String::from("^NSEI"), String::from("^NSEBANK")]
    )]
    pub indices: Vec<String>,

    /// Write the rendered text report to this file.
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}
