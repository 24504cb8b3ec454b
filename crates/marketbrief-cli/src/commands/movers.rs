use serde::Serialize;

use marketbrief_core::{MoversEngine, MoversRequest, RankedChange, TradingDate};

use crate::cli::MoversArgs;
use crate::error::CliError;
use crate::{report, universe};

use super::CommandResult;

#[derive(Debug, Serialize)]
struct MoversResponseData<'a> {
    date: TradingDate,
    top_n: usize,
    observed: usize,
    gainers: &'a [RankedChange],
    losers: &'a [RankedChange],
}

pub async fn run(args: &MoversArgs, engine: &MoversEngine) -> Result<CommandResult, CliError> {
    let date = TradingDate::parse(&args.date)?;
    let symbols = universe::resolve(&args.symbols, args.universe.as_deref())?;
    let request = MoversRequest::new(symbols, date, args.top)?;

    let mut warnings = Vec::new();
    if request.symbols.is_empty() {
        warnings.push(String::from(
            "symbol universe is empty; the ranking has no data",
        ));
    }

    let movers_report = engine.compute(&request).await;

    let data = serde_json::to_value(MoversResponseData {
        date: movers_report.date,
        top_n: request.top_n,
        observed: movers_report.observed,
        gainers: &movers_report.movers.gainers,
        losers: &movers_report.movers.losers,
    })?;
    let text = report::render_movers(&movers_report);

    Ok(CommandResult {
        data,
        text,
        warnings,
        skipped: movers_report.skipped,
    })
}
