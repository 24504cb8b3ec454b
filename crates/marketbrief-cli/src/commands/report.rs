use serde::Serialize;

use marketbrief_core::{MoversEngine, MoversRequest, RankedChange, Symbol, TradingDate};

use crate::cli::ReportArgs;
use crate::error::CliError;
use crate::{report, universe};

use super::CommandResult;

#[derive(Debug, Serialize)]
struct ReportResponseData<'a> {
    date: TradingDate,
    indices: &'a [RankedChange],
    top_n: usize,
    observed: usize,
    gainers: &'a [RankedChange],
    losers: &'a [RankedChange],
}

pub async fn run(args: &ReportArgs, engine: &MoversEngine) -> Result<CommandResult, CliError> {
    let date = TradingDate::parse(&args.movers.date)?;
    let symbols = universe::resolve(&args.movers.symbols, args.movers.universe.as_deref())?;
    let request = MoversRequest::new(symbols, date, args.movers.top)?;

    let indices = args
        .indices
        .iter()
        .map(|raw| Symbol::parse(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let mut warnings = Vec::new();
    if request.symbols.is_empty() {
        warnings.push(String::from(
            "symbol universe is empty; the movers sections have no data",
        ));
    }

    let (index_changes, index_skipped) = engine.session_changes(&indices, date).await;
    let movers_report = engine.compute(&request).await;

    let text =
        report::render_market_summary(date, &index_changes, &index_skipped, &movers_report);
    if let Some(path) = &args.out {
        report::write_report(path, &text)?;
    }

    let data = serde_json::to_value(ReportResponseData {
        date,
        indices: &index_changes,
        top_n: request.top_n,
        observed: movers_report.observed,
        gainers: &movers_report.movers.gainers,
        losers: &movers_report.movers.losers,
    })?;

    let mut skipped = index_skipped;
    skipped.extend(movers_report.skipped);

    Ok(CommandResult {
        data,
        text,
        warnings,
        skipped,
    })
}
