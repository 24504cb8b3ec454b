mod movers;
mod report;

use std::sync::Arc;
use std::time::{Duration, Instant};

use marketbrief_core::{
    Envelope, EnvelopeError, EnvelopeMeta, FixtureAdapter, MoversEngine, ProviderId,
    ReqwestHttpClient, RequestPacer, SkippedSymbol, YahooDailyAdapter,
};
use serde_json::Value;
use uuid::Uuid;

use crate::cli::{Cli, Command, SourceSelector};
use crate::error::CliError;

/// Per-command result folded into one envelope by [`run`].
pub struct CommandResult {
    pub data: Value,
    /// Human-readable rendering, used by the text output format.
    pub text: String,
    pub warnings: Vec<String>,
    pub skipped: Vec<SkippedSymbol>,
}

pub struct CommandOutcome {
    pub envelope: Envelope<Value>,
    pub text: String,
}

pub async fn run(cli: &Cli) -> Result<CommandOutcome, CliError> {
    let engine = build_engine(cli);
    let started = Instant::now();

    let result = match &cli.command {
        Command::Movers(args) => movers::run(args, &engine).await?,
        Command::Report(args) => report::run(args, &engine).await?,
    };

    let latency_ms = started.elapsed().as_millis() as u64;
    let mut meta = EnvelopeMeta::new(
        Uuid::new_v4().to_string(),
        provider_for(cli.source),
        latency_ms,
    )?;
    for warning in result.warnings {
        meta.push_warning(warning);
    }

    let mut errors = Vec::with_capacity(result.skipped.len());
    for skipped in &result.skipped {
        errors.push(
            EnvelopeError::new(
                skipped.error.code(),
                format!("{}: {}", skipped.symbol, skipped.error.message()),
            )?
            .with_retryable(skipped.error.retryable())
            .with_symbol(skipped.symbol.clone()),
        );
    }

    let envelope = Envelope::with_errors(meta, result.data, errors)?;
    Ok(CommandOutcome {
        envelope,
        text: result.text,
    })
}

fn build_engine(cli: &Cli) -> MoversEngine {
    let engine = match cli.source {
        SourceSelector::Yahoo => MoversEngine::new(Arc::new(
            YahooDailyAdapter::new(Arc::new(ReqwestHttpClient::new()))
                .with_timeout_ms(cli.timeout_ms),
        )),
        SourceSelector::Fixture => MoversEngine::new(Arc::new(FixtureAdapter)),
    };

    if cli.pace_ms == 0 {
        engine
    } else {
        engine.with_pacer(RequestPacer::with_min_delay(Duration::from_millis(
            cli.pace_ms,
        )))
    }
}

const fn provider_for(source: SourceSelector) -> ProviderId {
    match source {
        SourceSelector::Yahoo => ProviderId::Yahoo,
        SourceSelector::Fixture => ProviderId::Fixture,
    }
}
