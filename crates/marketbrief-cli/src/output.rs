use marketbrief_core::Envelope;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::commands::CommandOutcome;
use crate::error::CliError;

pub fn render(
    outcome: &CommandOutcome,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => print!("{}", outcome.text),
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(&outcome.envelope)?
            } else {
                serde_json::to_string(&outcome.envelope)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => render_table(&outcome.envelope)?,
    }

    Ok(())
}

fn render_table(envelope: &Envelope<Value>) -> Result<(), CliError> {
    println!("request_id  : {}", envelope.meta.request_id);
    println!("generated_at: {}", envelope.meta.generated_at);
    println!("source      : {}", envelope.meta.source);
    println!("latency_ms  : {}", envelope.meta.latency_ms);

    if !envelope.meta.warnings.is_empty() {
        println!("warnings:");
        for warning in &envelope.meta.warnings {
            println!("  - {warning}");
        }
    }

    println!("data:");
    let pretty_data = serde_json::to_string_pretty(&envelope.data)?;
    for line in pretty_data.lines() {
        println!("  {line}");
    }

    if !envelope.errors.is_empty() {
        println!("errors:");
        for error in &envelope.errors {
            println!("  - {}: {}", error.code, error.message);
        }
    }

    Ok(())
}
