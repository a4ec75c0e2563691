use serde_json::Value;
use tokenswap_core::Envelope;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(
    envelope: &Envelope<Value>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => print!("{}", render_table(envelope)?),
    }

    Ok(())
}

fn render_table(envelope: &Envelope<Value>) -> Result<String, CliError> {
    let mut out = String::new();
    let meta = &envelope.meta;

    out.push_str(&format!("request_id  : {}\n", meta.request_id));
    out.push_str(&format!("schema      : {}\n", meta.schema_version));
    out.push_str(&format!("generated_at: {}\n", meta.generated_at));
    out.push_str(&format!(
        "feed        : {} entries, {} instruments\n",
        meta.feed_entries, meta.instruments
    ));

    if !meta.warnings.is_empty() {
        out.push_str("warnings:\n");
        for warning in &meta.warnings {
            out.push_str(&format!("  - {warning}\n"));
        }
    }

    out.push_str("data:\n");
    for line in serde_json::to_string_pretty(&envelope.data)?.lines() {
        out.push_str(&format!("  {line}\n"));
    }

    if !envelope.errors.is_empty() {
        out.push_str("errors:\n");
        for error in &envelope.errors {
            out.push_str(&format!("  - {}: {}\n", error.code, error.message));
        }
    }

    Ok(out)
}
