mod catalog;
mod quote;
mod wallet;

use serde_json::Value;
use tokenswap_core::{
    Catalog, Envelope, EnvelopeError, EnvelopeMeta, QuoteReducer, ReductionReport,
};
use tracing::debug;
use uuid::Uuid;

use crate::cli::{Cli, Command};
use crate::config::Settings;
use crate::error::CliError;

pub const SCHEMA_VERSION: &str = "v1.0.0";

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub errors: Vec<EnvelopeError>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_error(mut self, error: EnvelopeError) -> Self {
        self.errors.push(error);
        self
    }
}

/// Reduced feed shared by every command.
pub struct FeedContext {
    pub catalog: Catalog,
    pub report: ReductionReport,
}

pub fn run(cli: &Cli, settings: &Settings) -> Result<Envelope<Value>, CliError> {
    let entries = settings.feed.load()?;
    debug!(feed = %settings.feed.label(), entries = entries.len(), "loaded price feed");

    let reducer = QuoteReducer::new(settings.icon_base.clone());
    let (catalog, report) = reducer.reduce_with_report(&entries);
    let context = FeedContext { catalog, report };

    let command_result = match &cli.command {
        Command::Catalog(args) => catalog::run(args, &context)?,
        Command::Quote(args) => quote::run(args, &context)?,
        Command::Wallet(args) => wallet::run(args, &context)?,
    };

    let CommandResult {
        data,
        warnings,
        errors,
    } = command_result;

    let mut meta = EnvelopeMeta::new(
        Uuid::new_v4().to_string(),
        SCHEMA_VERSION,
        report.entries,
        report.instruments,
    )?;

    for warning in feed_warnings(&report) {
        meta.push_warning(warning);
    }
    for warning in warnings {
        meta.push_warning(warning);
    }

    if errors.is_empty() {
        return Ok(Envelope::success(meta, data));
    }
    Envelope::with_errors(meta, data, errors).map_err(CliError::from)
}

fn feed_warnings(report: &ReductionReport) -> Vec<String> {
    let mut warnings = Vec::new();
    if report.invalid_symbols > 0 {
        warnings.push(format!(
            "{} feed entries skipped: currency is not a valid symbol",
            report.invalid_symbols
        ));
    }
    if report.undated > 0 {
        warnings.push(format!(
            "{} feed entries have no readable date and rank below dated entries",
            report.undated
        ));
    }
    if report.coerced_prices > 0 {
        warnings.push(format!(
            "{} feed entries had a missing or invalid price, treated as 0",
            report.coerced_prices
        ));
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_report_has_no_warnings() {
        let report = ReductionReport {
            entries: 3,
            instruments: 2,
            superseded: 1,
            ..ReductionReport::default()
        };
        assert!(feed_warnings(&report).is_empty());
    }

    #[test]
    fn anomalies_become_warnings() {
        let report = ReductionReport {
            entries: 5,
            instruments: 1,
            invalid_symbols: 2,
            undated: 1,
            coerced_prices: 1,
            ..ReductionReport::default()
        };
        let warnings = feed_warnings(&report);
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].starts_with("2 feed entries skipped"));
    }
}
