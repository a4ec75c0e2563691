use serde::Serialize;
use tokenswap_core::{fallback_color, format_rate, initials, Instrument};

use crate::cli::CatalogArgs;
use crate::error::CliError;

use super::{CommandResult, FeedContext};

#[derive(Debug, Serialize)]
struct CatalogEntry<'a> {
    symbol: &'a str,
    price: f64,
    price_display: String,
    icon_ref: &'a str,
    fallback_initials: String,
    fallback_color: String,
}

impl<'a> From<&'a Instrument> for CatalogEntry<'a> {
    fn from(instrument: &'a Instrument) -> Self {
        let symbol = instrument.symbol.as_str();
        Self {
            symbol,
            price: instrument.price,
            price_display: format_rate(instrument.price),
            icon_ref: &instrument.icon_ref,
            fallback_initials: initials(symbol),
            fallback_color: fallback_color(symbol),
        }
    }
}

#[derive(Debug, Serialize)]
struct CatalogResponseData<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<&'a str>,
    instruments: Vec<CatalogEntry<'a>>,
}

pub fn run(args: &CatalogArgs, context: &FeedContext) -> Result<CommandResult, CliError> {
    let instruments: Vec<&Instrument> = match &args.search {
        Some(query) => context.catalog.search(query),
        None => context.catalog.iter().collect(),
    };

    let empty = instruments.is_empty();
    let data = serde_json::to_value(CatalogResponseData {
        search: args.search.as_deref(),
        instruments: instruments.into_iter().map(CatalogEntry::from).collect(),
    })?;

    let result = CommandResult::ok(data);
    Ok(if empty {
        result.with_warning("no instruments match")
    } else {
        result
    })
}
