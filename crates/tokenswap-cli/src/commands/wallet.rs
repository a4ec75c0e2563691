use std::io::BufReader;

use serde::Serialize;
use tokenswap_core::{format_balances, format_price, wallet_rows, WalletBalance, WalletRow};

use crate::cli::WalletArgs;
use crate::config::open;
use crate::error::CliError;

use super::{CommandResult, FeedContext};

#[derive(Debug, Serialize)]
struct WalletResponseData {
    rows: Vec<WalletRow>,
    total_usd: String,
}

pub fn run(args: &WalletArgs, context: &FeedContext) -> Result<CommandResult, CliError> {
    let reader = BufReader::new(open(&args.balances)?);
    let balances: Vec<WalletBalance> = serde_json::from_reader(reader)?;

    let formatted = format_balances(&balances);
    let hidden = balances.len() - formatted.len();
    let rows = wallet_rows(&formatted, &context.catalog);

    let unpriced: Vec<&str> = rows
        .iter()
        .filter(|row| row.usd_value.is_none())
        .map(|row| row.currency.as_str())
        .collect();
    let warning = (!unpriced.is_empty())
        .then(|| format!("no price for {}", unpriced.join(", ")));

    let total: f64 = rows.iter().filter_map(|row| row.usd_value).sum();
    let data = serde_json::to_value(WalletResponseData {
        rows,
        total_usd: format_price(total, 2),
    })?;

    let mut result = CommandResult::ok(data);
    if hidden > 0 {
        result = result.with_warning(format!(
            "{hidden} balances hidden: empty or on an unsupported chain"
        ));
    }
    if let Some(warning) = warning {
        result = result.with_warning(warning);
    }
    Ok(result)
}
