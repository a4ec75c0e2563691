//! Wallet balance rows: chain priority, filtering, ordering and valuation.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::format::format_fixed;
use crate::Catalog;

/// Priority given to balances on chains outside [`Blockchain`]'s known set.
pub const UNKNOWN_CHAIN_PRIORITY: i32 = -99;

/// Chain a balance is held on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Blockchain {
    Osmosis,
    Ethereum,
    Arbitrum,
    Zilliqa,
    Neo,
    Other(String),
}

impl Blockchain {
    pub fn priority(&self) -> i32 {
        match self {
            Self::Osmosis => 100,
            Self::Ethereum => 50,
            Self::Arbitrum => 30,
            Self::Zilliqa | Self::Neo => 20,
            Self::Other(_) => UNKNOWN_CHAIN_PRIORITY,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Osmosis => "Osmosis",
            Self::Ethereum => "Ethereum",
            Self::Arbitrum => "Arbitrum",
            Self::Zilliqa => "Zilliqa",
            Self::Neo => "Neo",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for Blockchain {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Osmosis" => Self::Osmosis,
            "Ethereum" => Self::Ethereum,
            "Arbitrum" => Self::Arbitrum,
            "Zilliqa" => Self::Zilliqa,
            "Neo" => Self::Neo,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for Blockchain {
    fn from(value: &str) -> Self {
        Self::from(value.to_owned())
    }
}

impl From<Blockchain> for String {
    fn from(value: Blockchain) -> Self {
        value.as_str().to_owned()
    }
}

impl Display for Blockchain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    pub currency: String,
    pub amount: f64,
    pub blockchain: Blockchain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedWalletBalance {
    pub currency: String,
    pub amount: f64,
    pub blockchain: Blockchain,
    pub formatted: String,
}

/// A display row: a formatted balance plus its USD value when priced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalletRow {
    pub currency: String,
    pub amount: f64,
    pub formatted_amount: String,
    pub usd_value: Option<f64>,
}

/// Keep positive balances on known chains, highest priority first.
///
/// The sort is stable, so balances sharing a priority keep their input order.
/// Amounts are formatted with two decimals.
pub fn format_balances(balances: &[WalletBalance]) -> Vec<FormattedWalletBalance> {
    let mut ranked: Vec<(i32, &WalletBalance)> = balances
        .iter()
        .map(|balance| (balance.blockchain.priority(), balance))
        .filter(|(priority, balance)| *priority > UNKNOWN_CHAIN_PRIORITY && balance.amount > 0.0)
        .collect();

    ranked.sort_by(|(left, _), (right, _)| right.cmp(left));

    ranked
        .into_iter()
        .map(|(_, balance)| FormattedWalletBalance {
            currency: balance.currency.clone(),
            amount: balance.amount,
            blockchain: balance.blockchain.clone(),
            formatted: format_fixed(balance.amount, 2),
        })
        .collect()
}

/// Value each balance at the catalog price of its currency.
pub fn wallet_rows(balances: &[FormattedWalletBalance], catalog: &Catalog) -> Vec<WalletRow> {
    balances
        .iter()
        .map(|balance| WalletRow {
            currency: balance.currency.clone(),
            amount: balance.amount,
            formatted_amount: balance.formatted.clone(),
            usd_value: catalog
                .get(&balance.currency)
                .map(|instrument| instrument.price * balance.amount),
        })
        .collect()
}
