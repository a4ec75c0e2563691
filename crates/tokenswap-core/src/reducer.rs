//! Collapses a raw price feed into one quote per symbol.
//!
//! The feed may repeat a symbol many times with different dates. A single
//! pass keeps, per symbol, the entry with the greatest timestamp:
//!
//! - a later entry replaces the incumbent only if its timestamp is strictly
//!   greater, so the first entry seen wins an exact tie;
//! - a missing or unreadable date ranks below every valid date;
//! - a missing, negative or non-finite price is kept as `0.0`;
//! - an entry whose currency is not a valid [`Symbol`] is dropped;
//! - currencies are keyed after trimming, so `" ETH"` and `"ETH"` are the
//!   same symbol.
//!
//! None of these are errors. [`ReductionReport`] counts them for callers that
//! want to surface feed quality.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::{Catalog, IconBase, Instrument, PriceEntry, Symbol, UtcDateTime};

/// Counters describing how a feed was normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReductionReport {
    pub entries: usize,
    pub instruments: usize,
    pub superseded: usize,
    pub invalid_symbols: usize,
    pub undated: usize,
    pub coerced_prices: usize,
}

impl ReductionReport {
    pub fn has_anomalies(&self) -> bool {
        self.invalid_symbols > 0 || self.undated > 0 || self.coerced_prices > 0
    }
}

#[derive(Debug)]
struct Candidate {
    timestamp: Option<UtcDateTime>,
    price: f64,
}

/// Feed reducer bound to an icon base.
#[derive(Debug, Clone, Default)]
pub struct QuoteReducer {
    icon_base: IconBase,
}

impl QuoteReducer {
    pub fn new(icon_base: IconBase) -> Self {
        Self { icon_base }
    }

    pub fn icon_base(&self) -> &IconBase {
        &self.icon_base
    }

    pub fn reduce(&self, entries: &[PriceEntry]) -> Catalog {
        self.reduce_with_report(entries).0
    }

    pub fn reduce_with_report(&self, entries: &[PriceEntry]) -> (Catalog, ReductionReport) {
        let mut report = ReductionReport {
            entries: entries.len(),
            ..ReductionReport::default()
        };
        let mut latest: HashMap<Symbol, Candidate> = HashMap::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            let symbol = match Symbol::parse(&entry.currency) {
                Ok(symbol) => symbol,
                Err(error) => {
                    debug!(index, currency = %entry.currency, %error, "skipping feed entry with invalid symbol");
                    report.invalid_symbols += 1;
                    continue;
                }
            };

            let timestamp = entry.timestamp();
            if timestamp.is_none() {
                debug!(index, symbol = %symbol, date = ?entry.date, "feed entry has no usable date");
                report.undated += 1;
            }

            let price = entry.sanitized_price();
            if entry.price != Some(price) {
                debug!(index, symbol = %symbol, raw = ?entry.price, "feed price coerced to zero");
                report.coerced_prices += 1;
            }

            let candidate = Candidate { timestamp, price };
            match latest.get_mut(&symbol) {
                Some(incumbent) => {
                    report.superseded += 1;
                    if candidate.timestamp > incumbent.timestamp {
                        *incumbent = candidate;
                    }
                }
                None => {
                    latest.insert(symbol, candidate);
                }
            }
        }

        let instruments = latest
            .into_iter()
            .map(|(symbol, candidate)| Instrument {
                icon_ref: self.icon_base.icon_ref(&symbol),
                symbol,
                price: candidate.price,
            })
            .collect::<Vec<_>>();

        report.instruments = instruments.len();
        info!(
            entries = report.entries,
            instruments = report.instruments,
            invalid_symbols = report.invalid_symbols,
            undated = report.undated,
            "reduced price feed"
        );

        (Catalog::from_unique(instruments), report)
    }
}

/// Reduce a feed using the default icon base.
pub fn reduce(entries: &[PriceEntry]) -> Catalog {
    QuoteReducer::default().reduce(entries)
}
