use serde::Serialize;

use crate::{Instrument, Symbol};

/// Instruments available for selection, one per symbol, in collation order.
///
/// Only the reducer builds catalogs from feed data; uniqueness and ordering
/// hold by construction and are not re-checked on access.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog(Vec<Instrument>);

impl Catalog {
    /// Sorts `instruments` by symbol collation.
    ///
    /// Callers must pass at most one instrument per symbol.
    pub(crate) fn from_unique(mut instruments: Vec<Instrument>) -> Self {
        instruments.sort_by(|left, right| left.symbol.collate(&right.symbol));
        Self(instruments)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instrument> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Instrument] {
        &self.0
    }

    /// Exact, case-sensitive symbol lookup.
    pub fn get(&self, symbol: &str) -> Option<&Instrument> {
        self.0.iter().find(|instrument| instrument.symbol == symbol)
    }

    pub fn get_symbol(&self, symbol: &Symbol) -> Option<&Instrument> {
        self.get(symbol.as_str())
    }

    /// Instruments whose symbol contains `query`, ignoring case.
    ///
    /// The query is trimmed; an empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Instrument> {
        let needle = query.trim().to_lowercase();
        self.0
            .iter()
            .filter(|instrument| instrument.symbol.as_str().to_lowercase().contains(&needle))
            .collect()
    }

    pub fn into_inner(self) -> Vec<Instrument> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Instrument;
    type IntoIter = std::slice::Iter<'a, Instrument>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
