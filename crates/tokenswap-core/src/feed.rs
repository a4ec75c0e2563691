//! Decoding of price feed snapshots.
//!
//! A snapshot is a JSON array of `{currency, date, price}` objects. The array
//! itself must be well-formed; elements that are not objects are skipped.
//! Numbers are kept as written until a field reads them, so a price outside
//! the `f64` range decodes as a missing price instead of failing the snapshot.

use std::io::Read;

use serde_json::Value;
use tracing::debug;

use crate::{CoreError, PriceEntry};

pub fn parse_feed(json: &str) -> Result<Vec<PriceEntry>, CoreError> {
    let raw: Vec<Value> = serde_json::from_str(json)?;
    decode_entries(raw)
}

pub fn read_feed<R: Read>(reader: R) -> Result<Vec<PriceEntry>, CoreError> {
    let raw: Vec<Value> = serde_json::from_reader(reader)?;
    decode_entries(raw)
}

fn decode_entries(raw: Vec<Value>) -> Result<Vec<PriceEntry>, CoreError> {
    let mut entries = Vec::with_capacity(raw.len());
    for (index, value) in raw.into_iter().enumerate() {
        if !value.is_object() {
            debug!(index, "skipping non-object feed element");
            continue;
        }
        entries.push(serde_json::from_value(value)?);
    }
    Ok(entries)
}
