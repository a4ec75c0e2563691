use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{Symbol, UtcDateTime, ValidationError};

/// Raw price record as published by the feed.
///
/// Deserialization never rejects a record because of its field values: a
/// non-string currency becomes empty, a missing or non-string date becomes
/// `None`, and a price that is not a number or numeric string becomes `None`.
/// The reducer decides what to do with those.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub currency: String,
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: Option<f64>,
}

impl PriceEntry {
    pub fn new(currency: impl Into<String>, date: impl Into<String>, price: f64) -> Self {
        Self {
            currency: currency.into(),
            date: Some(date.into()),
            price: Some(price),
        }
    }

    /// Parsed timestamp, `None` when missing or unparseable.
    pub fn timestamp(&self) -> Option<UtcDateTime> {
        self.date
            .as_deref()
            .and_then(|raw| UtcDateTime::parse(raw).ok())
    }

    /// Price with missing, negative and non-finite values coerced to zero.
    pub fn sanitized_price(&self) -> f64 {
        match self.price {
            Some(price) if price.is_finite() && price >= 0.0 => price,
            _ => 0.0,
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) => value,
        _ => String::new(),
    })
}

fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) => Some(value),
        _ => None,
    })
}

fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    })
}

/// Resolved quote for one token: the latest known price plus its icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    pub symbol: Symbol,
    pub price: f64,
    pub icon_ref: String,
}

impl Instrument {
    pub fn new(
        symbol: Symbol,
        price: f64,
        icon_ref: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        validate_non_negative("price", price)?;

        Ok(Self {
            symbol,
            price,
            icon_ref: icon_ref.into(),
        })
    }
}

/// Fully priced conversion between two instruments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub source_amount: f64,
    pub destination_amount: f64,
    pub forward_rate: f64,
    pub inverse_rate: f64,
}

/// Why a conversion has no usable rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndefinedRateCause {
    /// Source is worth nothing, so the inverse rate is unbounded.
    ZeroSourcePrice,
    /// Division by a destination priced at zero.
    ZeroDestinationPrice,
    ZeroPrices,
    /// Prices are non-zero but the ratio or amount overflows, or the ratio
    /// underflows to zero.
    Overflow,
}

/// Outcome of a conversion request whose inputs were in domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Conversion {
    Priced(ConversionResult),
    UndefinedRate {
        source_amount: f64,
        cause: UndefinedRateCause,
    },
}

impl Conversion {
    pub fn result(&self) -> Option<&ConversionResult> {
        match self {
            Self::Priced(result) => Some(result),
            Self::UndefinedRate { .. } => None,
        }
    }

    pub fn source_amount(&self) -> f64 {
        match self {
            Self::Priced(result) => result.source_amount,
            Self::UndefinedRate { source_amount, .. } => *source_amount,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Self::Priced(_))
    }
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }

    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_feed_record() {
        let entry: PriceEntry = serde_json::from_str(
            r#"{"currency":"BLUR","date":"2023-08-29T07:10:40.000Z","price":0.20811525423728813}"#,
        )
        .expect("must parse");

        assert_eq!(entry.currency, "BLUR");
        assert!(entry.timestamp().is_some());
        assert_eq!(entry.sanitized_price(), 0.208_115_254_237_288_13);
    }

    #[test]
    fn tolerates_malformed_fields() {
        let entry: PriceEntry =
            serde_json::from_str(r#"{"currency":42,"date":null,"price":"abc"}"#).expect("must parse");

        assert_eq!(entry.currency, "");
        assert_eq!(entry.date, None);
        assert_eq!(entry.price, None);
        assert_eq!(entry.sanitized_price(), 0.0);
    }

    #[test]
    fn accepts_numeric_string_price() {
        let entry: PriceEntry =
            serde_json::from_str(r#"{"currency":"USD","price":" 1.5 "}"#).expect("must parse");
        assert_eq!(entry.price, Some(1.5));
        assert_eq!(entry.timestamp(), None);
    }

    #[test]
    fn coerces_negative_price_to_zero() {
        let entry = PriceEntry::new("USD", "2024-01-01", -3.0);
        assert_eq!(entry.sanitized_price(), 0.0);
    }

    #[test]
    fn instrument_rejects_negative_price() {
        let symbol = Symbol::parse("ETH").expect("valid");
        let err = Instrument::new(symbol, -1.0, "icon").expect_err("must fail");
        assert_eq!(err, ValidationError::NegativeValue { field: "price" });
    }

    #[test]
    fn undefined_conversion_serializes_with_status_tag() {
        let conversion = Conversion::UndefinedRate {
            source_amount: 2.0,
            cause: UndefinedRateCause::ZeroDestinationPrice,
        };
        let value = serde_json::to_value(conversion).expect("serializable");
        assert_eq!(value["status"], "undefined_rate");
        assert_eq!(value["cause"], "zero_destination_price");
    }
}
