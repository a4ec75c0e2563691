//! Swap-rate calculation between two resolved instruments.

use crate::{Conversion, ConversionResult, Instrument, UndefinedRateCause};

/// Parse user amount text into a strictly positive, finite number.
///
/// Reads the longest decimal literal at the start of the trimmed text
/// (`[+-]digits[.digits][e[+-]digits]`) and ignores whatever follows it, so
/// `"12abc"` is `12` while `"abc"` is nothing. Zero, negatives and values
/// that overflow to infinity are rejected.
pub fn parse_amount(text: &str) -> Option<f64> {
    let literal = leading_decimal_literal(text.trim())?;
    let value = literal.parse::<f64>().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

fn leading_decimal_literal(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    Some(&text[..end])
}

/// Convert `source_amount_text` units of `source` into `destination`.
///
/// Returns `None` when either side is unselected or the amount is not a
/// positive number. A zero price, or a ratio that leaves the finite range,
/// yields [`Conversion::UndefinedRate`] instead of a non-finite rate.
pub fn calculate(
    source: Option<&Instrument>,
    destination: Option<&Instrument>,
    source_amount_text: &str,
) -> Option<Conversion> {
    let (source, destination) = (source?, destination?);
    let source_amount = parse_amount(source_amount_text)?;

    Some(convert(source.price, destination.price, source_amount))
}

/// Conversion from already-validated inputs.
pub fn convert(source_price: f64, destination_price: f64, source_amount: f64) -> Conversion {
    let undefined = |cause| Conversion::UndefinedRate {
        source_amount,
        cause,
    };

    match (source_price == 0.0, destination_price == 0.0) {
        (true, true) => return undefined(UndefinedRateCause::ZeroPrices),
        (true, false) => return undefined(UndefinedRateCause::ZeroSourcePrice),
        (false, true) => return undefined(UndefinedRateCause::ZeroDestinationPrice),
        (false, false) => {}
    }

    let forward_rate = source_price / destination_price;
    let inverse_rate = 1.0 / forward_rate;
    let destination_amount = source_amount * forward_rate;

    let in_range = [forward_rate, inverse_rate, destination_amount]
        .iter()
        .all(|value| value.is_finite())
        && forward_rate > 0.0
        && inverse_rate > 0.0;
    if !in_range {
        return undefined(UndefinedRateCause::Overflow);
    }

    Conversion::Priced(ConversionResult {
        source_amount,
        destination_amount,
        forward_rate,
        inverse_rate,
    })
}
