//! Presentation strings for rates, prices and amounts.
//!
//! Every function here is total: non-finite input renders as
//! [`UNDEFINED_DISPLAY`] rather than `NaN` or `inf`. Values that sit exactly
//! halfway between two outputs round away from zero (`0.125` → `0.13`).

use rust_decimal::{Decimal, RoundingStrategy};

/// Text shown for a rate or amount that has no finite value.
pub const UNDEFINED_DISPLAY: &str = "N/A";

/// Smallest rate shown in fixed-point form.
pub const FIXED_RATE_MIN: f64 = 0.0001;
/// Largest rate shown in fixed-point form.
pub const FIXED_RATE_MAX: f64 = 1_000_000.0;

const RATE_DECIMALS: usize = 6;
const EXPONENT_DECIMALS: usize = 4;

/// Largest number of decimals a [`Decimal`] can hold.
const MAX_DECIMAL_SCALE: u32 = 28;
/// Magnitudes whose exact value survives conversion to [`Decimal`] with
/// enough digits to detect a midpoint. No `f64` outside this range sits on a
/// five-significant-digit midpoint.
const EXACT_EXPONENTIAL_RANGE: std::ops::Range<f64> = 1e-15..1e27;

/// Format an exchange rate for display.
///
/// Rates in `[0.0001, 1_000_000]` use grouped fixed point with six decimals
/// (`1,234.500000`); anything outside uses scientific notation with four
/// mantissa decimals (`5.0000e-5`, `2.5000e+6`).
pub fn format_rate(rate: f64) -> String {
    if !rate.is_finite() {
        return UNDEFINED_DISPLAY.to_owned();
    }

    if !(FIXED_RATE_MIN..=FIXED_RATE_MAX).contains(&rate) {
        return format_exponential(rate, EXPONENT_DECIMALS);
    }

    format_price(rate, RATE_DECIMALS)
}

/// Fixed-point with en-US thousands grouping (`1234567.8, 2` → `1,234,567.80`).
pub fn format_price(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return UNDEFINED_DISPLAY.to_owned();
    }

    let fixed = round_fixed(value.abs(), decimals);
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    if value.is_sign_negative() && value != 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Ungrouped fixed point, as typed into an amount field (`5940.594059`).
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return UNDEFINED_DISPLAY.to_owned();
    }

    let fixed = round_fixed(value.abs(), decimals);
    if value < 0.0 {
        format!("-{fixed}")
    } else {
        fixed
    }
}

/// Scientific notation with an explicit exponent sign (`2.5000e+6`).
pub fn format_exponential(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return UNDEFINED_DISPLAY.to_owned();
    }

    let magnitude = value.abs();
    let (significand, exponent) = round_exponential(magnitude, decimals)
        .unwrap_or_else(|| float_exponential(magnitude, decimals));
    let sign = if value < 0.0 { "-" } else { "" };
    let exponent_sign = if exponent < 0 { '-' } else { '+' };
    format!("{sign}{significand}e{exponent_sign}{}", exponent.unsigned_abs())
}

/// Digits of a non-negative `magnitude` with exactly `decimals` places.
fn round_fixed(magnitude: f64, decimals: usize) -> String {
    let scale = u32::try_from(decimals)
        .ok()
        .filter(|scale| *scale <= MAX_DECIMAL_SCALE);
    match (scale, Decimal::from_f64_retain(magnitude)) {
        (Some(scale), Some(decimal)) => {
            let rounded = decimal.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
            pad_fraction(rounded.to_string(), decimals)
        }
        // Outside Decimal scale or range.
        _ => format!("{magnitude:.decimals$}"),
    }
}

fn pad_fraction(mut digits: String, decimals: usize) -> String {
    let present = digits.split_once('.').map_or(0, |(_, fraction)| fraction.len());
    if decimals > present && !digits.contains('.') {
        digits.push('.');
    }
    digits.extend(std::iter::repeat('0').take(decimals.saturating_sub(present)));
    digits
}

/// Significand with `decimals` places and its base-ten exponent.
fn round_exponential(magnitude: f64, decimals: usize) -> Option<(String, i64)> {
    if !EXACT_EXPONENTIAL_RANGE.contains(&magnitude) {
        return None;
    }

    let significant = u32::try_from(decimals + 1).ok()?;
    let rounded = Decimal::from_f64_retain(magnitude)?
        .round_sf_with_strategy(significant, RoundingStrategy::MidpointAwayFromZero)?;

    let coefficient = rounded.mantissa().unsigned_abs().to_string();
    let exponent = i64::try_from(coefficient.len()).ok()? - 1 - i64::from(rounded.scale());

    let mut significand: String = coefficient
        .chars()
        .chain(std::iter::repeat('0'))
        .take(decimals + 1)
        .collect();
    if decimals > 0 {
        significand.insert(1, '.');
    }
    Some((significand, exponent))
}

fn float_exponential(magnitude: f64, decimals: usize) -> (String, i64) {
    let raw = format!("{magnitude:.decimals$e}");
    match raw.split_once('e') {
        Some((significand, exponent)) => (significand.to_owned(), exponent.parse().unwrap_or(0)),
        None => (raw, 0),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_mid_range_rates_fixed() {
        assert_eq!(format_rate(0.5), "0.500000");
        assert_eq!(format_rate(1234.5), "1,234.500000");
        assert_eq!(format_rate(2970.297_029_702_970_3), "2,970.297030");
    }

    #[test]
    fn range_bounds_are_inclusive() {
        assert_eq!(format_rate(0.0001), "0.000100");
        assert_eq!(format_rate(1_000_000.0), "1,000,000.000000");
    }

    #[test]
    fn formats_extreme_rates_exponential() {
        assert_eq!(format_rate(0.00005), "5.0000e-5");
        assert_eq!(format_rate(2_500_000.0), "2.5000e+6");
        assert_eq!(format_rate(1_234_567.0), "1.2346e+6");
        assert_eq!(format_rate(0.0), "0.0000e+0");
    }

    #[test]
    fn non_finite_rates_use_sentinel() {
        assert_eq!(format_rate(f64::INFINITY), UNDEFINED_DISPLAY);
        assert_eq!(format_rate(f64::NEG_INFINITY), UNDEFINED_DISPLAY);
        assert_eq!(format_rate(f64::NAN), UNDEFINED_DISPLAY);
    }

    #[test]
    fn exact_midpoints_round_away_from_zero() {
        assert_eq!(format_rate(1.0 / 128.0), "0.007813");
        assert_eq!(format_fixed(0.125, 2), "0.13");
        assert_eq!(format_fixed(2.5, 0), "3");
        assert_eq!(format_fixed(-0.125, 2), "-0.13");
        assert_eq!(format_price(1_234.125, 2), "1,234.13");
        assert_eq!(format_rate(2_500_050.0), "2.5001e+6");
    }

    #[test]
    fn near_midpoints_follow_binary_value() {
        // 1.005 is stored just below the midpoint.
        assert_eq!(format_fixed(1.005, 2), "1.00");
        assert_eq!(format_fixed(0.3, 1), "0.3");
    }

    #[test]
    fn exponential_rounding_can_carry_into_exponent() {
        assert_eq!(format_exponential(99_999.5, 4), "1.0000e+5");
        assert_eq!(format_exponential(-0.000_012_345_6, 4), "-1.2346e-5");
    }

    #[test]
    fn groups_prices() {
        assert_eq!(format_price(1_234_567.891, 2), "1,234,567.89");
        assert_eq!(format_price(999.0, 2), "999.00");
        assert_eq!(format_price(-1234.0, 0), "-1,234");
        assert_eq!(format_price(100_000.0, 2), "100,000.00");
    }

    #[test]
    fn fixed_is_ungrouped() {
        assert_eq!(format_fixed(5940.594_059_405_941, 6), "5940.594059");
        assert_eq!(format_fixed(12.0, 2), "12.00");
    }
}
