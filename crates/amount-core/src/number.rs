//! Numeric primitives: floor rounding and digit grouping.
//!
//! These functions are total over `f64`. Non-finite values pass through
//! unchanged (`floored_fixed`) or render as their plain string form
//! (`add_thousands_separators`); rejecting them is the job of the
//! validation layer in [`crate::input`].

use crate::currency::{Currency, DigitGrouping};

/// Truncate `value` to `decimal_places` fractional digits, rounding toward
/// negative infinity. Never rounds up.
///
/// The value is scaled by `10^decimal_places`, floored, divided back and
/// re-fixed to the requested precision so that representation noise such as
/// `1234.5600000000002` does not survive.
///
/// A scaled value that sits just below an integer because of binary
/// representation (`1.15 * 100 == 114.99999999999999`) is snapped up only
/// when the snapped result still does not exceed `value`.
///
/// Once the scaled value reaches 2^53 every f64 is already a whole number
/// of units, so there is nothing left to drop and `value` is returned as is.
pub fn floored_fixed(value: f64, decimal_places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let factor = 10f64.powi(decimal_places.min(i32::MAX as u32) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() || !factor.is_finite() || scaled.abs() >= EXACT_INTEGER_LIMIT {
        return value;
    }

    let ceiling = scaled.ceil();
    let units = if ceiling / factor <= value {
        ceiling
    } else {
        scaled.floor()
    };

    let floored = refix(units / factor, decimal_places);
    if floored > value {
        return value;
    }
    floored
}

/// 2^53: above this every f64 is an integer.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Round-trip through a fixed-precision string to drop float noise.
fn refix(value: f64, decimal_places: u32) -> f64 {
    let fixed = format!("{:.*}", decimal_places as usize, value);
    fixed.parse::<f64>().unwrap_or(value)
}

/// Render `value` with the currency's digit grouping and exactly
/// `decimal_places` fractional digits (zero-padded).
///
/// The value is expected to be floored already. Digits beyond
/// `decimal_places` in its shortest decimal form are cut off, never rounded.
pub fn add_thousands_separators(value: f64, currency: Currency, decimal_places: u32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    group_fixed(&cut_fraction(value, decimal_places), currency.grouping())
}

/// Shortest decimal form of `value` with exactly `decimal_places`
/// fractional digits, padding with zeros or cutting extra digits.
fn cut_fraction(value: f64, decimal_places: u32) -> String {
    let shortest = value.to_string();
    let (integer, fraction) = shortest.split_once('.').unwrap_or((&shortest, ""));
    if decimal_places == 0 {
        return integer.to_string();
    }

    let places = decimal_places as usize;
    let mut fixed = String::with_capacity(integer.len() + 1 + places);
    fixed.push_str(integer);
    fixed.push('.');
    fixed.extend(fraction.chars().take(places));
    fixed.extend(std::iter::repeat('0').take(places.saturating_sub(fraction.len())));
    fixed
}

/// Like [`add_thousands_separators`], but with at most `max_decimal_places`
/// fractional digits: trailing zeros and a bare decimal point are dropped.
pub fn add_thousands_separators_trimmed(
    value: f64,
    currency: Currency,
    max_decimal_places: u32,
) -> String {
    let grouped = add_thousands_separators(value, currency, max_decimal_places);
    if !value.is_finite() || !grouped.contains('.') {
        return grouped;
    }
    grouped
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Group the integer part of a fixed-point string like `-1234567.50`.
fn group_fixed(fixed: &str, grouping: DigitGrouping) -> String {
    let (negative, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, fixed),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(fixed.len() + integer.len() / 2);
    // "-0.00" reads as zero, not as a negative amount.
    if negative && unsigned.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    out.push_str(&group_integer(integer, grouping));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Insert separators into a run of ASCII digits.
pub fn group_integer(digits: &str, grouping: DigitGrouping) -> String {
    const SEPARATOR: &str = ",";

    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (rest, tail) = digits.split_at(digits.len() - 3);
    let size = match grouping {
        DigitGrouping::Western => 3,
        DigitGrouping::Indian => 2,
    };

    let mut groups = Vec::with_capacity(rest.len() / size + 2);
    let mut end = rest.len();
    while end > 0 {
        let start = end.saturating_sub(size);
        groups.push(&rest[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(tail);
    groups.join(SEPARATOR)
}
