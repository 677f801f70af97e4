//! Amount formatting pipeline.
//!
//! Every function here is pure: the output depends only on the arguments and
//! the static currency tables.

use crate::currency::{AbbreviationRule, Currency};
use crate::number::{add_thousands_separators, add_thousands_separators_trimmed, floored_fixed};
use crate::suffix::SuffixPolicy;

/// Fractional digits kept on an abbreviated value ("1.23K").
pub const HUMANIZE_DECIMAL_PLACES: u32 = 2;

/// Find the abbreviation rule for `value`: the first rule, in descending
/// threshold order, whose threshold does not exceed the value.
pub fn select_abbreviation(value: f64, currency: Currency) -> Option<&'static AbbreviationRule> {
    currency
        .abbreviations()
        .iter()
        .find(|rule| value >= rule.threshold)
}

/// Abbreviate `value` by magnitude ("2K", "1.5L", "3.25Cr").
///
/// Values below the smallest threshold come back in their plain string form
/// with no grouping and no abbreviation.
pub fn humanize(value: f64, currency: Currency) -> String {
    match select_abbreviation(value, currency) {
        Some(rule) => {
            log::trace!(
                "humanize {} {}: threshold {} ({})",
                value,
                currency,
                rule.threshold,
                rule.symbol
            );
            let scaled = floored_fixed(value / rule.threshold, HUMANIZE_DECIMAL_PLACES);
            format!(
                "{}{}",
                add_thousands_separators_trimmed(scaled, currency, HUMANIZE_DECIMAL_PLACES),
                rule.symbol
            )
        }
        None => value.to_string(),
    }
}

/// Floor to `decimal_places` and group with exactly that many digits.
pub fn format_fixed(value: f64, currency: Currency, decimal_places: u32) -> String {
    add_thousands_separators(
        floored_fixed(value, decimal_places),
        currency,
        decimal_places,
    )
}

/// Format `value` under `policy` with the policy's default precision.
pub fn format_with_suffix_policy(value: f64, currency: Currency, policy: SuffixPolicy) -> String {
    match policy {
        SuffixPolicy::Decimals => format_fixed(value, currency, 2),
        SuffixPolicy::Humanize => humanize(value, currency),
        SuffixPolicy::None => format_fixed(value, currency, 0),
    }
}

/// Format `value` under a policy given by name.
///
/// Unrecognized names format exactly like `"none"`.
pub fn format_with_suffix_name(value: f64, currency: Currency, policy: &str) -> String {
    format_with_suffix_policy(value, currency, SuffixPolicy::from_name(policy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_thousands() {
        assert_eq!(humanize(2000.0, Currency::Inr), "2K");
        assert_eq!(humanize(1500.0, Currency::Usd), "1.5K");
        assert_eq!(humanize(1234.0, Currency::Usd), "1.23K");
    }

    #[test]
    fn test_humanize_indian_units() {
        assert_eq!(humanize(150_000.0, Currency::Inr), "1.5L");
        assert_eq!(humanize(32_500_000.0, Currency::Inr), "3.25Cr");
        assert_eq!(humanize(99_999.0, Currency::Inr), "99.99K");
    }

    #[test]
    fn test_humanize_western_units() {
        assert_eq!(humanize(2_500_000.0, Currency::Usd), "2.5M");
        assert_eq!(humanize(7_000_000_000.0, Currency::Myr), "7B");
    }

    #[test]
    fn test_humanize_large_values_group_scaled_part() {
        assert_eq!(humanize(1_234_500_000_000.0, Currency::Usd), "1,234.5B");
        assert_eq!(humanize(1_234_567.0e7, Currency::Inr), "12,34,567Cr");
    }

    #[test]
    fn test_humanize_threshold_is_inclusive() {
        assert_eq!(humanize(1000.0, Currency::Inr), "1K");
        assert_eq!(humanize(100_000.0, Currency::Inr), "1L");
        assert_eq!(humanize(10_000_000.0, Currency::Inr), "1Cr");
    }

    #[test]
    fn test_humanize_below_smallest_threshold() {
        assert_eq!(humanize(500.0, Currency::Inr), "500");
        assert_eq!(humanize(999.5, Currency::Usd), "999.5");
        assert_eq!(humanize(0.0, Currency::Usd), "0");
    }

    #[test]
    fn test_humanize_floors_scaled_value() {
        assert_eq!(humanize(1999.0, Currency::Usd), "1.99K");
    }

    #[test]
    fn test_selected_threshold_never_exceeds_value() {
        for value in [1000.0, 1001.0, 99_999.0, 100_000.0, 5e6, 1e7, 3e9, 4.2e12] {
            for currency in Currency::ALL {
                let rule = select_abbreviation(value, currency).expect("rule");
                assert!(rule.threshold <= value);
            }
        }
        assert!(select_abbreviation(999.99, Currency::Inr).is_none());
    }

    #[test]
    fn test_decimals_policy() {
        assert_eq!(
            format_with_suffix_policy(1234.567, Currency::Inr, SuffixPolicy::Decimals),
            "1,234.56"
        );
        assert_eq!(
            format_with_suffix_policy(1234567.891, Currency::Inr, SuffixPolicy::Decimals),
            "12,34,567.89"
        );
        assert_eq!(
            format_with_suffix_policy(5.0, Currency::Usd, SuffixPolicy::Decimals),
            "5.00"
        );
    }

    #[test]
    fn test_none_policy() {
        assert_eq!(
            format_with_suffix_policy(1234567.0, Currency::Usd, SuffixPolicy::None),
            "1,234,567"
        );
        assert_eq!(
            format_with_suffix_policy(1234567.99, Currency::Inr, SuffixPolicy::None),
            "12,34,567"
        );
    }

    #[test]
    fn test_humanize_policy() {
        assert_eq!(
            format_with_suffix_policy(2000.0, Currency::Inr, SuffixPolicy::Humanize),
            "2K"
        );
    }

    #[test]
    fn test_unknown_policy_name_matches_none() {
        for value in [0.0, 12.75, 1234567.0, 987654321.123] {
            for currency in Currency::ALL {
                assert_eq!(
                    format_with_suffix_name(value, currency, "abbreviate"),
                    format_with_suffix_policy(value, currency, SuffixPolicy::None)
                );
            }
        }
    }
}
