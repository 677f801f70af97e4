//! Text output formatting for currency tables.

use amount_core::{add_thousands_separators, Currency};

/// Human-readable abbreviation list, e.g. "Cr >= 1,00,00,000; L >= 1,00,000".
///
/// Thresholds are grouped the way the currency groups its own amounts.
pub fn abbreviation_summary(currency: Currency) -> String {
    currency
        .abbreviations()
        .iter()
        .map(|rule| {
            format!(
                "{} >= {}",
                rule.symbol,
                add_thousands_separators(rule.threshold, currency, 0)
            )
        })
        .collect::<Vec<_>>()
        .join("; ")
}
