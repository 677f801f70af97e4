//! JSON output formatting.

use amount_core::{AmountInput, Currency, FormattedAmount};

/// Convert one formatted amount to JSON for output.
pub fn amount_json(
    input_text: &str,
    input: &AmountInput,
    formatted: &FormattedAmount,
) -> serde_json::Value {
    serde_json::json!({
        "input": input_text,
        "value": input.value,
        "currency": input.currency,
        "suffix": input.suffix,
        "decimal_places": formatted.decimal_places,
        "intent": input.intent,
        "affix": formatted.affix,
        "text": formatted.value,
        "formatted": formatted.to_string(),
    })
}

/// Convert a currency table row to JSON for output.
pub fn currency_json(currency: Currency) -> serde_json::Value {
    let abbreviations: Vec<serde_json::Value> = currency
        .abbreviations()
        .iter()
        .map(|rule| {
            serde_json::json!({
                "threshold": rule.threshold,
                "symbol": rule.symbol,
            })
        })
        .collect();
    serde_json::json!({
        "code": currency.code(),
        "symbol": currency.symbol(),
        "locale": currency.locale(),
        "grouping": currency.grouping(),
        "abbreviations": abbreviations,
    })
}
