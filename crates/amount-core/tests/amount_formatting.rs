use std::thread;

use amount_core::{
    add_thousands_separators, floored_fixed, format_amount, format_with_suffix_name,
    format_with_suffix_policy, humanize, AmountError, AmountFormatter, AmountInput, Currency,
    CurrencyIndicator, Intent, SuffixPolicy, MAX_DECIMAL_PLACES,
};

#[test]
fn test_reference_values() {
    assert_eq!(
        format_with_suffix_policy(2000.0, Currency::Inr, SuffixPolicy::Humanize),
        "2K"
    );
    assert_eq!(
        format_with_suffix_policy(1234.567, Currency::Inr, SuffixPolicy::Decimals),
        "1,234.56"
    );
    assert_eq!(
        format_with_suffix_policy(1234567.0, Currency::Usd, SuffixPolicy::None),
        "1,234,567"
    );
    assert_eq!(humanize(500.0, Currency::Inr), "500");
}

#[test]
fn test_floored_fixed_bounds_across_range() {
    let mut value = 0.013;
    while value < 1e9 {
        for places in 0..=3u32 {
            let floored = floored_fixed(value, places);
            assert!(floored <= value, "{} floored to {}", value, floored);
            assert!(value - floored < 10f64.powi(-(places as i32)));
            assert_eq!(floored_fixed(floored, places), floored);
        }
        value = value * 3.7 + 0.011;
    }
}

#[test]
fn test_high_precision_output_never_exceeds_input() {
    let values = [
        509263222938.7017,
        7713.365838829889,
        0.055172241254906496,
        98765432109.87654,
        0.3,
    ];
    for value in values {
        for places in [0, 2, 5, 10, 15, 17, MAX_DECIMAL_PLACES] {
            let input = AmountInput::new(value, Currency::Usd).with_decimal_places(places);
            let formatted = format_amount(&input).expect("valid input");
            let shown: f64 = formatted.value.replace(',', "").parse().expect("numeric");
            assert!(
                shown <= value,
                "{} at {} places shown as {}",
                value,
                places,
                formatted.value
            );
            assert_eq!(formatted.decimal_places, places);
        }
    }

    let input = AmountInput::new(509263222938.7017, Currency::Usd).with_decimal_places(5);
    assert_eq!(
        format_amount(&input).expect("valid input").value,
        "509,263,222,938.70170"
    );
}

#[test]
fn test_grouping_keeps_requested_precision() {
    for currency in Currency::ALL {
        for places in 0..=4u32 {
            let out = add_thousands_separators(floored_fixed(123456.789, places), currency, places);
            let digits = out.split_once('.').map(|(_, f)| f.len()).unwrap_or(0);
            assert_eq!(digits, places as usize, "{} {}", currency, out);
        }
    }
}

#[test]
fn test_same_value_different_grouping() {
    let value = 123456789.5;
    assert_eq!(
        format_with_suffix_policy(value, Currency::Inr, SuffixPolicy::Decimals),
        "12,34,56,789.50"
    );
    assert_eq!(
        format_with_suffix_policy(value, Currency::Usd, SuffixPolicy::Decimals),
        "123,456,789.50"
    );
    assert_eq!(
        format_with_suffix_policy(value, Currency::Myr, SuffixPolicy::Decimals),
        "123,456,789.50"
    );
}

#[test]
fn test_humanize_per_currency() {
    let value = 123456789.0;
    assert_eq!(humanize(value, Currency::Inr), "12.34Cr");
    assert_eq!(humanize(value, Currency::Usd), "123.45M");
}

#[test]
fn test_unrecognized_policy_names() {
    for name in ["", "compact", "Decimal", "humanise"] {
        assert_eq!(
            format_with_suffix_name(98765.4321, Currency::Inr, name),
            format_with_suffix_policy(98765.4321, Currency::Inr, SuffixPolicy::None),
            "policy {:?}",
            name
        );
    }
}

#[test]
fn test_strict_and_lenient_modes() {
    let input = AmountInput::new(42.0, Currency::Myr).with_intent(Intent::Neutral);

    let err = format_amount(&input).expect_err("neutral intent must be rejected");
    assert_eq!(err, AmountError::UnsupportedIntent("neutral".to_string()));

    let formatted = AmountFormatter::lenient()
        .format(&input)
        .expect("lenient mode formats anyway");
    assert_eq!(formatted.to_string(), "RM42.00");
}

#[test]
fn test_serialized_names() {
    let json = serde_json::to_value(Currency::Inr).expect("serialize currency");
    assert_eq!(json, serde_json::json!("INR"));

    let parsed: Currency = serde_json::from_str("\"usd\"").expect("parse currency");
    assert_eq!(parsed, Currency::Usd);

    let unknown = serde_json::from_str::<Currency>("\"XYZ\"");
    assert!(unknown.is_err());

    let policy: SuffixPolicy = serde_json::from_str("\"whatever\"").expect("lenient policy");
    assert_eq!(policy, SuffixPolicy::None);

    let indicator: CurrencyIndicator =
        serde_json::from_str("\"currency-code\"").expect("parse indicator");
    assert_eq!(indicator, CurrencyIndicator::CurrencyCode);
}

#[test]
fn test_formatted_amount_json_shape() {
    let input = AmountInput::new(1500.0, Currency::Usd).with_suffix(SuffixPolicy::Humanize);
    let formatted = format_amount(&input).expect("valid input");
    let json = serde_json::to_value(&formatted).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "currency": "USD",
            "indicator": "currency-symbol",
            "affix": "$",
            "value": "1.5K",
            "decimal_places": 2,
        })
    );
}

#[test]
fn test_formatter_shared_across_threads() {
    let formatter = AmountFormatter::strict();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            thread::spawn(move || {
                let input = AmountInput::new(1000.0 * (i + 1) as f64, Currency::Inr)
                    .with_suffix(SuffixPolicy::Humanize);
                formatter.format(&input).expect("valid input").value
            })
        })
        .collect();

    let results: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().expect("thread should not panic"))
        .collect();
    assert_eq!(results, vec!["1K", "2K", "3K", "4K"]);
}
