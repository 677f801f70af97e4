//! Formatting inputs and the validation layer.
//!
//! `AmountInput::validate` is the single place input-contract violations are
//! detected. Callers decide what a violation means through
//! [`crate::ValidationMode`].

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::currency::{Currency, CurrencyIndicator};
use crate::error::{AmountError, Result};
use crate::suffix::SuffixPolicy;

/// Largest fractional precision accepted at the API boundary.
pub const MAX_DECIMAL_PLACES: u32 = 20;

/// Emphasis category requested by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Positive,
    Negative,
    Notice,
    Information,
    /// Not allowed on amounts
    Neutral,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Notice => "notice",
            Self::Information => "information",
            Self::Neutral => "neutral",
        }
    }

    pub fn is_allowed(&self) -> bool {
        !matches!(self, Self::Neutral)
    }
}

impl FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            "notice" => Ok(Self::Notice),
            "information" => Ok(Self::Information),
            "neutral" => Ok(Self::Neutral),
            other => Err(format!(
                "Invalid intent: {} (use positive, negative, notice or information)",
                other
            )),
        }
    }
}

impl Display for Intent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse user-supplied text into a finite amount.
///
/// Surrounding whitespace is ignored. Text that is not a number, or that
/// parses to NaN or an infinity, is rejected.
pub fn parse_value(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| AmountError::InvalidValue(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(AmountError::InvalidValue(trimmed.to_string()));
    }
    Ok(value)
}

/// Everything needed to format one amount.
#[derive(Debug, Clone, PartialEq)]
pub struct AmountInput {
    /// Raw monetary value
    pub value: f64,

    pub currency: Currency,

    pub suffix: SuffixPolicy,

    /// Fractional digits for the `decimals` policy (default 2)
    pub decimal_places: Option<u32>,

    /// Requested emphasis, checked but not rendered
    pub intent: Option<Intent>,

    /// Symbol or ISO code affix
    pub indicator: CurrencyIndicator,
}

impl AmountInput {
    pub fn new(value: f64, currency: Currency) -> Self {
        Self {
            value,
            currency,
            suffix: SuffixPolicy::default(),
            decimal_places: None,
            intent: None,
            indicator: CurrencyIndicator::default(),
        }
    }

    pub fn with_suffix(mut self, suffix: SuffixPolicy) -> Self {
        self.suffix = suffix;
        self
    }

    pub fn with_decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = Some(decimal_places);
        self
    }

    pub fn with_intent(mut self, intent: Intent) -> Self {
        self.intent = Some(intent);
        self
    }

    pub fn with_indicator(mut self, indicator: CurrencyIndicator) -> Self {
        self.indicator = indicator;
        self
    }

    /// Precision the formatter will use for this input.
    ///
    /// The override only applies to the `decimals` policy; `none` always
    /// shows whole units and `humanize` keeps at most two digits.
    pub fn resolved_decimal_places(&self) -> u32 {
        match self.suffix {
            SuffixPolicy::Decimals => self
                .decimal_places
                .unwrap_or_else(|| self.suffix.default_decimal_places()),
            SuffixPolicy::None | SuffixPolicy::Humanize => self.suffix.default_decimal_places(),
        }
    }

    /// Every input-contract violation, in check order.
    pub fn violations(&self) -> Vec<AmountError> {
        let mut violations = Vec::new();

        if !self.value.is_finite() {
            violations.push(AmountError::InvalidValue(self.value.to_string()));
        }
        if let Some(intent) = self.intent {
            if !intent.is_allowed() {
                violations.push(AmountError::UnsupportedIntent(intent.to_string()));
            }
        }
        if let Some(requested) = self.decimal_places {
            if requested > MAX_DECIMAL_PLACES {
                violations.push(AmountError::DecimalPlacesOutOfRange {
                    requested,
                    max: MAX_DECIMAL_PLACES,
                });
            }
        }

        violations
    }

    /// Check the input contract, returning the first violation.
    pub fn validate(&self) -> Result<()> {
        match self.violations().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// A formatted amount split into its currency affix and value text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedAmount {
    pub currency: Currency,
    pub indicator: CurrencyIndicator,
    /// "₹" or "INR"
    pub affix: String,
    /// "1,234.56", "2K"
    pub value: String,
    /// Fractional digits actually used, after any clamping
    pub decimal_places: u32,
}

impl FormattedAmount {
    pub fn new(
        currency: Currency,
        indicator: CurrencyIndicator,
        value: String,
        decimal_places: u32,
    ) -> Self {
        Self {
            currency,
            indicator,
            affix: currency.affix(indicator).to_string(),
            value,
            decimal_places,
        }
    }
}

impl Display for FormattedAmount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.indicator {
            CurrencyIndicator::CurrencySymbol => write!(f, "{}{}", self.affix, self.value),
            CurrencyIndicator::CurrencyCode => write!(f, "{} {}", self.affix, self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value(" 1234.5 ").unwrap(), 1234.5);
        assert_eq!(parse_value("-7").unwrap(), -7.0);
        assert_eq!(parse_value("1e3").unwrap(), 1000.0);
    }

    #[test]
    fn test_parse_value_rejects_non_numbers() {
        for text in ["", "abc", "12,000", "NaN", "inf", "-infinity"] {
            let err = parse_value(text).expect_err("must fail");
            assert!(matches!(err, AmountError::InvalidValue(_)), "{}", text);
        }
    }

    #[test]
    fn test_validate_accepts_plain_input() {
        let input = AmountInput::new(1234.5, Currency::Inr).with_intent(Intent::Positive);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_neutral_intent() {
        let input = AmountInput::new(10.0, Currency::Usd).with_intent(Intent::Neutral);
        assert_eq!(
            input.validate(),
            Err(AmountError::UnsupportedIntent("neutral".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let input = AmountInput::new(f64::NAN, Currency::Usd);
        assert!(matches!(
            input.validate(),
            Err(AmountError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_violations_collects_everything() {
        let input = AmountInput::new(f64::INFINITY, Currency::Usd)
            .with_intent(Intent::Neutral)
            .with_decimal_places(MAX_DECIMAL_PLACES + 1);
        assert_eq!(input.violations().len(), 3);
    }

    #[test]
    fn test_resolved_decimal_places() {
        let input = AmountInput::new(1.0, Currency::Inr);
        assert_eq!(input.resolved_decimal_places(), 2);
        assert_eq!(
            input.clone().with_decimal_places(4).resolved_decimal_places(),
            4
        );
        assert_eq!(
            input
                .with_suffix(SuffixPolicy::None)
                .with_decimal_places(4)
                .resolved_decimal_places(),
            0
        );
    }

    #[test]
    fn test_formatted_amount_display() {
        let symbol = FormattedAmount::new(
            Currency::Usd,
            CurrencyIndicator::CurrencySymbol,
            "1,234.56".to_string(),
            2,
        );
        assert_eq!(symbol.to_string(), "$1,234.56");

        let code = FormattedAmount::new(
            Currency::Inr,
            CurrencyIndicator::CurrencyCode,
            "2K".to_string(),
            2,
        );
        assert_eq!(code.to_string(), "INR 2K");
    }

    #[test]
    fn test_intent_parse() {
        assert_eq!("Notice".parse::<Intent>().unwrap(), Intent::Notice);
        assert!("loud".parse::<Intent>().is_err());
    }
}
