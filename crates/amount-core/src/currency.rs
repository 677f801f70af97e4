//! Currency configuration tables.
//!
//! Every supported currency owns a fixed row of configuration: ISO code,
//! display symbol, digit grouping convention and abbreviation rules. The
//! tables are `static` data and are never mutated.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AmountError;

/// A magnitude abbreviation (e.g. 1e5 -> "L").
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbbreviationRule {
    /// Smallest value this rule applies to (inclusive)
    pub threshold: f64,
    /// Suffix appended to the scaled value
    pub symbol: &'static str,
}

impl AbbreviationRule {
    pub const fn new(threshold: f64, symbol: &'static str) -> Self {
        Self { threshold, symbol }
    }
}

/// Rules are ordered by strictly decreasing threshold.
static INDIAN_ABBREVIATIONS: [AbbreviationRule; 3] = [
    AbbreviationRule::new(10_000_000.0, "Cr"),
    AbbreviationRule::new(100_000.0, "L"),
    AbbreviationRule::new(1_000.0, "K"),
];

static WESTERN_ABBREVIATIONS: [AbbreviationRule; 3] = [
    AbbreviationRule::new(1_000_000_000.0, "B"),
    AbbreviationRule::new(1_000_000.0, "M"),
    AbbreviationRule::new(1_000.0, "K"),
];

/// How the integer digits of an amount are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigitGrouping {
    /// Groups of three: 1,234,567
    Western,
    /// Last three digits, then groups of two: 12,34,567
    Indian,
}

impl DigitGrouping {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Western => "western",
            Self::Indian => "indian",
        }
    }
}

/// Whether the currency affix is shown as a symbol or an ISO code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CurrencyIndicator {
    /// "₹", "$", "RM"
    #[default]
    CurrencySymbol,
    /// "INR", "USD", "MYR"
    CurrencyCode,
}

impl FromStr for CurrencyIndicator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "currency-symbol" | "symbol" => Ok(Self::CurrencySymbol),
            "currency-code" | "code" => Ok(Self::CurrencyCode),
            other => Err(format!(
                "Invalid currency indicator: {} (use currency-symbol or currency-code)",
                other
            )),
        }
    }
}

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Currency {
    Inr,
    Myr,
    Usd,
}

impl Currency {
    /// Every currency present in the tables.
    pub const ALL: [Currency; 3] = [Currency::Inr, Currency::Myr, Currency::Usd];

    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Inr => "INR",
            Self::Myr => "MYR",
            Self::Usd => "USD",
        }
    }

    /// Display symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Inr => "\u{20B9}", // ₹
            Self::Myr => "RM",
            Self::Usd => "$",
        }
    }

    /// Locale tag the grouping convention is taken from.
    pub fn locale(&self) -> &'static str {
        match self {
            Self::Inr => "en-IN",
            Self::Myr => "en-MY",
            Self::Usd => "en-US",
        }
    }

    pub fn grouping(&self) -> DigitGrouping {
        match self {
            Self::Inr => DigitGrouping::Indian,
            Self::Myr | Self::Usd => DigitGrouping::Western,
        }
    }

    /// Abbreviation rules in strictly decreasing threshold order.
    pub fn abbreviations(&self) -> &'static [AbbreviationRule] {
        match self {
            Self::Inr => &INDIAN_ABBREVIATIONS,
            Self::Myr | Self::Usd => &WESTERN_ABBREVIATIONS,
        }
    }

    /// Affix text for the given indicator.
    pub fn affix(&self, indicator: CurrencyIndicator) -> &'static str {
        match indicator {
            CurrencyIndicator::CurrencySymbol => self.symbol(),
            CurrencyIndicator::CurrencyCode => self.code(),
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        Currency::ALL
            .into_iter()
            .find(|currency| currency.code() == normalized)
            .ok_or_else(|| AmountError::UnknownCurrency(s.trim().to_string()))
    }
}

impl TryFrom<String> for Currency {
    type Error = AmountError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.code().to_string()
    }
}
