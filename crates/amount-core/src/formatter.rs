//! Validated entry point for formatting amounts.

use crate::error::Result;
use crate::format::{format_fixed, format_with_suffix_policy};
use crate::input::{AmountInput, FormattedAmount, MAX_DECIMAL_PLACES};
use crate::suffix::SuffixPolicy;

/// What the formatter does with input-contract violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Return the first violation as an error
    #[default]
    Strict,
    /// Log every violation at `warn` and format anyway
    Lenient,
}

/// Formats [`AmountInput`]s under a fixed validation mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmountFormatter {
    mode: ValidationMode,
}

impl AmountFormatter {
    pub fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    pub fn strict() -> Self {
        Self::new(ValidationMode::Strict)
    }

    pub fn lenient() -> Self {
        Self::new(ValidationMode::Lenient)
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Validate `input` according to the mode, then format it.
    ///
    /// In lenient mode the result is always `Ok`: non-finite values render
    /// in their plain string form and oversized precision is clamped.
    pub fn format(&self, input: &AmountInput) -> Result<FormattedAmount> {
        match self.mode {
            ValidationMode::Strict => input.validate()?,
            ValidationMode::Lenient => {
                for violation in input.violations() {
                    log::warn!("{} (formatting anyway)", violation);
                }
            }
        }

        let places = input.resolved_decimal_places().min(MAX_DECIMAL_PLACES);
        let value = match input.suffix {
            SuffixPolicy::Decimals => format_fixed(input.value, input.currency, places),
            policy => format_with_suffix_policy(input.value, input.currency, policy),
        };

        Ok(FormattedAmount::new(
            input.currency,
            input.indicator,
            value,
            places,
        ))
    }
}

/// Format with a strict formatter.
pub fn format_amount(input: &AmountInput) -> Result<FormattedAmount> {
    AmountFormatter::strict().format(input)
}
