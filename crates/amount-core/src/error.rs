//! Error types for amount formatting.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to exit codes and user-friendly messages.

use thiserror::Error;

/// Result type alias for formatting operations.
pub type Result<T> = std::result::Result<T, AmountError>;

/// Core error type for input-contract violations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AmountError {
    /// The value is not a usable number (unparsable, NaN or infinite)
    #[error("Invalid value: {0} (expected a finite number)")]
    InvalidValue(String),

    /// The requested intent is not allowed on amounts
    #[error("Unsupported intent: {0} (amounts cannot use the `{0}` intent)")]
    UnsupportedIntent(String),

    /// The currency code is not present in the currency tables
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// More fractional digits were requested than the formatter supports
    #[error("Decimal places out of range: {requested} (max {max})")]
    DecimalPlacesOutOfRange { requested: u32, max: u32 },
}

impl AmountError {
    /// Short machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidValue(_) => "invalid_value",
            Self::UnsupportedIntent(_) => "unsupported_intent",
            Self::UnknownCurrency(_) => "unknown_currency",
            Self::DecimalPlacesOutOfRange { .. } => "decimal_places_out_of_range",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_input() {
        let err = AmountError::UnknownCurrency("XYZ".to_string());
        assert_eq!(err.to_string(), "Unknown currency: XYZ");

        let err = AmountError::DecimalPlacesOutOfRange {
            requested: 30,
            max: 20,
        };
        assert_eq!(err.to_string(), "Decimal places out of range: 30 (max 20)");
    }

    #[test]
    fn test_codes() {
        assert_eq!(
            AmountError::InvalidValue("abc".into()).code(),
            "invalid_value"
        );
        assert_eq!(
            AmountError::UnsupportedIntent("neutral".into()).code(),
            "unsupported_intent"
        );
    }
}
