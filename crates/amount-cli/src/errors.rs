//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes so failures are reported
//! consistently across commands.

use std::fmt;

use amount_core::AmountError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config file)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput {
        message: String,
        hint: Option<String>,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, .. } => write!(f, "{}", message),
            CliError::InvalidInput { message, .. } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: None,
        }
    }

    /// Create an InvalidInput error with a hint.
    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. } => Some(hint),
            CliError::InvalidInput { hint, .. } => hint.as_deref(),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
        }
    }
}

impl From<AmountError> for CliError {
    fn from(err: AmountError) -> Self {
        let hint = match &err {
            AmountError::InvalidValue(_) => {
                "Pass plain numbers without separators, e.g. 1234567.89"
            }
            AmountError::UnsupportedIntent(_) => {
                "Use positive, negative, notice or information, or pass --lenient."
            }
            AmountError::UnknownCurrency(_) => {
                "Run `amount currencies` to see supported currencies."
            }
            AmountError::DecimalPlacesOutOfRange { .. } => {
                "Lower --decimals, or pass --lenient to clamp it."
            }
        };
        CliError::invalid_input_with_hint(err.to_string(), hint)
    }
}

/// Everything needed to report a failed command.
#[derive(Debug)]
pub struct ErrorReport {
    pub message: String,
    /// Formatter error kind, when the failure came from the formatter
    pub code: Option<&'static str>,
    pub hint: Option<String>,
    pub exit_code: i32,
}

impl ErrorReport {
    fn from_cli(err: &CliError, code: Option<&'static str>) -> Self {
        Self {
            message: err.to_string(),
            code,
            hint: err.hint().map(String::from),
            exit_code: err.exit_code(),
        }
    }
}

/// Resolve the message, code, hint and exit code for any command error.
pub fn classify(err: &anyhow::Error) -> ErrorReport {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return ErrorReport::from_cli(cli_err, None);
    }
    if let Some(amount_err) = err.downcast_ref::<AmountError>() {
        let cli_err = CliError::from(amount_err.clone());
        return ErrorReport::from_cli(&cli_err, Some(amount_err.code()));
    }
    ErrorReport {
        message: format!("{:#}", err),
        code: None,
        hint: None,
        exit_code: exit_codes::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_errors_are_invalid_input() {
        let err = CliError::from(AmountError::UnknownCurrency("XYZ".into()));
        assert_eq!(err.exit_code(), exit_codes::INVALID_INPUT);
        assert!(err.hint().unwrap().contains("amount currencies"));
    }

    #[test]
    fn test_classify_downcasts() {
        let err = anyhow::Error::new(AmountError::InvalidValue("abc".into()));
        let report = classify(&err);
        assert!(report.message.contains("abc"));
        assert_eq!(report.code, Some("invalid_value"));
        assert!(report.hint.is_some());
        assert_eq!(report.exit_code, exit_codes::INVALID_INPUT);

        let err = anyhow::Error::new(CliError::not_found("No config", "run init"));
        let report = classify(&err);
        assert_eq!(report.code, None);
        assert_eq!(report.exit_code, exit_codes::NOT_FOUND);

        let err = anyhow::anyhow!("something else");
        assert_eq!(classify(&err).exit_code, exit_codes::FAILURE);
    }
}
