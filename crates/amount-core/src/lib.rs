//! # Amount Core
//!
//! Core library for Amount - currency-aware formatting of monetary values for
//! display components.
//!
//! This crate provides the formatting pipeline, the per-currency
//! configuration tables and the validation layer, independent of any
//! presentation layer.
//!
//! ## Architecture
//!
//! - **currency**: Currency tables (code, symbol, digit grouping, abbreviations)
//! - **number**: Floor rounding and digit grouping primitives
//! - **suffix**: Suffix policies (`decimals`, `none`, `humanize`)
//! - **format**: Policy dispatch and magnitude abbreviation
//! - **input**: Formatting inputs and input-contract validation
//! - **formatter**: Strict / lenient formatting entry point
//!
//! ## Example
//!
//! ```
//! use amount_core::{format_with_suffix_policy, Currency, SuffixPolicy};
//!
//! assert_eq!(
//!     format_with_suffix_policy(1234.567, Currency::Inr, SuffixPolicy::Decimals),
//!     "1,234.56"
//! );
//! assert_eq!(
//!     format_with_suffix_policy(2000.0, Currency::Inr, SuffixPolicy::Humanize),
//!     "2K"
//! );
//! ```

pub mod currency;
pub mod error;
pub mod format;
pub mod formatter;
pub mod input;
pub mod number;
pub mod suffix;

pub use currency::{AbbreviationRule, Currency, CurrencyIndicator, DigitGrouping};
pub use error::{AmountError, Result};
pub use format::{
    format_fixed, format_with_suffix_name, format_with_suffix_policy, humanize,
    select_abbreviation,
};
pub use formatter::{format_amount, AmountFormatter, ValidationMode};
pub use input::{parse_value, AmountInput, FormattedAmount, Intent, MAX_DECIMAL_PLACES};
pub use number::{add_thousands_separators, floored_fixed};
pub use suffix::SuffixPolicy;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
