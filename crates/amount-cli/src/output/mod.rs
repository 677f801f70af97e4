//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying amounts and
//! currency tables in JSON and text form.

mod json;
mod text;

// Re-export public API
pub use json::{amount_json, currency_json};
pub use text::abbreviation_summary;
