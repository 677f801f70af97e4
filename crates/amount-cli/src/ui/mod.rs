//! UI primitives for the Amount CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges and text styles
//! - **Render**: Headers, tables, receipts, diagnostics
//! - **Format**: Cell truncation

mod context;
mod format;
mod mode;
mod render;
mod theme;

pub use context::UiContext;
pub use mode::{parse_output_format, OutputFormat, OutputMode};

pub use render::{
    blank_line, header, print, print_diagnostic, print_warning, receipt, table, Column, Diagnostic,
};

pub use format::truncate;
