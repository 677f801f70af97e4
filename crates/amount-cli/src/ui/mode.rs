//! Output mode routing logic.

use crate::errors::CliError;

/// Value of the `--format` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

/// Parse the `--format` flag.
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(None),
        Some(v) if v == "table" => Ok(Some(OutputFormat::Table)),
        Some(v) if v == "plain" => Ok(Some(OutputFormat::Plain)),
        Some(v) => Err(CliError::invalid_input_with_hint(
            format!("Invalid format: {}", v),
            "Use --format table or --format plain.",
        )
        .into()),
    }
}

/// Output mode determines how results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON output only
    Json,
    /// One value per line, stable for scripts
    #[default]
    Plain,
    /// Headers and tables for humans
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from flags and environment.
    ///
    /// Routing rules:
    /// 1. `--json` overrides everything
    /// 2. `--format` picks plain or table explicitly
    /// 3. `TERM=dumb` forces plain
    /// 4. Pretty only when stdout is a TTY
    pub fn resolve(
        json_flag: bool,
        format: Option<OutputFormat>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        if json_flag {
            return Self::Json;
        }

        match format {
            Some(OutputFormat::Plain) => Self::Plain,
            Some(OutputFormat::Table) => Self::Pretty,
            None if term_is_dumb => Self::Plain,
            None if is_tty => Self::Pretty,
            None => Self::Plain,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
