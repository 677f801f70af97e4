//! Config path resolution.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::default_config_path;
use crate::errors::CliError;

/// A resolved config path and how it was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` or `AMOUNT_CONFIG`
    Explicit(PathBuf),
    /// XDG default location
    Default(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            Self::Explicit(path) | Self::Default(path) => path,
        }
    }

    /// An explicitly named config file must exist; the default one is optional.
    pub fn ensure_present(&self) -> Result<(), CliError> {
        match self {
            Self::Explicit(path) if !path.exists() => Err(missing_config_error(path)),
            _ => Ok(()),
        }
    }
}

pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<ConfigSource> {
    if let Some(value) = cli.config.as_deref() {
        if !value.trim().is_empty() {
            return Ok(ConfigSource::Explicit(PathBuf::from(value)));
        }
    }
    Ok(ConfigSource::Default(default_config_path()?))
}

pub fn missing_config_error(path: &Path) -> CliError {
    CliError::not_found(
        format!("No config found at {}", path.display()),
        format!(
            "Run `amount init --config {}` to create it, or drop --config to use defaults.",
            path.display()
        ),
    )
}
