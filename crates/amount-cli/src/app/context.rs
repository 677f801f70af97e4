//! Application context for the Amount CLI.
//!
//! Bundles CLI arguments with the lazily-loaded config file.

use once_cell::unsync::OnceCell;

use crate::cli::Cli;
use crate::config::{load_config, AmountConfig};
use crate::ui::{OutputFormat, UiContext};

use super::resolver::{resolve_config_path, ConfigSource};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<AmountConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it on first use.
    ///
    /// A config path given explicitly must exist; the default path may not.
    pub fn config(&self) -> anyhow::Result<&AmountConfig> {
        self.config.get_or_try_init(|| {
            let source = resolve_config_path(self.cli)?;
            source.ensure_present()?;
            load_config(source.path())
        })
    }

    /// Where the config lives (or would be written).
    pub fn config_source(&self) -> anyhow::Result<ConfigSource> {
        resolve_config_path(self.cli)
    }

    /// UI context for warnings and errors on stderr; never reads the config.
    pub fn diagnostics_context(&self) -> UiContext {
        UiContext::for_errors(self.cli.no_color, self.cli.ascii)
    }

    /// Build the UI context for a command.
    ///
    /// `--ascii` on the command line or `ascii = true` in the config both
    /// disable unicode symbols. A config that cannot be loaded is an error
    /// here too, so every command reports it the same way.
    pub fn ui_context(
        &self,
        json: bool,
        format: Option<OutputFormat>,
    ) -> anyhow::Result<UiContext> {
        let ascii = self.cli.ascii || self.config()?.ui.ascii;
        Ok(UiContext::for_output(json, format, self.cli.no_color, ascii))
    }
}
