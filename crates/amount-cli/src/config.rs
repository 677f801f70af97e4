use std::path::{Path, PathBuf};

use amount_core::{Currency, CurrencyIndicator, SuffixPolicy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AmountConfig {
    #[serde(default)]
    pub format: FormatSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FormatSection {
    #[serde(default = "default_currency")]
    pub currency: Currency,
    #[serde(default)]
    pub suffix: SuffixPolicy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimal_places: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct UiSection {
    #[serde(default)]
    pub indicator: CurrencyIndicator,
    #[serde(default)]
    pub ascii: bool,
}

pub fn default_currency() -> Currency {
    Currency::Inr
}

impl Default for FormatSection {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            suffix: SuffixPolicy::default(),
            decimal_places: None,
        }
    }
}

impl AmountConfig {
    pub fn new(currency: Currency, suffix: SuffixPolicy) -> Self {
        Self {
            format: FormatSection {
                currency,
                suffix,
                decimal_places: None,
            },
            ui: UiSection::default(),
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// Read the config at `path`, or the built-in defaults when it does not exist.
pub fn load_config(path: &Path) -> anyhow::Result<AmountConfig> {
    if !path.exists() {
        log::debug!("no config at {}, using defaults", path.display());
        return Ok(AmountConfig::default());
    }
    read_config(path)
}

pub fn read_config(path: &Path) -> anyhow::Result<AmountConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &AmountConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("amount"));
        }
    }
    Ok(home_dir()?.join(".config").join("amount"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
