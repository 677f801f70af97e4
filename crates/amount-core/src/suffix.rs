//! Suffix policies: how the fractional part and magnitude are displayed.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Display policy for the tail of an amount.
///
/// Parsing is lenient: any name that is not recognized becomes
/// [`SuffixPolicy::None`], so configs written for newer policies keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SuffixPolicy {
    /// Two fractional digits, floored: `1,234.56`
    #[default]
    Decimals,
    /// Whole units, floored: `1,234`
    None,
    /// Magnitude abbreviation: `1.23K`, `4.5Cr`
    Humanize,
}

impl SuffixPolicy {
    pub const ALL: [SuffixPolicy; 3] = [Self::Decimals, Self::None, Self::Humanize];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Decimals => "decimals",
            Self::None => "none",
            Self::Humanize => "humanize",
        }
    }

    /// Resolve a policy name, falling back to `none` for anything unknown.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "decimals" => Self::Decimals,
            "humanize" => Self::Humanize,
            "none" => Self::None,
            other => {
                log::debug!("unrecognized suffix policy {:?}, using \"none\"", other);
                Self::None
            }
        }
    }

    /// Fractional digits shown when the caller does not override them.
    pub fn default_decimal_places(&self) -> u32 {
        match self {
            Self::Decimals | Self::Humanize => 2,
            Self::None => 0,
        }
    }
}

impl Display for SuffixPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SuffixPolicy {
    fn from(value: &str) -> Self {
        Self::from_name(value)
    }
}

impl From<String> for SuffixPolicy {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl From<SuffixPolicy> for String {
    fn from(value: SuffixPolicy) -> Self {
        value.as_str().to_string()
    }
}
