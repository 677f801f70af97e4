use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use amount_core::VERSION;

/// Amount - currency-aware formatting for monetary values
#[derive(Parser)]
#[command(name = "amount")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true, env = "AMOUNT_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `format` command
#[derive(Args)]
pub struct FormatArgs {
    /// Values to format (e.g. 1234.567)
    #[arg(value_name = "VALUE", required = true, allow_hyphen_values = true)]
    pub values: Vec<String>,

    /// Currency code (INR, MYR, USD)
    #[arg(short, long)]
    pub currency: Option<String>,

    /// Suffix policy (decimals, none, humanize)
    #[arg(short, long)]
    pub suffix: Option<String>,

    /// Fractional digits for the decimals policy
    #[arg(short, long, value_name = "N")]
    pub decimals: Option<u32>,

    /// Emphasis intent (positive, negative, notice, information)
    #[arg(long)]
    pub intent: Option<String>,

    /// Currency indicator (currency-symbol, currency-code)
    #[arg(long)]
    pub indicator: Option<String>,

    /// Report input violations as warnings instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `currencies` command
#[derive(Args)]
pub struct CurrenciesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Default currency written to the config
    #[arg(long)]
    pub currency: Option<String>,

    /// Default suffix policy written to the config
    #[arg(long)]
    pub suffix: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format one or more amounts
    Format(FormatArgs),

    /// List supported currencies and their abbreviation rules
    Currencies(CurrenciesArgs),

    /// Write a default config file
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
