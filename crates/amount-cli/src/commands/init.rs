use amount_core::Currency;

use crate::app::AppContext;
use crate::cli::InitArgs;
use crate::config::{default_currency, write_config, AmountConfig};
use crate::errors::CliError;
use crate::ui::{print, receipt};

use super::suffix_from_flag;

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let source = ctx.config_source()?;
    let path = source.path();
    if path.exists() && !args.force {
        return Err(CliError::invalid_input_with_hint(
            format!("Config already exists at {}", path.display()),
            "Pass --force to overwrite it.",
        )
        .into());
    }

    let currency = match args.currency.as_deref() {
        Some(code) => code.parse::<Currency>()?,
        None => default_currency(),
    };
    let suffix = args
        .suffix
        .as_deref()
        .map(|name| suffix_from_flag(ctx, name))
        .unwrap_or_default();

    let config = AmountConfig::new(currency, suffix);
    write_config(path, &config)?;
    log::debug!("wrote config to {}", path.display());

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None)?;
        let path_text = path.display().to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Wrote config",
                &[
                    ("Path", path_text.as_str()),
                    ("Currency", currency.code()),
                    ("Suffix", suffix.as_str()),
                ],
            ),
        );
    }
    Ok(())
}
