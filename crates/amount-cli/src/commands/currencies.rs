use amount_core::Currency;

use crate::app::AppContext;
use crate::cli::CurrenciesArgs;
use crate::errors::CliError;
use crate::output::{abbreviation_summary, currency_json};
use crate::ui::{blank_line, header, parse_output_format, print, table, Column, OutputMode};

pub fn handle_currencies(ctx: &AppContext, args: &CurrenciesArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    if args.json && format.is_some() {
        return Err(CliError::invalid_input("--format cannot be used with --json").into());
    }

    let ui_ctx = ctx.ui_context(args.json, format)?;
    match ui_ctx.mode {
        OutputMode::Json => {
            let output: Vec<serde_json::Value> =
                Currency::ALL.iter().copied().map(currency_json).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputMode::Pretty | OutputMode::Plain => {
            if !ctx.quiet() && ui_ctx.mode.is_pretty() {
                print(&ui_ctx, &header(&ui_ctx, "currencies", None));
                blank_line(&ui_ctx);
            }
            let columns = [
                Column::text("CODE"),
                Column::text("SYMBOL"),
                Column::text("LOCALE"),
                Column::text("GROUPING"),
                Column::text("ABBREVIATIONS"),
            ];
            let rows: Vec<Vec<String>> = Currency::ALL
                .iter()
                .map(|currency| {
                    vec![
                        currency.code().to_string(),
                        currency.symbol().to_string(),
                        currency.locale().to_string(),
                        currency.grouping().as_str().to_string(),
                        abbreviation_summary(*currency),
                    ]
                })
                .collect();
            print(&ui_ctx, &table(&ui_ctx, &columns, &rows));
        }
    }
    Ok(())
}
