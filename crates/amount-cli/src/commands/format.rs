use amount_core::{
    parse_value, AmountError, AmountFormatter, AmountInput, Currency, CurrencyIndicator,
    FormattedAmount, Intent,
};

use crate::app::AppContext;
use crate::cli::FormatArgs;
use crate::errors::CliError;
use crate::output::amount_json;
use crate::ui::{
    blank_line, header, parse_output_format, print, table, truncate, Column, OutputMode,
};

use super::suffix_from_flag;

struct FormattedRow<'a> {
    text: &'a str,
    input: AmountInput,
    formatted: FormattedAmount,
}

pub fn handle_format(ctx: &AppContext, args: &FormatArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    if args.json && format.is_some() {
        return Err(CliError::invalid_input("--format cannot be used with --json").into());
    }

    let config = ctx.config()?;
    let ui_ctx = ctx.ui_context(args.json, format)?;
    let currency = match args.currency.as_deref() {
        Some(code) => code.parse::<Currency>()?,
        None => config.format.currency,
    };
    let suffix = match args.suffix.as_deref() {
        Some(name) => suffix_from_flag(ctx, name),
        None => config.format.suffix,
    };
    let decimal_places = args.decimals.or(config.format.decimal_places);
    let intent = args
        .intent
        .as_deref()
        .map(str::parse::<Intent>)
        .transpose()
        .map_err(CliError::invalid_input)?;
    let indicator = args
        .indicator
        .as_deref()
        .map(str::parse::<CurrencyIndicator>)
        .transpose()
        .map_err(CliError::invalid_input)?
        .unwrap_or(config.ui.indicator);

    let formatter = if args.lenient {
        AmountFormatter::lenient()
    } else {
        AmountFormatter::strict()
    };
    log::debug!(
        "formatting {} value(s) as {} / {} ({:?})",
        args.values.len(),
        currency,
        suffix,
        formatter.mode()
    );

    let mut rows = Vec::with_capacity(args.values.len());
    for text in &args.values {
        let value = parse_input_value(text, args.lenient)?;
        let mut input = AmountInput::new(value, currency)
            .with_suffix(suffix)
            .with_indicator(indicator);
        if let Some(places) = decimal_places {
            input = input.with_decimal_places(places);
        }
        if let Some(intent) = intent {
            input = input.with_intent(intent);
        }
        let formatted = formatter.format(&input)?;
        rows.push(FormattedRow {
            text: text.as_str(),
            input,
            formatted,
        });
    }

    match ui_ctx.mode {
        OutputMode::Json => {
            let output: Vec<serde_json::Value> = rows
                .iter()
                .map(|row| amount_json(row.text, &row.input, &row.formatted))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputMode::Pretty => {
            if !ctx.quiet() {
                let context = format!("{}, {}", currency, suffix);
                print(&ui_ctx, &header(&ui_ctx, "format", Some(&context)));
                blank_line(&ui_ctx);
            }
            let formatted: Vec<String> = rows.iter().map(|row| row.formatted.to_string()).collect();
            let widest = formatted
                .iter()
                .map(|text| text.chars().count())
                .max()
                .unwrap_or(0);
            let input_width = ui_ctx.input_column_width(widest);
            let columns = [Column::text("INPUT"), Column::amount("FORMATTED")];
            let table_rows: Vec<Vec<String>> = rows
                .iter()
                .zip(formatted)
                .map(|(row, text)| vec![truncate(row.text.trim(), input_width), text])
                .collect();
            print(&ui_ctx, &table(&ui_ctx, &columns, &table_rows));
        }
        OutputMode::Plain => {
            for row in &rows {
                print(&ui_ctx, &row.formatted.to_string());
            }
        }
    }
    Ok(())
}

/// Strict parsing rejects NaN and infinities; lenient parsing lets them
/// through to the formatter, which reports them as warnings.
fn parse_input_value(text: &str, lenient: bool) -> Result<f64, AmountError> {
    if lenient {
        text.trim()
            .parse::<f64>()
            .map_err(|_| AmountError::InvalidValue(text.trim().to_string()))
    } else {
        parse_value(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_value_strict() {
        assert_eq!(parse_input_value("12.5", false).unwrap(), 12.5);
        assert!(parse_input_value("NaN", false).is_err());
        assert!(parse_input_value("twelve", false).is_err());
    }

    #[test]
    fn test_parse_input_value_lenient() {
        assert!(parse_input_value("NaN", true).unwrap().is_nan());
        assert!(parse_input_value("twelve", true).is_err());
    }
}
