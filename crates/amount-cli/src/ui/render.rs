//! Rendering for amount tables, receipts and diagnostics.

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use super::context::UiContext;
use super::theme::{styled, styles, Badge};

/// "Amount · format (INR, decimals)" when pretty, "amount format" otherwise.
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    if !ctx.mode.is_pretty() {
        return format!("amount {}", command);
    }
    let mut line = format!(
        "{} \u{00B7} {}",
        styled("Amount", styles::bold(), ctx.color),
        command
    );
    if let Some(context) = context {
        line.push_str(&format!(" ({})", context));
    }
    line
}

/// How a column lines up its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    /// Amounts line up on their last digit
    Right,
}

#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
    pub align: Align,
}

impl Column {
    pub const fn text(header: &'static str) -> Self {
        Self {
            header,
            align: Align::Left,
        }
    }

    pub const fn amount(header: &'static str) -> Self {
        Self {
            header,
            align: Align::Right,
        }
    }
}

/// Render rows under `columns`.
///
/// Pretty mode draws a borderless table with a dim header that fits the
/// terminal width. Plain mode writes one tab-separated line per row.
pub fn table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = Table::new();
    table
        .load_preset(comfy_table::presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(u16::try_from(ctx.width).unwrap_or(u16::MAX))
        .set_header(columns.iter().map(|column| {
            let cell = Cell::new(column.header);
            if ctx.color {
                cell.add_attribute(Attribute::Dim)
            } else {
                cell
            }
        }));

    for (index, column) in columns.iter().enumerate() {
        if let Some(table_column) = table.column_mut(index) {
            table_column.set_padding((0, 2));
            if column.align == Align::Right {
                table_column.set_cell_alignment(CellAlignment::Right);
            }
        }
    }
    for row in rows {
        table.add_row(row);
    }
    table.to_string()
}

/// Summary after a write: a badge line and the values that were written.
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, &str)]) -> String {
    let mut lines = Vec::with_capacity(items.len() + 1);
    if ctx.mode.is_pretty() {
        lines.push(with_badge(ctx, Badge::Ok, title));
        lines.extend(items.iter().map(|(key, value)| {
            let key = styled(&format!("{}:", key), styles::dim(), ctx.color);
            format!("  {} {}", key, value)
        }));
    } else {
        lines.push("status=ok".to_string());
        lines.extend(
            items
                .iter()
                .map(|(key, value)| format!("{}={}", field_name(key), value)),
        );
    }
    lines.join("\n")
}

/// A failure or warning reported on stderr.
#[derive(Debug, Clone, Copy)]
pub struct Diagnostic<'a> {
    pub badge: Badge,
    pub message: &'a str,
    /// Machine-readable error kind, e.g. `unknown_currency`
    pub code: Option<&'a str>,
    pub hint: Option<&'a str>,
}

impl<'a> Diagnostic<'a> {
    pub fn error(message: &'a str) -> Self {
        Self {
            badge: Badge::Err,
            message,
            code: None,
            hint: None,
        }
    }

    pub fn warning(message: &'a str) -> Self {
        Self {
            badge: Badge::Warn,
            ..Self::error(message)
        }
    }

    pub fn with_code(self, code: Option<&'a str>) -> Self {
        Self { code, ..self }
    }

    pub fn with_hint(self, hint: Option<&'a str>) -> Self {
        Self { hint, ..self }
    }

    /// Pretty: "[✗] message (code)" and a "Hint:" line.
    /// Plain: `error=`/`warning=`, `code=` and `hint=` lines.
    pub fn render(&self, ctx: &UiContext) -> String {
        let mut lines = Vec::with_capacity(3);
        if ctx.mode.is_pretty() {
            let mut first = with_badge(ctx, self.badge, self.message);
            if let Some(code) = self.code {
                first.push(' ');
                first.push_str(&styled(&format!("({})", code), styles::dim(), ctx.color));
            }
            lines.push(first);
            if let Some(hint) = self.hint {
                lines.push(format!("{} {}", styled("Hint:", styles::dim(), ctx.color), hint));
            }
        } else {
            let label = if self.badge == Badge::Warn {
                "warning"
            } else {
                "error"
            };
            lines.push(format!("{}={}", label, self.message));
            lines.extend(self.code.map(|code| format!("code={}", code)));
            lines.extend(self.hint.map(|hint| format!("hint={}", hint)));
        }
        lines.join("\n")
    }
}

/// Write to stdout unless the command is producing JSON.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Spacer between a header and a table; pretty mode only.
pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

pub fn print_diagnostic(ctx: &UiContext, diagnostic: &Diagnostic<'_>) {
    eprintln!("{}", diagnostic.render(ctx));
}

pub fn print_warning(ctx: &UiContext, message: &str) {
    print_diagnostic(ctx, &Diagnostic::warning(message));
}

fn with_badge(ctx: &UiContext, badge: Badge, message: &str) -> String {
    format!(
        "{} {}",
        styled(badge.display(ctx.unicode), badge.style(), ctx.color),
        message
    )
}

/// "Config Path" -> "config_path"
fn field_name(key: &str) -> String {
    key.to_ascii_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;

    fn ctx(mode: OutputMode) -> UiContext {
        UiContext {
            color: false,
            unicode: true,
            width: 80,
            mode,
        }
    }

    #[test]
    fn test_header() {
        assert_eq!(
            header(&ctx(OutputMode::Pretty), "format", Some("INR, decimals")),
            "Amount \u{00B7} format (INR, decimals)"
        );
        assert_eq!(header(&ctx(OutputMode::Plain), "format", None), "amount format");
    }

    #[test]
    fn test_receipt() {
        let items = [("Config Path", "/tmp/c.toml"), ("Currency", "INR")];
        assert_eq!(
            receipt(&ctx(OutputMode::Plain), "Wrote config", &items),
            "status=ok\nconfig_path=/tmp/c.toml\ncurrency=INR"
        );
        let pretty = receipt(&ctx(OutputMode::Pretty), "Wrote config", &items);
        assert!(pretty.starts_with("[\u{2713}] Wrote config"));
        assert!(pretty.contains("  Currency: INR"));
    }

    #[test]
    fn test_plain_table_is_tab_separated() {
        let columns = [Column::text("INPUT"), Column::amount("FORMATTED")];
        let rows = vec![vec!["1234.5".to_string(), "$1,234.50".to_string()]];
        assert_eq!(
            table(&ctx(OutputMode::Plain), &columns, &rows),
            "1234.5\t$1,234.50"
        );
    }

    #[test]
    fn test_pretty_table_right_aligns_amounts() {
        let columns = [Column::text("INPUT"), Column::amount("FORMATTED")];
        let rows = vec![
            vec!["5".to_string(), "$5.00".to_string()],
            vec!["1234.5".to_string(), "$1,234.50".to_string()],
        ];
        let out = table(&ctx(OutputMode::Pretty), &columns, &rows);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].contains("INPUT") && lines[0].contains("FORMATTED"));
        let short = lines.iter().find(|l| l.contains("$5.00")).expect("row");
        let long = lines.iter().find(|l| l.contains("$1,234.50")).expect("row");
        assert_eq!(
            short.trim_end().find("$5.00").map(|i| i + "$5.00".len()),
            long.trim_end().find("$1,234.50").map(|i| i + "$1,234.50".len())
        );
    }

    #[test]
    fn test_diagnostic_plain_carries_code_and_hint() {
        let out = Diagnostic::error("Unknown currency: XYZ")
            .with_code(Some("unknown_currency"))
            .with_hint(Some("list them"))
            .render(&ctx(OutputMode::Plain));
        assert_eq!(
            out,
            "error=Unknown currency: XYZ\ncode=unknown_currency\nhint=list them"
        );
    }

    #[test]
    fn test_diagnostic_pretty() {
        let pretty = ctx(OutputMode::Pretty);
        assert_eq!(Diagnostic::error("bad").render(&pretty), "[\u{2717}] bad");
        assert_eq!(
            Diagnostic::error("bad")
                .with_code(Some("invalid_value"))
                .with_hint(Some("try 12.5"))
                .render(&pretty),
            "[\u{2717}] bad (invalid_value)\nHint: try 12.5"
        );
        assert_eq!(
            Diagnostic::warning("odd").render(&ctx(OutputMode::Plain)),
            "warning=odd"
        );
    }
}
