//! Amount CLI - currency-aware formatting for monetary values
//!
//! This is the command-line interface for Amount. It wraps the core
//! formatter with config defaults and human or machine readable output.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod logger;
mod output;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{currencies, format, init, misc};
use crate::ui::{print_diagnostic, Diagnostic, UiContext};

fn main() {
    let cli = Cli::parse();
    logger::init(cli.verbose, cli.quiet);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = UiContext::for_errors(cli.no_color, cli.ascii);
        let report = errors::classify(&e);
        let diagnostic = Diagnostic::error(&report.message)
            .with_code(report.code)
            .with_hint(report.hint.as_deref());
        print_diagnostic(&ui_ctx, &diagnostic);
        std::process::exit(report.exit_code);
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Format(args) => {
            format::handle_format(ctx, args)?;
        }
        Commands::Currencies(args) => {
            currencies::handle_currencies(ctx, args)?;
        }
        Commands::Init(args) => {
            init::handle_init(ctx, args)?;
        }
        Commands::Completions(args) => {
            misc::handle_completions(args)?;
        }
    }
    Ok(())
}
