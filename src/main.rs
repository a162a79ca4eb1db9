//! lendlib CLI - lending library manager
//!
//! Usage: lendlib [--library PATH] [--json] [-v] <COMMAND>
//!
//! Commands:
//!   init      Create an empty library, optionally seeded from an import file
//!   import    Apply an import file
//!   date      Show or advance the library date
//!   user      Register, show, list users; read notifications; pay fines
//!   work      Catalogue, list, search works; change inventory
//!   request   Borrow and return works
//!   interest  Register availability/borrowing interest

mod commands;

use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::Parser;
use is_terminal::IsTerminal;

use lendlib::application::LibrarySession;
use lendlib::config::Config;
use lendlib::infrastructure::JsonSnapshotRepository;
use lendlib::presentation::cli::Cli;
use lendlib::presentation::{logging, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut format = OutputFormat::from_json_flag(cli.json);

    match run(cli, &mut format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, format);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, format: &mut OutputFormat) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to determine the working directory")?;
    let (mut config, warnings) = Config::load_layered(&cwd)?;

    if let Some(library) = cli.library {
        config.storage.snapshot = library;
    }
    config.output.json |= cli.json;
    *format = OutputFormat::from_json_flag(config.output.json);

    logging::init(config.output.verbosity.raised_by(cli.verbose));
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }
    tracing::debug!(library = %config.storage.snapshot.display(), "resolved library path");

    let ctx = commands::Context {
        session: LibrarySession::new(JsonSnapshotRepository::new(), config.storage.snapshot),
        format: *format,
        interactive: !format.is_json() && std::io::stdin().is_terminal(),
        default_import: config.storage.import,
    };

    let report = commands::dispatch(&ctx, cli.command)?;
    report.print(ctx.format);
    Ok(())
}

fn report_error(err: &anyhow::Error, format: OutputFormat) {
    if format.is_json() {
        let event = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        });
        println!("{}", event);
    } else {
        eprintln!("Error: {:#}", err);
    }
}
