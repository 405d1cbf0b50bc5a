use std::process::ExitCode;

use clap::Parser;
use formtool::inspect::{InspectCommand, InspectHandler};
use log::LevelFilter;

/// Inspect declarative form definitions.
#[derive(Parser, Debug)]
#[command(name = "formtool", version, about)]
struct Cli {
    /// Enable debug logging (overridden by `RUST_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: InspectCommand,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let report = InspectHandler::handle(cli.command)?;
    println!("{}", report.output);

    Ok(if report.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
