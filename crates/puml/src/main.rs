//! PUML CLI - PlantUML server rendering.
//!
//! Encodes diagram source for a PlantUML server and optionally fetches the
//! rendered artifact:
//! - `puml diagram.puml` prints the encoded URL token
//! - `puml -o link diagram.puml` prints the full render URL
//! - `puml -o output diagram.puml` fetches and writes `diagram.png`
//! - `cat diagram.puml | puml` reads stdin and writes to stdout

mod cli;
mod error;
mod output;
mod process;

use std::io::IsTerminal;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use output::Output;
use process::{run_files, run_stream};

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN.
    // Logs go to stderr; stdout carries tokens, links, and artifact bytes.
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.render_config();

    if !cli.files.is_empty() {
        // Per-file failures are reported as they happen and do not affect
        // the exit code of the batch.
        let summary = run_files(&config, &cli.files, &output);
        if summary.failed > 0 {
            output.warning(&format!(
                "{} of {} inputs failed",
                summary.failed,
                summary.processed + summary.failed
            ));
        }
    } else if std::io::stdin().is_terminal() {
        Cli::command()
            .error(
                clap::error::ErrorKind::MissingRequiredArgument,
                "no input: pipe PlantUML source on stdin or pass file paths",
            )
            .exit();
    } else if let Err(err) = run_stream(&config) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
