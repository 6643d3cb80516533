//! Input orchestration and output style dispatch.
//!
//! Each input source (a file, or the piped stream) is processed on its own:
//! read, compress + encode, then dispatch on the requested style. In
//! file-list mode a failing input is reported and the batch carries on;
//! nothing is shared between inputs except the HTTP agent.

use std::collections::HashSet;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info};
use ureq::Agent;

use puml_encode::encode_diagram;
use puml_server::{OutputFormat, create_agent, fetch_rendered, render_url};

use crate::error::CliError;
use crate::output::Output;

/// Output style for processed diagrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum OutputStyle {
    /// Print the encoded token.
    #[default]
    Text,
    /// Print the full render URL.
    Link,
    /// Fetch the rendered artifact from the server.
    Output,
}

impl OutputStyle {
    /// Parse style from a flag value.
    #[must_use]
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s {
            "text" => Some(Self::Text),
            "link" => Some(Self::Link),
            "output" => Some(Self::Output),
            _ => None,
        }
    }
}

/// Immutable per-invocation configuration, built once from the parsed CLI.
#[derive(Debug, Clone)]
pub(crate) struct RenderConfig {
    pub(crate) server: String,
    pub(crate) format: OutputFormat,
    pub(crate) style: OutputStyle,
    pub(crate) timeout: Duration,
}

/// Summary of a file-list run.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct BatchSummary {
    pub(crate) processed: usize,
    pub(crate) failed: usize,
}

/// Process every file in the list, reporting failures without stopping.
///
/// Duplicate paths are processed once, first occurrence wins. A failure on
/// one file never aborts the remaining files.
pub(crate) fn run_files(config: &RenderConfig, files: &[PathBuf], output: &Output) -> BatchSummary {
    let agent = create_agent(config.timeout);
    let mut summary = BatchSummary {
        processed: 0,
        failed: 0,
    };

    for path in dedup_paths(files) {
        match process_file(config, &agent, &path) {
            Ok(()) => summary.processed += 1,
            Err(err) => {
                output.error(&format!("{}: {err}", path.display()));
                summary.failed += 1;
            }
        }
    }
    summary
}

/// Process the piped stream as a single source.
///
/// Data output always goes to stdout here, regardless of style.
pub(crate) fn run_stream(config: &RenderConfig) -> Result<(), CliError> {
    let mut raw = Vec::new();
    io::stdin().read_to_end(&mut raw)?;

    let agent = create_agent(config.timeout);
    process_source(config, &agent, &raw, None)
}

/// Read one file and process its contents.
fn process_file(config: &RenderConfig, agent: &Agent, path: &Path) -> Result<(), CliError> {
    let raw = fs::read(path)?;
    process_source(config, agent, &raw, Some(path))
}

/// Encode one source and dispatch on the requested style.
///
/// `origin` is the source file for file inputs; the piped stream has none
/// and routes fetched artifact bytes to stdout instead of a sibling file.
fn process_source(
    config: &RenderConfig,
    agent: &Agent,
    raw: &[u8],
    origin: Option<&Path>,
) -> Result<(), CliError> {
    let token = encode_diagram(raw)?;
    debug!(raw_len = raw.len(), token_len = token.len(), "encoded diagram source");

    match config.style {
        OutputStyle::Text => emit_line(&token),
        OutputStyle::Link => emit_line(&link_for(config, &token)?),
        OutputStyle::Output => {
            let url = link_for(config, &token)?;
            let data = fetch_rendered(agent, &url)?;
            match origin {
                Some(path) => {
                    let dest = path.with_extension(config.format.as_str());
                    fs::write(&dest, &data)?;
                    info!(dest = %dest.display(), bytes = data.len(), "wrote rendered artifact");
                    Ok(())
                }
                None => {
                    let mut stdout = io::stdout().lock();
                    stdout.write_all(&data)?;
                    Ok(stdout.flush()?)
                }
            }
        }
    }
}

/// Render URL for a token under this configuration.
fn link_for(config: &RenderConfig, token: &str) -> Result<String, CliError> {
    Ok(render_url(&config.server, config.format, token)?)
}

/// Write one line of data output to stdout.
fn emit_line(line: &str) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    Ok(writeln!(stdout, "{line}")?)
}

/// Deduplicate input paths by absolute form, preserving first occurrence.
///
/// Absolutization is purely lexical, so nonexistent paths still dedupe
/// here and then fail individually at read time.
fn dedup_paths(files: &[PathBuf]) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(files.len());
    for path in files {
        let abs = std::path::absolute(path).unwrap_or_else(|_| path.clone());
        if seen.insert(abs) {
            unique.push(path.clone());
        }
    }
    unique
}
