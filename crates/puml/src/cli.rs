//! Command-line interface definition.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use puml_server::{DEFAULT_SERVER_URL, DEFAULT_TIMEOUT, OutputFormat};

use crate::process::{OutputStyle, RenderConfig};

/// Encode PlantUML diagrams for a rendering server.
///
/// Reads diagram source from the given files, or from stdin when no files
/// are passed, and prints the encoded token, prints the render URL, or
/// fetches the rendered artifact, depending on --style.
#[derive(Parser)]
#[command(name = "puml", version, about)]
pub(crate) struct Cli {
    /// Diagram source files; stdin is read when none are given.
    pub(crate) files: Vec<PathBuf>,

    /// PlantUML server base URL.
    #[arg(
        short,
        long,
        env = "PLANTUML_SERVER",
        default_value = DEFAULT_SERVER_URL
    )]
    pub(crate) server: String,

    /// Rendered artifact format (png, svg, txt).
    #[arg(short, long, default_value = "png", value_parser = parse_format)]
    pub(crate) format: OutputFormat,

    /// Output style: the encoded token (text), the render URL (link), or
    /// the fetched artifact (output).
    #[arg(short = 'o', long, default_value = "text", value_parser = parse_style)]
    pub(crate) style: OutputStyle,

    /// HTTP timeout in seconds for artifact fetches.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub(crate) timeout: u64,

    /// Enable info-level logging.
    #[arg(long)]
    pub(crate) verbose: bool,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::parse(s).ok_or_else(|| format!("unknown format '{s}' (valid: png, svg, txt)"))
}

fn parse_style(s: &str) -> Result<OutputStyle, String> {
    OutputStyle::parse(s).ok_or_else(|| format!("unknown style '{s}' (valid: text, link, output)"))
}

impl Cli {
    /// Build the immutable render configuration for this invocation.
    pub(crate) fn render_config(&self) -> RenderConfig {
        RenderConfig {
            server: self.server.clone(),
            format: self.format,
            style: self.style,
            timeout: Duration::from_secs(self.timeout),
        }
    }
}
