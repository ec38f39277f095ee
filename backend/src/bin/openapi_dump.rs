//! Print the OpenAPI document for the workshop API.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use utoipa::OpenApi;
use workshop::doc::ApiDoc;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

/// Dump the OpenAPI document to stdout or a file.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump")]
struct Args {
    /// Output format.
    #[arg(long, value_enum, default_value = "json")]
    format: Format,
    /// Write to this file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn render(format: Format) -> Result<String, Box<dyn std::error::Error>> {
    let doc = ApiDoc::openapi();
    Ok(match format {
        Format::Json => doc.to_pretty_json()?,
        Format::Yaml => doc.to_yaml()?,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let rendered = render(args.format)?;
    match args.output {
        Some(path) => std::fs::write(path, rendered)?,
        None => writeln!(std::io::stdout().lock(), "{rendered}")?,
    }
    Ok(())
}
