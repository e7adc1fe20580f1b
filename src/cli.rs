use clap::Parser;
use std::path::PathBuf;
use vexid::application::dto::OutputFormat;

/// Assign canonical content-hash ids to OpenVEX documents
#[derive(Parser, Debug)]
#[command(name = "vexid")]
#[command(version)]
#[command(
    about = "Assign canonical content-hash ids to OpenVEX documents",
    long_about = None
)]
pub struct Args {
    /// OpenVEX JSON documents to identify
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Output format: json, canonical or id [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Discard any existing @id and compute it again
    #[arg(long)]
    pub regenerate_id: bool,

    /// Increment the document version before computing the id
    #[arg(long)]
    pub bump_version: bool,

    /// Override the tooling field of every document
    #[arg(long, value_name = "STRING")]
    pub tooling: Option<String>,

    /// Suppress progress and status output (warnings and errors are still shown)
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to a vexid.config.yml file (defaults to auto-discovery in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
