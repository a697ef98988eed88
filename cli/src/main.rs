//! docx-text CLI - plain text extraction from Word documents
//!
//! Prints the concatenated text runs of a DOCX file. Any failure is
//! reported on stdout as `Error: <description>` with exit status 1.

use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Document read when no input path is given.
const DEFAULT_INPUT: &str = "docs/GRN.docx";

/// Extract plain text from a Word (DOCX) document
#[derive(Parser)]
#[command(
    name = "docx-text",
    author = "iyulab",
    version,
    about = "Extract plain text from a Word document",
    long_about = "docx-text - plain text extraction from Word (DOCX) documents.\n\n\
                  Prints the text of every run in word/document.xml, in document order, \
                  with no separators. Set RUST_LOG for diagnostics on stderr."
)]
struct Cli {
    /// Input file path
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();

    // Errors go to stdout alongside the text; scripts rely on the exit status.
    if let Err(e) = run(cli) {
        println!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    debug!(input = %cli.input.display(), "extracting text");
    let text = docx_text::extract_text(&cli.input)?;
    write_output(cli.output.as_ref(), &text)?;
    Ok(())
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, format!("{}\n", content))?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)?;
        }
    }
    Ok(())
}
