use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use trellis::{Document, DocumentError, ExecutorImpl, RenderConfig, SequentialExecutor};

/// Renders a JSON document to markup on stdout.
#[derive(Parser, Debug)]
#[command(name = "trellis", version, about)]
struct Cli {
    /// Path to the document JSON.
    document: PathBuf,

    /// Path to a render config JSON.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Render pages one after another instead of in parallel.
    #[arg(long)]
    sequential: bool,
}

fn main() -> Result<(), DocumentError> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            log::info!("Loading render config from {}", path.display());
            RenderConfig::from_json(&fs::read_to_string(path)?)?
        }
        None => RenderConfig::default(),
    };

    log::info!("Loading document from {}", cli.document.display());
    let document = Document::from_json(&fs::read_to_string(&cli.document)?)?;

    let executor = if cli.sequential {
        ExecutorImpl::Sequential(SequentialExecutor::new())
    } else {
        ExecutorImpl::default()
    };

    let pages = trellis::render_document(document, &config, &executor);
    let mut out = io::stdout().lock();
    for page in pages {
        writeln!(out, "{page}")?;
    }
    out.flush()?;
    Ok(())
}
