//! CLI entry-point for full document processing.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{config::Settings, nlp::ner, pipeline::Pipeline};

/// Args for the `process` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Path to the parliamentary-record PDF.
    pub pdf: PathBuf,
    /// Output JSON path; defaults to extraction.json in the outputs dir.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let out = args
        .out
        .unwrap_or_else(|| settings.join_output("extraction.json"));

    // No relation generator is bundled; the adapter falls back to the
    // oral-question pattern heuristic.
    let pipeline = Pipeline::new(ner::fallback_recognizer(), None, settings);
    pipeline.process_document(&args.pdf, &out)?;
    info!(path = %out.display(), "wrote extraction result");
    Ok(())
}
