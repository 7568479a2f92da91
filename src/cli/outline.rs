//! CLI entry-point for a segmentation-only dry run.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{
    config::Settings,
    data::{normalize, pdf},
    segment::{debates, speeches},
};

/// Args for the `outline` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Path to the parliamentary-record PDF.
    pub pdf: PathBuf,
}

#[instrument(skip(_settings))]
pub async fn run(args: Args, _settings: Settings) -> Result<()> {
    let pages = pdf::extract_pages(&args.pdf)?;
    let raw_text = normalize::normalize_pages(&pages);

    for section in debates::segment(&raw_text) {
        let turns = speeches::segment(&section.text);
        println!("{} ({} speeches)", section.title, turns.len());
    }
    Ok(())
}
