//! Command-line interface wiring for hansard-extract.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod outline;
pub mod process;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Parliamentary record extraction pipeline", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Process(args) => process::run(args, settings).await,
            Commands::Outline(args) => outline::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract debates, entities, and relations from a PDF into JSON.
    Process(process::Args),
    /// Print the debate and speech structure without running extraction.
    Outline(outline::Args),
}
