//! Runtime configuration utilities for hansard-extract.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::nlp::canonical::DEFAULT_SIM_THRESHOLD;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Minimum 0-100 similarity for merging a mention key into an existing cluster.
    pub sim_threshold: f64,
    /// Character width of relation-extraction chunks.
    pub max_chunk_len: usize,
    /// Root folder for JSON outputs.
    pub outputs_dir: PathBuf,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let sim_threshold = env::var("SIM_THRESHOLD")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SIM_THRESHOLD);
        let max_chunk_len = env::var("MAX_CHUNK_LEN")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(350);
        let outputs_dir = env::var("OUTPUTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./outputs"));

        std::fs::create_dir_all(&outputs_dir).context("creating outputs dir")?;

        Ok(Self {
            sim_threshold,
            max_chunk_len,
            outputs_dir,
        })
    }

    /// Convenience helper for derived output path segments.
    pub fn join_output<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.outputs_dir.join(path)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sim_threshold: DEFAULT_SIM_THRESHOLD,
            max_chunk_len: 350,
            outputs_dir: PathBuf::from("./outputs"),
        }
    }
}
