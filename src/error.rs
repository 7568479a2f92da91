//! Error taxonomy for the fallible edges of the pipeline.
//!
//! Segmentation and canonicalisation are total over strings and never
//! appear here; only collaborator I/O and file I/O can fail.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("pdf text extraction failed for {path}: {message}")]
    Pdf { path: PathBuf, message: String },

    #[error("could not write output to {path}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("output serialization failed")]
    Serialize(#[from] serde_json::Error),
}
