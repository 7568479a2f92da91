//! Document ingestion layer: PDF text retrieval and normalisation.

pub mod normalize;
pub mod pdf;
