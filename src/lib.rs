//! Debate segmentation and entity-resolution pipeline for parliamentary
//! record PDFs (Hansard-style transcripts).

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod nlp;
pub mod pipeline;
pub mod segment;
