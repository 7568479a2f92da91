//! Entity and relation extraction layer.

pub mod canonical;
pub mod entities;
pub mod ner;
pub mod relations;
