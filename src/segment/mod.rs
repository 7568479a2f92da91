//! Structural segmentation layer: debates, speeches, speaker metadata.

pub mod debates;
pub mod speaker;
pub mod speeches;
