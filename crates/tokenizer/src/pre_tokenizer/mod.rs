//! Pre-tokenization pipeline.
//!
//! This module provides the operations applied before tokens are looked up
//! in a vocabulary: equation preprocessing and separator-marker
//! segmentation.

pub mod split;

pub use eqtok_core::{preprocess, Preprocessor};
pub use split::{with_boundaries, SeparatorMarker, DEFAULT_MARKER};
