//! Block splitter.
//!
//! Multi-line constructs (fenced code, centered blocks and spoiler blocks)
//! are cut out of the decoded text before any line or inline rule runs.
//! What is left between them comes back as plain [`Chunk::Text`].

pub mod kinds;
pub mod splitter;

pub use splitter::{Chunk, split_blocks};
