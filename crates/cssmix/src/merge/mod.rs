//! Merging style inputs into a flat style map.

mod engine;
mod options;

pub use engine::{StyleMerger, merge};
pub use options::MergeOptions;
