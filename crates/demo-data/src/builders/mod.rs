//! Fluent builder APIs for demo datasets.
//!
//! The [`DatasetBuilder`] assembles all seven collections in dependency
//! order, so every generated reference points at an entity that exists.

mod dataset;

pub use dataset::{BuildMetrics, DatasetBuilder, DatasetResult};
