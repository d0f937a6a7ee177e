//! Directed graph container used by `steller`.
//!
//! The layout algorithms need a graph whose every iteration order is reproducible: nodes and
//! edges are kept in insertion order, adjacency lists in edge-insertion order. Hash maps are
//! only used as indexes into that ordered storage, never iterated.

mod graph;

pub use graph::{EdgeKey, Graph};
