//! Layered layout for directed acyclic graphs.
//!
//! The first phase of a Sugiyama-style pipeline: every node gets a 1-based layer via
//! longest-path ranking (anchored at the sources or the sinks, see [`Direction`]), then
//! every layer-spanning edge is rewritten so downstream phases only see unit spans.
//! Long spans are condensed into flagged segment edges between two dummies rather than
//! expanded into per-layer dummy chains.
//!
//! Cycle removal, crossing reduction, and coordinate assignment are separate phases and
//! out of scope; inputs must already be acyclic. Non-acyclic input fails with
//! [`Error::CycleDetected`].

pub use steller_graph as graph;

pub mod assign;
mod direction;
mod error;
mod model;
pub mod normalize;

pub use direction::Direction;
pub use error::{Error, Result};
pub use model::{EdgeLabel, LayoutGraph, Layering, NodeKind, NodeLabel};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Computes the full layering of `g`: layer assignment followed by edge normalization.
///
/// On success every node (dummies included) sits in exactly one layer of the returned
/// [`Layering`], and every non-segment edge connects adjacent layers. On error the
/// graph is left in an unspecified partially-assigned state; callers that need the
/// original back should run on a clone.
pub fn compute_layering(g: &mut LayoutGraph, direction: Direction) -> Result<Layering> {
    let mut layering = assign::run(g, direction)?;
    normalize::run(g, direction, &mut layering);
    Ok(layering)
}
