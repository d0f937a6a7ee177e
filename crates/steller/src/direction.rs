//! Layering direction as an interchangeable policy value.
//!
//! `FromSource` and `FromSink` share one algorithm skeleton in `assign` and `normalize`;
//! the four points where they genuinely differ (anchor set, candidate discovery,
//! assignability prerequisites, dummy placement) live here as methods on the enum, so
//! neither phase is duplicated per direction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use steller_graph::EdgeKey;

use crate::error::Error;
use crate::model::LayoutGraph;

/// Which end of the graph anchors layer 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Sources sit on layer 1; layers grow along outgoing edges.
    #[default]
    FromSource,
    /// Sinks sit on layer 1; layers grow along incoming edges.
    FromSink,
}

impl Direction {
    /// The layer-1 anchor set: sources or sinks of the current node set.
    pub(crate) fn anchors(self, g: &LayoutGraph) -> Vec<String> {
        let anchors = match self {
            Direction::FromSource => g.sources(),
            Direction::FromSink => g.sinks(),
        };
        anchors.into_iter().map(str::to_string).collect()
    }

    /// Neighbors a newly assigned node makes discoverable as candidates.
    pub(crate) fn forward_neighbors<'a>(self, g: &'a LayoutGraph, id: &str) -> Vec<&'a str> {
        match self {
            Direction::FromSource => g.successors(id),
            Direction::FromSink => g.predecessors(id),
        }
    }

    /// Neighbors that must all be assigned before a candidate becomes assignable.
    pub(crate) fn prerequisite_neighbors<'a>(self, g: &'a LayoutGraph, id: &str) -> Vec<&'a str> {
        match self {
            Direction::FromSource => g.predecessors(id),
            Direction::FromSink => g.successors(id),
        }
    }

    /// The edges the normalizer walks per node: the "forward" adjacency in this
    /// direction, snapshotted by the caller before any rewrites.
    pub(crate) fn forward_edges(self, g: &LayoutGraph, id: &str) -> Vec<EdgeKey> {
        match self {
            Direction::FromSource => g.out_edges(id),
            Direction::FromSink => g.in_edges(id),
        }
    }

    /// Layer of a `NearSource` dummy: one step from the edge source towards the target.
    pub(crate) fn near_source_layer(self, source_layer: u32) -> u32 {
        match self {
            Direction::FromSource => source_layer + 1,
            Direction::FromSink => source_layer - 1,
        }
    }

    /// Layer of a `NearTarget` dummy: one step from the edge target towards the source.
    pub(crate) fn near_target_layer(self, target_layer: u32) -> u32 {
        match self {
            Direction::FromSource => target_layer - 1,
            Direction::FromSink => target_layer + 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::FromSource => f.write_str("from-source"),
            Direction::FromSink => f.write_str("from-sink"),
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "from-source" => Ok(Direction::FromSource),
            "from-sink" => Ok(Direction::FromSink),
            other => Err(Error::UnknownDirection {
                value: other.to_string(),
            }),
        }
    }
}
