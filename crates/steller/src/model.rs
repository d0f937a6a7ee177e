//! Label types and the layering result.
//!
//! These are intentionally lightweight and `Clone`-friendly; a caller that needs rollback
//! after a failed layout call can clone the whole graph up front.

use indexmap::IndexSet;
use serde::Serialize;
use steller_graph::EdgeKey;

/// The graph the layouter operates on.
pub type LayoutGraph = steller_graph::Graph<NodeLabel, EdgeLabel>;

/// Role of a node in the layered graph.
///
/// The three dummy kinds exist only after edge normalization: `SingleGap` fills a
/// two-layer span, `NearSource`/`NearTarget` bracket a condensed segment edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    #[default]
    Real,
    NearSource,
    NearTarget,
    SingleGap,
}

impl NodeKind {
    pub fn is_dummy(self) -> bool {
        !matches!(self, NodeKind::Real)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeLabel {
    pub kind: NodeKind,
    /// 1-based layer, set exactly once: by layer assignment for real nodes, at creation
    /// time for dummies.
    pub layer: Option<u32>,
}

impl NodeLabel {
    /// Label for a dummy node created by the normalizer, placed on its final layer.
    pub fn dummy(kind: NodeKind, layer: u32) -> Self {
        Self {
            kind,
            layer: Some(layer),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeLabel {
    /// A segment edge condenses a long span between a `NearSource` and a `NearTarget`
    /// dummy; it is the one kind of edge allowed to span more than one layer.
    pub segment: bool,
    /// The original edge this one replaces, for downstream consumers that style or
    /// trace the logical edge. `None` on caller-created edges.
    pub origin: Option<EdgeKey>,
}

impl EdgeLabel {
    /// Label for a plain replacement edge carrying provenance from `origin`.
    pub fn replacing(origin: &EdgeKey) -> Self {
        Self {
            segment: false,
            origin: Some(origin.clone()),
        }
    }
}

/// The result of a layout run: layer numbers 1..=max, each holding an unordered set
/// of node ids.
///
/// The per-layer sets carry no meaningful order (downstream crossing reduction decides
/// that), but they iterate in insertion order so runs are reproducible. The union of
/// all sets is exactly the node set of the graph the layering was computed for,
/// dummies included.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Layering {
    layers: Vec<IndexSet<String>>,
}

impl Layering {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest layer number, or 0 for an empty layering.
    pub fn max_layer(&self) -> u32 {
        self.layers.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Total number of nodes across all layers.
    pub fn node_count(&self) -> usize {
        self.layers.iter().map(IndexSet::len).sum()
    }

    /// The node set of the given 1-based layer.
    pub fn layer(&self, number: u32) -> Option<&IndexSet<String>> {
        if number == 0 {
            return None;
        }
        self.layers.get(number as usize - 1)
    }

    /// Appends the node set of layer `max_layer() + 1`.
    pub fn push_layer(&mut self, nodes: IndexSet<String>) {
        self.layers.push(nodes);
    }

    /// Registers a node into an existing layer (1-based). Layers past the current
    /// maximum are created empty on demand.
    ///
    /// # Panics
    ///
    /// Panics on layer 0; layer numbers are 1-based.
    pub fn insert(&mut self, layer: u32, id: impl Into<String>) {
        assert!(layer > 0, "layer numbers are 1-based");
        let idx = layer as usize - 1;
        if idx >= self.layers.len() {
            self.layers.resize_with(idx + 1, IndexSet::new);
        }
        self.layers[idx].insert(id.into());
    }

    /// `(layer number, node set)` pairs in ascending layer order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &IndexSet<String>)> {
        self.layers
            .iter()
            .enumerate()
            .map(|(i, nodes)| (i as u32 + 1, nodes))
    }

    /// The layer a node is registered in, if any.
    pub fn layer_of(&self, id: &str) -> Option<u32> {
        self.iter()
            .find(|(_, nodes)| nodes.contains(id))
            .map(|(number, _)| number)
    }
}
