//! Sparse edge normalization.
//!
//! After layer assignment, downstream phases expect every edge to connect adjacent
//! layers. A two-layer span gets one `SingleGap` dummy in the middle. A wider span is
//! condensed instead of materialized: a `NearSource` and a `NearTarget` dummy bracket a
//! single flagged segment edge, so a long edge costs two dummies no matter how many
//! layers it crosses. Consumers that need per-layer waypoints re-expand segments
//! themselves.

use tracing::debug;

use steller_graph::EdgeKey;

use crate::direction::Direction;
use crate::model::{EdgeLabel, LayoutGraph, Layering, NodeKind, NodeLabel};

const SINGLE_GAP_PREFIX: &str = "_sg";
const NEAR_SOURCE_PREFIX: &str = "_ns";
const NEAR_TARGET_PREFIX: &str = "_nt";

/// Rewrites every layer-spanning edge of `g`, registering created dummies in
/// `layering`. Running it again on the result is a no-op.
///
/// # Panics
///
/// Panics if a visited node has no layer; normalization only runs after a completed
/// layer assignment.
pub fn run(g: &mut LayoutGraph, direction: Direction, layering: &mut Layering) {
    let before = g.node_count();
    // Node snapshot first, per-node edge snapshots at visit time: the rewrites below
    // remove edges and add dummy nodes mid-pass.
    for id in g.node_ids() {
        for key in direction.forward_edges(g, &id) {
            normalize_edge(g, direction, layering, key);
        }
    }
    debug!(dummies = g.node_count() - before, "normalized edges");
}

fn normalize_edge(
    g: &mut LayoutGraph,
    direction: Direction,
    layering: &mut Layering,
    key: EdgeKey,
) {
    let Some(label) = g.edge(&key) else {
        return;
    };
    if label.segment {
        return;
    }

    let source_layer = node_layer(g, &key.source);
    let target_layer = node_layer(g, &key.target);
    let gap = source_layer.abs_diff(target_layer);
    if gap <= 1 {
        return;
    }

    g.remove_edge(&key);

    if gap == 2 {
        let mid = source_layer.min(target_layer) + 1;
        let dummy = add_dummy(g, layering, NodeKind::SingleGap, SINGLE_GAP_PREFIX, mid);
        g.add_edge(key.source.clone(), dummy.clone(), EdgeLabel::replacing(&key));
        g.add_edge(dummy, key.target.clone(), EdgeLabel::replacing(&key));
    } else {
        let near_source = add_dummy(
            g,
            layering,
            NodeKind::NearSource,
            NEAR_SOURCE_PREFIX,
            direction.near_source_layer(source_layer),
        );
        let near_target = add_dummy(
            g,
            layering,
            NodeKind::NearTarget,
            NEAR_TARGET_PREFIX,
            direction.near_target_layer(target_layer),
        );
        g.add_edge(
            key.source.clone(),
            near_source.clone(),
            EdgeLabel::replacing(&key),
        );
        g.add_edge(
            near_source,
            near_target.clone(),
            EdgeLabel {
                segment: true,
                origin: Some(key.clone()),
            },
        );
        g.add_edge(near_target, key.target.clone(), EdgeLabel::replacing(&key));
    }
}

fn node_layer(g: &LayoutGraph, id: &str) -> u32 {
    g.node(id)
        .and_then(|label| label.layer)
        .expect("normalization requires a completed layer assignment")
}

fn add_dummy(
    g: &mut LayoutGraph,
    layering: &mut Layering,
    kind: NodeKind,
    prefix: &str,
    layer: u32,
) -> String {
    let id = g.fresh_node_id(prefix);
    g.add_node(id.clone(), NodeLabel::dummy(kind, layer));
    layering.insert(layer, id.clone());
    id
}
