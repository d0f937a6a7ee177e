//! Longest-path layer assignment.
//!
//! Frontier expansion from the direction's anchor set: anchors take layer 1, and each
//! following round assigns every candidate whose prerequisites are all placed. A node
//! therefore ends up one past the longest prerequisite chain behind it: minimal layer
//! count, with no attempt to balance layer widths.

use indexmap::IndexSet;
use tracing::{debug, trace};

use crate::direction::Direction;
use crate::error::{Error, Result};
use crate::model::{LayoutGraph, Layering};

/// Mutable state of one assignment run, threaded through the phase helpers.
#[derive(Default)]
struct AssignState {
    assigned: IndexSet<String>,
    candidates: IndexSet<String>,
    current_layer: u32,
    layering: Layering,
}

/// Assigns a layer to every node of `g` and returns the grouping by layer.
///
/// Fails with [`Error::CycleDetected`] as soon as a round places nothing while
/// unassigned nodes remain; the graph keeps whatever partial assignment exists at
/// that point.
pub fn run(g: &mut LayoutGraph, direction: Direction) -> Result<Layering> {
    let mut state = AssignState::default();

    let anchors = direction.anchors(g);
    debug!(
        ?direction,
        anchors = anchors.len(),
        nodes = g.node_count(),
        "assigning layers"
    );
    if !anchors.is_empty() {
        place_layer(g, direction, &mut state, anchors);
    }

    while state.assigned.len() < g.node_count() {
        let ready = drain_assignable(g, direction, &mut state);
        if ready.is_empty() {
            return Err(Error::CycleDetected {
                residual: unassigned(g, &state.assigned),
            });
        }
        place_layer(g, direction, &mut state, ready);
    }

    Ok(state.layering)
}

/// Assigns every node in `nodes` to the next layer, then discovers the candidates
/// sitting forward of them.
fn place_layer(
    g: &mut LayoutGraph,
    direction: Direction,
    state: &mut AssignState,
    nodes: Vec<String>,
) {
    state.current_layer += 1;
    let layer = state.current_layer;
    trace!(layer, count = nodes.len(), "placing layer");

    for id in nodes {
        g.node_mut(&id)
            .expect("assignable node exists in the graph")
            .layer = Some(layer);
        state.layering.insert(layer, id.clone());
        state.assigned.insert(id.clone());

        for next in direction.forward_neighbors(g, &id) {
            if !state.assigned.contains(next) {
                state.candidates.insert(next.to_string());
            }
        }
    }
}

/// Removes and returns, in discovery order, every candidate whose prerequisites are
/// all assigned.
fn drain_assignable(
    g: &LayoutGraph,
    direction: Direction,
    state: &mut AssignState,
) -> Vec<String> {
    let AssignState {
        assigned,
        candidates,
        ..
    } = state;

    let mut ready: Vec<String> = Vec::new();
    candidates.retain(|id| {
        let assignable = direction
            .prerequisite_neighbors(g, id)
            .iter()
            .all(|p| assigned.contains(*p));
        if assignable {
            ready.push(id.clone());
        }
        !assignable
    });
    ready
}

fn unassigned(g: &LayoutGraph, assigned: &IndexSet<String>) -> Vec<String> {
    g.nodes()
        .filter(|id| !assigned.contains(*id))
        .map(str::to_string)
        .collect()
}
