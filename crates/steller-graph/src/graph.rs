//! The `Graph` container.

use rustc_hash::FxBuildHasher;
use std::fmt;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Identity of a directed edge.
///
/// There is at most one edge per `(source, target)` pair; the layouter has no use for
/// multi-edges or self-loops, so neither gets a dedicated representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    pub source: String,
    pub target: String,
}

impl EdgeKey {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

/// A directed graph with string node ids and arbitrary node/edge labels.
///
/// Nodes and edges iterate in insertion order; `out_edges`/`in_edges` return edges in the
/// order they were added. Removal keeps the relative order of the survivors.
#[derive(Debug, Clone)]
pub struct Graph<N, E> {
    node_order: Vec<String>,
    node_labels: HashMap<String, N>,
    edge_order: Vec<EdgeKey>,
    edge_labels: HashMap<EdgeKey, E>,
    outgoing: HashMap<String, Vec<EdgeKey>>,
    incoming: HashMap<String, Vec<EdgeKey>>,
    fresh_counter: usize,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> Graph<N, E> {
    pub fn new() -> Self {
        Self {
            node_order: Vec::new(),
            node_labels: HashMap::default(),
            edge_order: Vec::new(),
            edge_labels: HashMap::default(),
            outgoing: HashMap::default(),
            incoming: HashMap::default(),
            fresh_counter: 0,
        }
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_labels.contains_key(id)
    }

    /// Adds a node, or replaces the label of an existing one (the node keeps its
    /// original position in the iteration order).
    pub fn add_node(&mut self, id: impl Into<String>, label: N) -> &mut Self {
        let id = id.into();
        if self.node_labels.insert(id.clone(), label).is_none() {
            self.outgoing.insert(id.clone(), Vec::new());
            self.incoming.insert(id.clone(), Vec::new());
            self.node_order.push(id);
        }
        self
    }

    pub fn node(&self, id: &str) -> Option<&N> {
        self.node_labels.get(id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut N> {
        self.node_labels.get_mut(id)
    }

    pub fn node_count(&self) -> usize {
        self.node_order.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.node_order.iter().map(|id| id.as_str())
    }

    /// Owned snapshot of the node ids, safe to hold across mutation.
    pub fn node_ids(&self) -> Vec<String> {
        self.node_order.clone()
    }

    /// Removes a node together with its incident edges. Returns `false` if the node
    /// does not exist.
    pub fn remove_node(&mut self, id: &str) -> bool {
        if self.node_labels.remove(id).is_none() {
            return false;
        }
        let mut incident = self.outgoing.remove(id).unwrap_or_default();
        incident.extend(self.incoming.remove(id).unwrap_or_default());
        for key in incident {
            self.remove_edge(&key);
        }
        self.node_order.retain(|n| n != id);
        true
    }

    /// Allocates a node id that is not yet in use. Dummy-node creation funnels through
    /// this so synthetic ids can never collide with caller-provided ones.
    pub fn fresh_node_id(&mut self, prefix: &str) -> String {
        loop {
            self.fresh_counter += 1;
            let id = format!("{prefix}{}", self.fresh_counter);
            if !self.node_labels.contains_key(&id) {
                return id;
            }
        }
    }

    /// Adds an edge, or replaces the label of an existing one (the edge keeps its
    /// original position in the iteration order).
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is not a node of this graph.
    pub fn add_edge(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        label: E,
    ) -> EdgeKey {
        let key = EdgeKey::new(source, target);
        assert!(
            self.has_node(&key.source),
            "edge source {:?} is not a node of this graph",
            key.source
        );
        assert!(
            self.has_node(&key.target),
            "edge target {:?} is not a node of this graph",
            key.target
        );
        if self.edge_labels.insert(key.clone(), label).is_none() {
            self.edge_order.push(key.clone());
            self.outgoing
                .get_mut(&key.source)
                .expect("outgoing list for existing node")
                .push(key.clone());
            self.incoming
                .get_mut(&key.target)
                .expect("incoming list for existing node")
                .push(key.clone());
        }
        key
    }

    pub fn has_edge(&self, key: &EdgeKey) -> bool {
        self.edge_labels.contains_key(key)
    }

    pub fn edge(&self, key: &EdgeKey) -> Option<&E> {
        self.edge_labels.get(key)
    }

    pub fn edge_mut(&mut self, key: &EdgeKey) -> Option<&mut E> {
        self.edge_labels.get_mut(key)
    }

    /// Removes an edge and returns its label, or `None` if the edge does not exist.
    pub fn remove_edge(&mut self, key: &EdgeKey) -> Option<E> {
        let label = self.edge_labels.remove(key)?;
        self.edge_order.retain(|k| k != key);
        if let Some(out) = self.outgoing.get_mut(&key.source) {
            out.retain(|k| k != key);
        }
        if let Some(inc) = self.incoming.get_mut(&key.target) {
            inc.retain(|k| k != key);
        }
        Some(label)
    }

    pub fn edge_count(&self) -> usize {
        self.edge_order.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = &EdgeKey> {
        self.edge_order.iter()
    }

    /// Owned snapshot of all edge keys, safe to hold across mutation.
    pub fn edge_keys(&self) -> Vec<EdgeKey> {
        self.edge_order.clone()
    }

    /// Owned snapshot of the edges leaving `id`, safe to hold across mutation.
    pub fn out_edges(&self, id: &str) -> Vec<EdgeKey> {
        self.outgoing.get(id).cloned().unwrap_or_default()
    }

    /// Owned snapshot of the edges entering `id`, safe to hold across mutation.
    pub fn in_edges(&self, id: &str) -> Vec<EdgeKey> {
        self.incoming.get(id).cloned().unwrap_or_default()
    }

    pub fn successors(&self, id: &str) -> Vec<&str> {
        self.outgoing
            .get(id)
            .map(|edges| edges.iter().map(|k| k.target.as_str()).collect())
            .unwrap_or_default()
    }

    pub fn predecessors(&self, id: &str) -> Vec<&str> {
        self.incoming
            .get(id)
            .map(|edges| edges.iter().map(|k| k.source.as_str()).collect())
            .unwrap_or_default()
    }

    /// Nodes with no incoming edges, in node-insertion order.
    pub fn sources(&self) -> Vec<&str> {
        self.node_order
            .iter()
            .filter(|id| self.incoming.get(*id).is_none_or(|inc| inc.is_empty()))
            .map(|id| id.as_str())
            .collect()
    }

    /// Nodes with no outgoing edges, in node-insertion order.
    pub fn sinks(&self) -> Vec<&str> {
        self.node_order
            .iter()
            .filter(|id| self.outgoing.get(*id).is_none_or(|out| out.is_empty()))
            .map(|id| id.as_str())
            .collect()
    }
}
