use steller_graph::{EdgeKey, Graph};

fn diamond() -> Graph<(), i32> {
    let mut g: Graph<(), i32> = Graph::new();
    g.add_node("a", ());
    g.add_node("b", ());
    g.add_node("c", ());
    g.add_node("d", ());
    g.add_edge("a", "b", 1);
    g.add_edge("a", "c", 2);
    g.add_edge("b", "d", 3);
    g.add_edge("c", "d", 4);
    g
}

#[test]
fn graph_nodes_iterate_in_insertion_order() {
    let g = diamond();
    assert_eq!(g.nodes().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
    assert_eq!(g.node_count(), 4);
}

#[test]
fn graph_edges_iterate_in_insertion_order() {
    let g = diamond();
    let edges: Vec<(&str, &str)> = g
        .edges()
        .map(|k| (k.source.as_str(), k.target.as_str()))
        .collect();
    assert_eq!(edges, vec![("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")]);
}

#[test]
fn graph_adjacency_follows_edge_insertion_order() {
    let g = diamond();
    assert_eq!(g.successors("a"), vec!["b", "c"]);
    assert_eq!(g.predecessors("d"), vec!["b", "c"]);
    assert_eq!(g.out_edges("a").len(), 2);
    assert_eq!(g.in_edges("d").len(), 2);
    assert!(g.out_edges("d").is_empty());
}

#[test]
fn graph_sources_and_sinks_respect_node_order() {
    let mut g = diamond();
    g.add_node("lonely", ());
    assert_eq!(g.sources(), vec!["a", "lonely"]);
    assert_eq!(g.sinks(), vec!["d", "lonely"]);
}

#[test]
fn graph_add_node_twice_replaces_the_label_in_place() {
    let mut g: Graph<i32, ()> = Graph::new();
    g.add_node("a", 1);
    g.add_node("b", 2);
    g.add_node("a", 3);
    assert_eq!(g.node_count(), 2);
    assert_eq!(g.node("a"), Some(&3));
    assert_eq!(g.nodes().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn graph_add_edge_twice_replaces_the_label_in_place() {
    let mut g = diamond();
    let key = g.add_edge("a", "b", 9);
    assert_eq!(g.edge_count(), 4);
    assert_eq!(g.edge(&key), Some(&9));
    assert_eq!(g.out_edges("a")[0], key);
}

#[test]
fn graph_labels_are_editable_in_place() {
    let mut g = diamond();
    *g.node_mut("a").unwrap() = ();
    let key = EdgeKey::new("b", "d");
    *g.edge_mut(&key).unwrap() += 10;
    assert_eq!(g.edge(&key), Some(&13));
    assert_eq!(g.edge_mut(&EdgeKey::new("d", "a")), None);
}

#[test]
fn graph_remove_edge_returns_the_label_and_updates_adjacency() {
    let mut g = diamond();
    let key = EdgeKey::new("a", "b");
    assert_eq!(g.remove_edge(&key), Some(1));
    assert_eq!(g.remove_edge(&key), None);
    assert_eq!(g.edge_count(), 3);
    assert_eq!(g.successors("a"), vec!["c"]);
    assert_eq!(g.predecessors("d"), vec!["b", "c"]);
    assert!(!g.has_edge(&key));
}

#[test]
fn graph_remove_node_drops_incident_edges() {
    let mut g = diamond();
    assert!(g.remove_node("b"));
    assert!(!g.remove_node("b"));
    assert_eq!(g.node_count(), 3);
    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.successors("a"), vec!["c"]);
    assert_eq!(g.predecessors("d"), vec!["c"]);
}

#[test]
fn graph_fresh_node_id_skips_taken_ids() {
    let mut g: Graph<(), ()> = Graph::new();
    g.add_node("_t1", ());
    let id = g.fresh_node_id("_t");
    assert_eq!(id, "_t2");
    g.add_node(id, ());
    assert_eq!(g.fresh_node_id("_t"), "_t3");
}

#[test]
#[should_panic(expected = "not a node of this graph")]
fn graph_add_edge_panics_on_missing_endpoint() {
    let mut g: Graph<(), ()> = Graph::new();
    g.add_node("a", ());
    g.add_edge("a", "ghost", ());
}
