use easydraw_graphlib::{Graph, alg};

#[derive(Debug, Default, Clone, PartialEq)]
struct Label(&'static str);

#[test]
fn nodes_iterate_in_insertion_order() {
    let mut g: Graph<(), (), ()> = Graph::new();
    g.ensure_node("c");
    g.ensure_node("a");
    g.ensure_node("b");
    g.ensure_node("a");

    assert_eq!(g.nodes().collect::<Vec<_>>(), vec!["c", "a", "b"]);
    assert_eq!(g.node_order("b"), Some(2));
    assert_eq!(g.node_order("zzz"), None);
}

#[test]
fn add_edge_creates_missing_endpoints_with_default_label() {
    let mut g: Graph<Label, (), ()> = Graph::new();
    g.set_default_node_label(|| Label("default"));
    g.set_node("a", Label("explicit"));
    g.add_edge("a", "b", ());

    assert_eq!(g.node("a"), Some(&Label("explicit")));
    assert_eq!(g.node("b"), Some(&Label("default")));
    assert_eq!(g.node_count(), 2);
}

#[test]
fn set_node_replaces_label_without_moving_the_node() {
    let mut g: Graph<Label, (), ()> = Graph::new();
    g.set_node("a", Label("one"));
    g.set_node("b", Label("two"));
    g.set_node("a", Label("three"));

    assert_eq!(g.nodes().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(g.node("a"), Some(&Label("three")));
}

#[test]
fn parallel_edges_are_preserved_in_order() {
    let mut g: Graph<(), &'static str, ()> = Graph::new();
    let first = g.add_edge("a", "b", "yes");
    let second = g.add_edge("a", "b", "no");

    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.edge(first), Some(&"yes"));
    assert_eq!(g.edge(second), Some(&"no"));
    assert_eq!(g.successors("a"), vec!["b", "b"]);
    assert_eq!(g.in_degree("b"), 2);
    assert_eq!(g.out_degree("a"), 2);
}

#[test]
fn queries_on_unknown_nodes_are_empty() {
    let g: Graph<(), (), ()> = Graph::new();
    assert!(g.successors("nope").is_empty());
    assert_eq!(g.in_degree("nope"), 0);
    assert_eq!(g.out_degree("nope"), 0);
}

#[test]
fn find_cycles_reports_components_and_self_loops() {
    let mut g: Graph<(), (), ()> = Graph::new();
    g.set_path(&["start", "a", "b", "c", "a"]);
    g.set_path(&["c", "end"]);
    g.add_edge("end", "end", ());

    assert_eq!(
        alg::find_cycles(&g),
        vec![
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec!["end".to_string()],
        ]
    );
    assert_eq!(alg::cyclic_nodes(&g), vec!["a", "b", "c", "end"]);
}

#[test]
fn find_cycles_is_empty_for_a_dag() {
    let mut g: Graph<(), (), ()> = Graph::new();
    g.set_path(&["a", "b", "d"]);
    g.set_path(&["a", "c", "d"]);
    assert!(alg::find_cycles(&g).is_empty());
}

#[test]
fn find_cycles_handles_long_chains_without_recursion() {
    let ids: Vec<String> = (0..60_000).map(|i| format!("n{i}")).collect();
    let refs: Vec<&str> = ids.iter().map(String::as_str).collect();

    let mut g: Graph<(), (), ()> = Graph::new();
    g.set_path(&refs);
    assert!(alg::find_cycles(&g).is_empty());

    g.add_edge("n59999", "n0", ());
    let cycles = alg::find_cycles(&g);
    assert_eq!(cycles.len(), 1);
    assert_eq!(cycles[0].len(), 60_000);
    assert_eq!(cycles[0][0], "n0");
}
