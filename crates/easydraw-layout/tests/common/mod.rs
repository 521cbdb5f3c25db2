#![allow(dead_code)]

use easydraw_layout::{EdgeLabel, GraphLabel, LayoutGraph, NodeLabel};

pub fn graph_with(label: GraphLabel) -> LayoutGraph {
    let mut g = LayoutGraph::new();
    g.set_graph(label);
    g.set_default_node_label(|| NodeLabel {
        width: 120,
        height: 50,
        ..Default::default()
    });
    g
}

pub fn edge(g: &mut LayoutGraph, v: &str, w: &str) {
    g.add_edge(v, w, EdgeLabel::default());
}

pub fn rank_of(g: &LayoutGraph, id: &str) -> usize {
    g.node(id).and_then(|n| n.rank).expect("ranked node")
}

pub fn pos_of(g: &LayoutGraph, id: &str) -> (i64, i64) {
    let n = g.node(id).expect("node");
    (n.x.expect("x"), n.y.expect("y"))
}
