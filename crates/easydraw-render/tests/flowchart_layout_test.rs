use easydraw_core::{NodeShape, sanitize};
use easydraw_render::{LayoutConfig, LayoutOptions, layout_flowchart};
use proptest::prelude::*;

fn pos(layout: &easydraw_render::FlowchartLayout, id: &str) -> (i64, i64) {
    let n = layout.node(id).unwrap_or_else(|| panic!("node {id}"));
    (n.x, n.y)
}

#[test]
fn no_edges_means_no_layout() {
    let options = LayoutOptions::default();
    assert!(layout_flowchart("graph TB", &options).is_none());
    assert!(layout_flowchart("graph TB\nA\nB[label]", &options).is_none());
    assert!(layout_flowchart("", &options).is_none());
}

#[test]
fn chain_is_stacked_on_the_center_column() {
    let layout = layout_flowchart("graph TB\nA --> B\nB --> C", &LayoutOptions::default()).unwrap();
    assert_eq!(pos(&layout, "A"), (280, 80));
    assert_eq!(pos(&layout, "B"), (280, 200));
    assert_eq!(pos(&layout, "C"), (280, 320));
    assert_eq!(layout.rank_count, 3);
    let ranks: Vec<_> = layout.nodes.iter().map(|n| n.rank).collect();
    assert_eq!(ranks, vec![0, 1, 2]);
    assert!(layout.edges.iter().all(|e| !e.curved));
}

#[test]
fn siblings_are_centered_and_branch_edges_curve() {
    let layout = layout_flowchart(
        "graph TD\nA{ok?} -->|yes| B\nA -->|no| C",
        &LayoutOptions::default(),
    )
    .unwrap();
    assert_eq!(pos(&layout, "B"), (205, 200));
    assert_eq!(pos(&layout, "C"), (355, 200));
    assert!(layout.edges.iter().all(|e| e.curved));
    assert_eq!(layout.edges[0].label.as_deref(), Some("yes"));

    let a = layout.node("A").unwrap();
    assert_eq!(a.shape, NodeShape::Decision);
    assert_eq!((a.width, a.height), (110, 80));
    assert_eq!((layout.node("B").unwrap().width, layout.node("B").unwrap().height), (120, 50));
}

#[test]
fn wide_rows_are_shifted_to_non_negative_x() {
    let text = "graph TB\nA --> B\nA --> C\nA --> D\nA --> E\nA --> F\nA --> G";
    let layout = layout_flowchart(text, &LayoutOptions::default()).unwrap();
    let xs: Vec<_> = ["B", "C", "D", "E", "F", "G"]
        .iter()
        .map(|id| pos(&layout, id).0)
        .collect();
    assert_eq!(xs, vec![0, 150, 300, 450, 600, 750]);
    assert_eq!(pos(&layout, "A"), (375, 80));
    let bounds = layout.bounds.unwrap();
    assert_eq!((bounds.min_x, bounds.max_x), (0, 870));
}

#[test]
fn cycles_are_reported_not_broken() {
    let layout = layout_flowchart("graph TB\nA --> B\nB --> A", &LayoutOptions::default()).unwrap();
    assert_eq!(layout.cyclic_nodes, vec!["A".to_string(), "B".to_string()]);
    assert_eq!(pos(&layout, "A"), (205, 80));
    assert_eq!(pos(&layout, "B"), (355, 80));
}

#[test]
fn direction_is_ignored_unless_requested() {
    let text = "graph LR\nA --> B";
    let default = layout_flowchart(text, &LayoutOptions::default()).unwrap();
    assert_eq!(default.direction.as_deref(), Some("LR"));
    assert_eq!(pos(&default, "B"), (280, 200));

    let options = LayoutOptions::with_config(LayoutConfig {
        follow_direction: true,
        ..Default::default()
    });
    let lr = layout_flowchart(text, &options).unwrap();
    assert_eq!(pos(&lr, "A"), (80, 280));
    assert_eq!(pos(&lr, "B"), (230, 280));
}

#[test]
fn config_changes_spacing_and_sizes() {
    let config = LayoutConfig::from_json_str(
        r#"{"rankSep": 100, "marginTop": 10, "processWidth": 90}"#,
    )
    .unwrap();
    let layout = layout_flowchart("graph TB\nA --> B", &LayoutOptions::with_config(config)).unwrap();
    assert_eq!(pos(&layout, "B"), (280, 110));
    assert_eq!(layout.node("A").unwrap().width, 90);
}

#[test]
fn sanitized_free_text_keeps_its_label() {
    let layout = layout_flowchart(&sanitize("开始-->结束"), &LayoutOptions::default()).unwrap();
    let labels: Vec<_> = layout.nodes.iter().map(|n| n.label.as_str()).collect();
    assert_eq!(labels, vec!["开始", "结束"]);
}

#[test]
fn long_chains_lay_out_in_one_column() {
    let mut text = String::from("graph TB");
    for i in 0..50_000 {
        text.push_str(&format!("\nn{i} --> n{}", i + 1));
    }
    let layout = layout_flowchart(&text, &LayoutOptions::default()).unwrap();
    assert_eq!(layout.nodes.len(), 50_001);
    assert_eq!(layout.rank_count, 50_001);
    assert!(layout.cyclic_nodes.is_empty());
    let last = layout.nodes.last().unwrap();
    assert_eq!((last.id.as_str(), last.x, last.y), ("n50000", 280, 80 + 50_000 * 120));
}

fn dag_text() -> impl Strategy<Value = String> {
    proptest::collection::vec((0usize..8, 1usize..8), 1..20).prop_map(|pairs| {
        let mut text = String::from("graph TB");
        for (a, step) in pairs {
            let b = a + step;
            text.push_str(&format!("\nn{a} --> n{b}"));
        }
        text
    })
}

proptest! {
    #[test]
    fn dag_layouts_are_non_negative_and_rank_monotone(text in dag_text()) {
        let layout = layout_flowchart(&text, &LayoutOptions::default()).unwrap();
        prop_assert!(layout.cyclic_nodes.is_empty());
        for n in &layout.nodes {
            prop_assert!(n.x >= 0 && n.y >= 0);
        }
        for e in &layout.edges {
            let (u, v) = (layout.node(&e.from).unwrap(), layout.node(&e.to).unwrap());
            prop_assert!(v.rank > u.rank);
            prop_assert!(v.y > u.y);
        }
    }
}
