use crate::LayoutOptions;
use crate::model::{Bounds, FlowchartLayout, LayoutEdge, LayoutNode};
use easydraw_core::{FlowchartModel, parse_flowchart};
use easydraw_layout::{EdgeLabel, GraphLabel, LayoutGraph, NodeLabel, RankDir};

/// Lays out canonical flowchart text. `None` when no edge statement is recognized.
pub fn layout_flowchart(canonical: &str, options: &LayoutOptions) -> Option<FlowchartLayout> {
    layout_model(&parse_flowchart(canonical), options)
}

pub fn layout_model(model: &FlowchartModel, options: &LayoutOptions) -> Option<FlowchartLayout> {
    if model.is_empty() {
        tracing::debug!("no edge statements recognized");
        return None;
    }

    let cfg = &options.config;
    let rankdir = if cfg.follow_direction {
        model
            .direction
            .as_deref()
            .and_then(RankDir::from_token)
            .unwrap_or_default()
    } else {
        RankDir::TB
    };

    let mut g = LayoutGraph::new();
    g.set_graph(GraphLabel {
        rankdir,
        ranksep: cfg.rank_sep,
        nodesep: cfg.node_sep,
        center: cfg.center_x,
        margin: cfg.margin_top,
    });
    for node in model.nodes.values() {
        let (width, height) = cfg.node_size(node.shape);
        g.set_node(
            node.id.clone(),
            NodeLabel {
                width,
                height,
                ..Default::default()
            },
        );
    }
    let edge_indices: Vec<usize> = model
        .edges
        .iter()
        .map(|e| g.add_edge(e.from.clone(), e.to.clone(), EdgeLabel::default()))
        .collect();

    let summary = easydraw_layout::layout(&mut g);

    let nodes: Vec<LayoutNode> = model
        .nodes
        .values()
        .filter_map(|node| {
            let placed = g.node(&node.id)?;
            Some(LayoutNode {
                id: node.id.clone(),
                label: node.label.clone(),
                shape: node.shape,
                rank: placed.rank.unwrap_or(0),
                x: placed.x.unwrap_or(0),
                y: placed.y.unwrap_or(0),
                width: placed.width,
                height: placed.height,
            })
        })
        .collect();

    let edges = model
        .edges
        .iter()
        .zip(edge_indices)
        .map(|(e, idx)| LayoutEdge {
            from: e.from.clone(),
            to: e.to.clone(),
            label: e.label.clone(),
            curved: g.edge(idx).is_some_and(|l| l.curved),
        })
        .collect();

    Some(FlowchartLayout {
        direction: model.direction.clone(),
        bounds: Bounds::from_nodes(&nodes),
        nodes,
        edges,
        rank_count: summary.rank_count,
        cyclic_nodes: summary.cyclic_nodes,
    })
}
