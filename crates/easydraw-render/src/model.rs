use easydraw_core::NodeShape;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl Bounds {
    pub fn from_nodes<'a>(nodes: impl IntoIterator<Item = &'a LayoutNode>) -> Option<Self> {
        let mut it = nodes.into_iter();
        let first = it.next()?;
        let mut b = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x.saturating_add(first.width),
            max_y: first.y.saturating_add(first.height),
        };
        for n in it {
            b.min_x = b.min_x.min(n.x);
            b.min_y = b.min_y.min(n.y);
            b.max_x = b.max_x.max(n.x.saturating_add(n.width));
            b.max_y = b.max_y.max(n.y.saturating_add(n.height));
        }
        Some(b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutNode {
    pub id: String,
    pub label: String,
    pub shape: NodeShape,
    pub rank: usize,
    /// Top-left corner.
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutEdge {
    pub from: String,
    pub to: String,
    pub label: Option<String>,
    pub curved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowchartLayout {
    /// Header direction as written, even when the layout did not follow it.
    pub direction: Option<String>,
    /// Nodes in discovery order.
    pub nodes: Vec<LayoutNode>,
    /// Edges in discovery order.
    pub edges: Vec<LayoutEdge>,
    pub rank_count: usize,
    /// Nodes on a cycle; their ranks are approximate.
    pub cyclic_nodes: Vec<String>,
    pub bounds: Option<Bounds>,
}

impl FlowchartLayout {
    pub fn node(&self, id: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
