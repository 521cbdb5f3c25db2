//! Layered layout for flowchart graphs.
//!
//! Nodes are ranked with Kahn's algorithm (longest distance from a source), then placed
//! row by row: one row per rank, each row centered on a fixed column. The whole pipeline
//! is integer-only and deterministic for a given insertion order.

pub use easydraw_graphlib as graphlib;

pub mod coordinate_system;
pub mod position;
pub mod rank;

pub type LayoutGraph = graphlib::Graph<NodeLabel, EdgeLabel, GraphLabel>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankDir {
    #[default]
    TB,
    BT,
    LR,
    RL,
}

impl RankDir {
    /// Parses a Mermaid direction token. `TD` is an alias of `TB`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "TB" | "TD" => Some(Self::TB),
            "BT" => Some(Self::BT),
            "LR" => Some(Self::LR),
            "RL" => Some(Self::RL),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GraphLabel {
    pub rankdir: RankDir,
    /// Distance between consecutive ranks.
    pub ranksep: i64,
    /// Distance between siblings on the same rank.
    pub nodesep: i64,
    /// Cross-axis coordinate every rank is centered on.
    pub center: i64,
    /// Rank-axis coordinate of rank 0.
    pub margin: i64,
}

impl Default for GraphLabel {
    fn default() -> Self {
        Self {
            rankdir: RankDir::TB,
            ranksep: 120,
            nodesep: 150,
            center: 280,
            margin: 80,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeLabel {
    pub width: i64,
    pub height: i64,
    pub rank: Option<usize>,
    pub x: Option<i64>,
    pub y: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeLabel {
    /// Set by [`layout`] when the source node fans out to more than one edge.
    pub curved: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutSummary {
    pub rank_count: usize,
    /// Nodes on a cycle. Their ranks come from the partial Kahn pass and are not
    /// guaranteed to respect edge direction.
    pub cyclic_nodes: Vec<String>,
}

pub fn layout(g: &mut LayoutGraph) -> LayoutSummary {
    coordinate_system::adjust(g);
    rank::run(g);
    position::run(g);
    coordinate_system::undo(g);
    position::translate_non_negative(g);
    position::mark_branching_edges(g);

    let rank_count = g
        .node_entries()
        .filter_map(|(_, n)| n.rank)
        .max()
        .map_or(0, |r| r + 1);
    let cyclic_nodes = graphlib::alg::cyclic_nodes(g);
    if !cyclic_nodes.is_empty() {
        tracing::debug!(
            nodes = ?cyclic_nodes,
            "cycle detected; ranks of cycle members are approximate"
        );
    }
    tracing::debug!(
        nodes = g.node_count(),
        edges = g.edge_count(),
        ranks = rank_count,
        "layered layout finished"
    );

    LayoutSummary {
        rank_count,
        cyclic_nodes,
    }
}
