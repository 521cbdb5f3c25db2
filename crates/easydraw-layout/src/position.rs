//! Coordinate assignment on top of ranks.

use crate::{LayoutGraph, rank};

/// Places every node on its rank row.
///
/// Rank axis: `margin + rank * ranksep`. Cross axis: the row is centered on `center`,
/// siblings `nodesep` apart in insertion order. Coordinates are in the internal
/// top-to-bottom system; see [`crate::coordinate_system`]. Arithmetic saturates at the
/// `i64` range.
pub fn run(g: &mut LayoutGraph) {
    let graph = g.graph().clone();
    for (r, layer) in rank::layers(g).into_iter().enumerate() {
        if layer.is_empty() {
            continue;
        }
        let y = graph.margin.saturating_add((r as i64).saturating_mul(graph.ranksep));
        let total = (layer.len() as i64 - 1).saturating_mul(graph.nodesep);
        let start = graph.center.saturating_sub(total / 2);
        for (i, id) in layer.iter().enumerate() {
            if let Some(n) = g.node_mut(id) {
                n.x = Some(start.saturating_add((i as i64).saturating_mul(graph.nodesep)));
                n.y = Some(y);
            }
        }
    }
}

/// Shifts the drawing right/down just enough that no coordinate is negative.
///
/// Wide rows can start left of the origin (`center < (n - 1) * nodesep / 2`). The shift is
/// applied to every node so row centering stays intact.
pub fn translate_non_negative(g: &mut LayoutGraph) {
    let mut min_x: i64 = 0;
    let mut min_y: i64 = 0;
    for (_, n) in g.node_entries() {
        min_x = min_x.min(n.x.unwrap_or(0));
        min_y = min_y.min(n.y.unwrap_or(0));
    }
    if min_x == 0 && min_y == 0 {
        return;
    }
    let (dx, dy) = (min_x.saturating_neg(), min_y.saturating_neg());
    tracing::trace!(dx, dy, "translating layout into positive space");
    g.for_each_node_mut(|_id, n| {
        n.x = Some(n.x.unwrap_or(0).saturating_add(dx));
        n.y = Some(n.y.unwrap_or(0).saturating_add(dy));
    });
}

/// Marks edges whose source has more than one outgoing edge.
pub fn mark_branching_edges(g: &mut LayoutGraph) {
    let fan_out: Vec<bool> = g.edges().map(|e| g.out_degree(&e.v) > 1).collect();
    let mut it = fan_out.into_iter();
    g.for_each_edge_mut(|_key, e| {
        e.curved = it.next().unwrap_or(false);
    });
}
