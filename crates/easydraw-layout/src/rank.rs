//! Rank assignment.

use crate::LayoutGraph;
use std::collections::VecDeque;

/// Assigns `rank` to every node with Kahn's algorithm.
///
/// Sources seed the queue in insertion order. Each dequeued node pushes its successors to
/// at least `rank + 1`; a successor is enqueued once all of its incoming edges have been
/// seen. Nodes whose in-degree never drops to zero (cycle members and anything only
/// reachable through a cycle) keep the highest rank pushed onto them so far, or 0.
pub fn run(g: &mut LayoutGraph) {
    let ids = g.node_ids();
    let mut indegree: Vec<usize> = ids.iter().map(|id| g.in_degree(id)).collect();
    let mut rank: Vec<Option<usize>> = vec![None; ids.len()];

    let mut queue: VecDeque<usize> = (0..ids.len()).filter(|&i| indegree[i] == 0).collect();
    while let Some(v) = queue.pop_front() {
        let base = rank[v].unwrap_or(0);
        rank[v] = Some(base);
        for w in g.successors(&ids[v]) {
            let Some(w) = g.node_order(w) else {
                continue;
            };
            rank[w] = Some(rank[w].map_or(base + 1, |r| r.max(base + 1)));
            indegree[w] = indegree[w].saturating_sub(1);
            if indegree[w] == 0 {
                queue.push_back(w);
            }
        }
    }

    for (id, r) in ids.iter().zip(rank) {
        if let Some(label) = g.node_mut(id) {
            label.rank = Some(r.unwrap_or(0));
        }
    }
}

/// Groups node ids by rank. Within a rank ids keep insertion order.
pub fn layers(g: &LayoutGraph) -> Vec<Vec<String>> {
    let mut out: Vec<Vec<String>> = Vec::new();
    for (id, label) in g.node_entries() {
        let r = label.rank.unwrap_or(0);
        if out.len() <= r {
            out.resize_with(r + 1, Vec::new);
        }
        out[r].push(id.to_string());
    }
    out
}
