//! Direction handling.
//!
//! Ranking and positioning always work top-to-bottom. For `LR` / `RL` the rank and sibling
//! spacings are swapped before positioning and the axes are swapped afterwards; `BT` / `RL`
//! mirror the rank axis inside the drawing's own bounds.

use crate::{LayoutGraph, RankDir};

pub fn adjust(g: &mut LayoutGraph) {
    match g.graph().rankdir {
        RankDir::LR | RankDir::RL => swap_spacing(g),
        RankDir::TB | RankDir::BT => {}
    }
}

pub fn undo(g: &mut LayoutGraph) {
    match g.graph().rankdir {
        RankDir::BT | RankDir::RL => reverse_y(g),
        RankDir::TB | RankDir::LR => {}
    }

    match g.graph().rankdir {
        RankDir::LR | RankDir::RL => {
            swap_xy(g);
            swap_spacing(g);
        }
        RankDir::TB | RankDir::BT => {}
    }
}

fn swap_spacing(g: &mut LayoutGraph) {
    let graph = g.graph_mut();
    (graph.ranksep, graph.nodesep) = (graph.nodesep, graph.ranksep);
}

fn reverse_y(g: &mut LayoutGraph) {
    let ys: Vec<i64> = g.node_entries().filter_map(|(_, n)| n.y).collect();
    let (Some(&lo), Some(&hi)) = (ys.iter().min(), ys.iter().max()) else {
        return;
    };
    g.for_each_node_mut(|_id, n| {
        if let Some(y) = n.y {
            n.y = Some(lo.saturating_add(hi).saturating_sub(y));
        }
    });
}

fn swap_xy(g: &mut LayoutGraph) {
    g.for_each_node_mut(|_id, n| {
        if let (Some(x), Some(y)) = (n.x, n.y) {
            n.x = Some(y);
            n.y = Some(x);
        }
    });
}
