//! Graph algorithms over [`Graph`].

use super::Graph;
use std::collections::BTreeSet;

/// Returns every strongly connected component with more than one node, plus single nodes
/// carrying a self-loop. Nodes inside a component and the components themselves are
/// ordered by node insertion order.
pub fn find_cycles<N, E, G>(g: &Graph<N, E, G>) -> Vec<Vec<String>>
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    // Tarjan over node insertion indices, iterative: one work frame per open node.
    struct State {
        next_index: usize,
        stack: Vec<usize>,
        on_stack: Vec<bool>,
        indices: Vec<Option<usize>>,
        lowlink: Vec<usize>,
        sccs: Vec<Vec<usize>>,
    }

    impl State {
        fn open(&mut self, v: usize) {
            self.indices[v] = Some(self.next_index);
            self.lowlink[v] = self.next_index;
            self.next_index += 1;
            self.stack.push(v);
            self.on_stack[v] = true;
        }

        fn close(&mut self, v: usize) {
            if Some(self.lowlink[v]) != self.indices[v] {
                return;
            }
            let mut scc = Vec::new();
            while let Some(w) = self.stack.pop() {
                self.on_stack[w] = false;
                scc.push(w);
                if w == v {
                    break;
                }
            }
            self.sccs.push(scc);
        }
    }

    let n = g.node_count();
    let mut st = State {
        next_index: 0,
        stack: Vec::new(),
        on_stack: vec![false; n],
        indices: vec![None; n],
        lowlink: vec![0; n],
        sccs: Vec::new(),
    };
    // (node, position in its out-edge list)
    let mut work: Vec<(usize, usize)> = Vec::new();
    for root in 0..n {
        if st.indices[root].is_some() {
            continue;
        }
        st.open(root);
        work.push((root, 0));

        while let Some(frame) = work.last_mut() {
            let (v, next) = *frame;
            if let Some(&e) = g.out_edges[v].get(next) {
                frame.1 += 1;
                let w = g.node_index[g.edges[e].key.w.as_str()];
                match st.indices[w] {
                    None => {
                        st.open(w);
                        work.push((w, 0));
                    }
                    Some(w_idx) if st.on_stack[w] => {
                        st.lowlink[v] = st.lowlink[v].min(w_idx);
                    }
                    Some(_) => {}
                }
                continue;
            }

            work.pop();
            st.close(v);
            if let Some(&(parent, _)) = work.last() {
                st.lowlink[parent] = st.lowlink[parent].min(st.lowlink[v]);
            }
        }
    }

    let mut cycles: Vec<Vec<usize>> = Vec::new();
    for mut scc in st.sccs {
        if scc.len() > 1 {
            scc.sort_unstable();
            cycles.push(scc);
        } else {
            let v = scc[0];
            let self_loop = g.out_edges[v].iter().any(|&e| g.edges[e].key.is_self_loop());
            if self_loop {
                cycles.push(scc);
            }
        }
    }
    cycles.sort_by_key(|c| c[0]);

    cycles
        .into_iter()
        .map(|c| c.into_iter().map(|i| g.nodes[i].id.clone()).collect())
        .collect()
}

/// Ids of every node that takes part in some cycle, in insertion order.
pub fn cyclic_nodes<N, E, G>(g: &Graph<N, E, G>) -> Vec<String>
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    let members: BTreeSet<usize> = find_cycles(g)
        .iter()
        .flatten()
        .filter_map(|id| g.node_order(id))
        .collect();
    members
        .into_iter()
        .map(|i| g.nodes[i].id.clone())
        .collect()
}
