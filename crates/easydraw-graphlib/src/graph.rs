//! Core `Graph` container plus the small `alg` module used for cycle reporting.

use rustc_hash::FxBuildHasher;

pub mod alg;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    pub v: String,
    pub w: String,
}

impl EdgeKey {
    pub fn is_self_loop(&self) -> bool {
        self.v == self.w
    }
}

#[derive(Debug, Clone)]
struct NodeEntry<N> {
    id: String,
    label: N,
}

#[derive(Debug, Clone)]
struct EdgeEntry<E> {
    key: EdgeKey,
    label: E,
}

/// Directed multigraph with insertion-ordered nodes and edges.
///
/// Parallel edges are kept as separate entries. Adjacency lists are maintained eagerly
/// (edge indices per node), so `successors` / `in_degree` never rescan the edge list.
pub struct Graph<N, E, G>
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    graph_label: G,
    default_node_label: Box<dyn Fn() -> N + Send + Sync>,

    nodes: Vec<NodeEntry<N>>,
    node_index: HashMap<String, usize>,

    edges: Vec<EdgeEntry<E>>,
    out_edges: Vec<Vec<usize>>,
    in_edges: Vec<Vec<usize>>,
}

impl<N, E, G> Default for Graph<N, E, G>
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E, G> Graph<N, E, G>
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    pub fn new() -> Self {
        Self {
            graph_label: G::default(),
            default_node_label: Box::new(N::default),
            nodes: Vec::new(),
            node_index: HashMap::default(),
            edges: Vec::new(),
            out_edges: Vec::new(),
            in_edges: Vec::new(),
        }
    }

    pub fn set_graph(&mut self, label: G) -> &mut Self {
        self.graph_label = label;
        self
    }

    pub fn graph(&self) -> &G {
        &self.graph_label
    }

    pub fn graph_mut(&mut self) -> &mut G {
        &mut self.graph_label
    }

    pub fn set_default_node_label<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn() -> N + Send + Sync + 'static,
    {
        self.default_node_label = Box::new(f);
        self
    }

    /// Inserts `id` with `label`, or replaces the label of an existing node in place.
    /// Replacing never changes the node's position in iteration order.
    pub fn set_node(&mut self, id: impl Into<String>, label: N) -> &mut Self {
        let id = id.into();
        if let Some(&idx) = self.node_index.get(&id) {
            self.nodes[idx].label = label;
            return self;
        }
        let idx = self.nodes.len();
        self.nodes.push(NodeEntry {
            id: id.clone(),
            label,
        });
        self.out_edges.push(Vec::new());
        self.in_edges.push(Vec::new());
        self.node_index.insert(id, idx);
        self
    }

    pub fn ensure_node(&mut self, id: impl Into<String>) -> &mut Self {
        let id = id.into();
        if self.node_index.contains_key(&id) {
            return self;
        }
        let label = (self.default_node_label)();
        self.set_node(id, label)
    }

    pub fn node(&self, id: &str) -> Option<&N> {
        self.node_index.get(id).map(|&idx| &self.nodes[idx].label)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut N> {
        self.node_index
            .get(id)
            .copied()
            .map(move |idx| &mut self.nodes[idx].label)
    }

    /// Position of `id` in node insertion order.
    pub fn node_order(&self, id: &str) -> Option<usize> {
        self.node_index.get(id).copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    pub fn node_entries(&self) -> impl Iterator<Item = (&str, &N)> {
        self.nodes.iter().map(|n| (n.id.as_str(), &n.label))
    }

    pub fn for_each_node_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&str, &mut N),
    {
        for n in &mut self.nodes {
            f(n.id.as_str(), &mut n.label);
        }
    }

    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.id.clone()).collect()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = &EdgeKey> {
        self.edges.iter().map(|e| &e.key)
    }

    pub fn edge_entries(&self) -> impl Iterator<Item = (&EdgeKey, &E)> {
        self.edges.iter().map(|e| (&e.key, &e.label))
    }

    /// Appends an edge, creating missing endpoints with the default node label.
    /// Returns the edge's index in insertion order.
    pub fn add_edge(&mut self, v: impl Into<String>, w: impl Into<String>, label: E) -> usize {
        let v = v.into();
        let w = w.into();
        self.ensure_node(v.as_str());
        self.ensure_node(w.as_str());
        let v_idx = self.node_index[v.as_str()];
        let w_idx = self.node_index[w.as_str()];

        let idx = self.edges.len();
        self.edges.push(EdgeEntry {
            key: EdgeKey { v, w },
            label,
        });
        self.out_edges[v_idx].push(idx);
        self.in_edges[w_idx].push(idx);
        idx
    }

    pub fn set_path(&mut self, nodes: &[&str]) -> &mut Self {
        for pair in nodes.windows(2) {
            self.add_edge(pair[0], pair[1], E::default());
        }
        self
    }

    pub fn edge(&self, idx: usize) -> Option<&E> {
        self.edges.get(idx).map(|e| &e.label)
    }

    pub fn for_each_edge_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&EdgeKey, &mut E),
    {
        for e in &mut self.edges {
            f(&e.key, &mut e.label);
        }
    }

    /// Successor ids in edge insertion order. A target reached by parallel edges appears
    /// once per edge.
    pub fn successors(&self, v: &str) -> Vec<&str> {
        let Some(&idx) = self.node_index.get(v) else {
            return Vec::new();
        };
        self.out_edges[idx]
            .iter()
            .map(|&e| self.edges[e].key.w.as_str())
            .collect()
    }

    pub fn out_degree(&self, v: &str) -> usize {
        self.node_index
            .get(v)
            .map_or(0, |&idx| self.out_edges[idx].len())
    }

    pub fn in_degree(&self, v: &str) -> usize {
        self.node_index
            .get(v)
            .map_or(0, |&idx| self.in_edges[idx].len())
    }
}
