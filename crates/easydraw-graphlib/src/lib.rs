//! Graph container used by `easydraw-layout`.
//!
//! A directed multigraph that remembers insertion order for both nodes and edges. Layout
//! output is derived from iteration order, so every query here is deterministic.

mod graph;

pub use graph::{EdgeKey, Graph, alg};
