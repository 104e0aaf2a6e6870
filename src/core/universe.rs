use crate::core::ids::{NodeId, pair_count};

pub type Edge = (NodeId, NodeId);

/// Every unordered vertex pair `(u, v)` with `u < v` for a fixed vertex count.
///
/// A freshly built universe is always in lexicographic order. Models that
/// permute it (see [`crate::generate::uniform`]) take it by `&mut`, so a
/// universe has exactly one writer at a time; clone it to give each worker
/// its own copy.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeUniverse {
    node_count: usize,
    edges: Vec<Edge>,
}

impl EdgeUniverse {
    pub fn build(node_count: usize) -> Self {
        let mut edges = Vec::with_capacity(pair_count(node_count));
        for u in 0..node_count as NodeId {
            for v in u + 1..node_count as NodeId {
                edges.push((u, v));
            }
        }
        Self { node_count, edges }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub(crate) fn edges_mut(&mut self) -> &mut [Edge] {
        &mut self.edges
    }
}
