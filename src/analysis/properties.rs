use crate::core::graph::Graph;
use crate::core::ids::NodeId;
use std::cmp::Ordering;
use std::collections::VecDeque;

const DEGREE_THRESHOLD: usize = 4;

pub const PROPERTY_COUNT: usize = 4;

/// True iff some three distinct vertices are pairwise adjacent.
///
/// For each edge `(u, v)` with `u < v` the sorted neighbour lists of both
/// endpoints are merged looking for a common vertex.
pub fn has_triangle(graph: &Graph) -> bool {
    graph
        .edges()
        .any(|(u, v)| sorted_intersect(graph.neighbors(u), graph.neighbors(v)))
}

fn sorted_intersect(a: &[NodeId], b: &[NodeId]) -> bool {
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => return true,
        }
    }
    false
}

/// True iff a breadth-first walk from vertex 0 reaches every vertex. The
/// graph without vertices counts as connected.
pub fn is_connected(graph: &Graph) -> bool {
    if graph.node_count() == 0 {
        return true;
    }

    let mut visited = vec![false; graph.node_count()];
    let mut queue = VecDeque::from([0]);
    visited[0] = true;
    let mut seen = 1;

    while let Some(node) = queue.pop_front() {
        for &next in graph.neighbors(node) {
            if !visited[next as usize] {
                visited[next as usize] = true;
                seen += 1;
                queue.push_back(next);
            }
        }
    }

    seen == graph.node_count()
}

/// True iff at least `n / 2` (rounded down) vertices have degree 4 or more.
pub fn half_vertices_degree_at_least_4(graph: &Graph) -> bool {
    let count = (0..graph.node_count() as NodeId)
        .filter(|&node| graph.degree(node) >= DEGREE_THRESHOLD)
        .count();
    count >= graph.node_count() / 2
}

pub fn edge_count_mismatch(m: usize, graph: &Graph) -> bool {
    let degree_sum = (0..graph.node_count() as NodeId)
        .map(|node| graph.degree(node))
        .sum::<usize>();
    degree_sum / 2 != m
}

/// The predicates evaluated on every sample, in output column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    HasTriangle = 0,
    IsConnected = 1,
    HalfVerticesDegreeAtLeast4 = 2,
    EdgeCountMismatch = 3,
}

impl Property {
    pub const ALL: [Property; PROPERTY_COUNT] = [
        Property::HasTriangle,
        Property::IsConnected,
        Property::HalfVerticesDegreeAtLeast4,
        Property::EdgeCountMismatch,
    ];

    /// Column of this property in [`Property::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Property::HasTriangle => "has_triangle",
            Property::IsConnected => "is_connected",
            Property::HalfVerticesDegreeAtLeast4 => "half_degree_at_least_4",
            Property::EdgeCountMismatch => "edge_count_mismatch",
        }
    }

    /// `target_m` is only read by [`Property::EdgeCountMismatch`].
    pub fn evaluate(&self, graph: &Graph, target_m: usize) -> bool {
        match self {
            Property::HasTriangle => has_triangle(graph),
            Property::IsConnected => is_connected(graph),
            Property::HalfVerticesDegreeAtLeast4 => half_vertices_degree_at_least_4(graph),
            Property::EdgeCountMismatch => edge_count_mismatch(target_m, graph),
        }
    }
}
