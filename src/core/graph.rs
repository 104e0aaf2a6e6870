use crate::core::ids::NodeId;

pub struct GraphBuilder {
    node_count: usize,
    srcs: Vec<NodeId>,
    dsts: Vec<NodeId>,
}

impl GraphBuilder {
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            srcs: vec![],
            dsts: vec![],
        }
    }

    pub fn with_capacity(node_count: usize, edges: usize) -> Self {
        Self {
            node_count,
            srcs: Vec::with_capacity(edges),
            dsts: Vec::with_capacity(edges),
        }
    }

    /// Adds the undirected edge `{u, v}`. Self-loops are dropped.
    ///
    /// Callers are responsible for not adding the same pair twice; edges drawn
    /// from an [`EdgeUniverse`](crate::core::universe::EdgeUniverse) are always
    /// distinct.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) {
        debug_assert_ne!(u, v, "self-loop {u}-{u}");
        if u == v {
            return;
        }
        self.srcs.push(u);
        self.dsts.push(v);
    }

    pub fn freeze(self) -> Graph {
        let mut offsets = vec![0; self.node_count + 1];
        if self.srcs.is_empty() {
            return Graph {
                node_count: self.node_count,
                offsets,
                neighbors: vec![],
            };
        }

        let mut buf = vec![0; self.node_count];

        // every edge is stored once from each endpoint
        for (src, dst) in self.srcs.iter().zip(&self.dsts) {
            buf[*src as usize] += 1;
            buf[*dst as usize] += 1;
        }

        let mut next = 0;
        for (i, degree) in buf.iter().enumerate() {
            offsets[i] = next;
            next += degree;
            offsets[i + 1] = next;
        }

        buf.fill(0);
        let mut neighbors = vec![0; next];
        for (src, dst) in self.srcs.iter().zip(&self.dsts) {
            let (s, d) = (*src as usize, *dst as usize);
            neighbors[offsets[s] + buf[s]] = *dst;
            buf[s] += 1;
            neighbors[offsets[d] + buf[d]] = *src;
            buf[d] += 1;
        }

        for node in 0..self.node_count {
            neighbors[offsets[node]..offsets[node + 1]].sort_unstable();
        }

        Graph {
            node_count: self.node_count,
            offsets,
            neighbors,
        }
    }
}

/// Simple undirected graph in compressed adjacency form.
///
/// Adjacency is symmetric and loop-free, and every neighbour slice is sorted
/// ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    node_count: usize,
    offsets: Vec<usize>,
    neighbors: Vec<NodeId>,
}

impl Graph {
    pub fn empty(node_count: usize) -> Self {
        GraphBuilder::new(node_count).freeze()
    }

    pub fn complete(node_count: usize) -> Self {
        let mut gb = GraphBuilder::new(node_count);
        for u in 0..node_count as NodeId {
            for v in u + 1..node_count as NodeId {
                gb.add_edge(u, v);
            }
        }
        gb.freeze()
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of undirected edges: half the sum of all degrees.
    pub fn edge_count(&self) -> usize {
        self.neighbors.len() / 2
    }

    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        &self.neighbors[self.offsets[node as usize]..self.offsets[node as usize + 1]]
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.offsets[node as usize + 1] - self.offsets[node as usize]
    }

    pub fn is_adjacent(&self, u: NodeId, v: NodeId) -> bool {
        self.neighbors(u).binary_search(&v).is_ok()
    }

    /// Iterates each undirected edge once as `(u, v)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        (0..self.node_count as NodeId).flat_map(move |u| {
            self.neighbors(u)
                .iter()
                .filter(move |v| **v > u)
                .map(move |v| (u, *v))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_edges() {
        let g = GraphBuilder::new(2).freeze();

        assert_eq!(3, g.offsets.len());
        assert!(g.offsets.iter().all(|off| *off == 0));
        assert_eq!(0, g.edge_count());
        assert!(g.neighbors(0).is_empty());
        assert!(g.neighbors(1).is_empty());
    }

    #[test]
    fn test_zero_nodes() {
        let g = Graph::empty(0);

        assert_eq!(0, g.node_count());
        assert_eq!(0, g.edge_count());
        assert_eq!(0, g.edges().count());
    }

    #[test]
    fn test_single_edge_is_symmetric() {
        let mut gb = GraphBuilder::new(2);
        gb.add_edge(0, 1);
        let g = gb.freeze();

        assert_eq!(vec![0, 1, 2], g.offsets);
        assert_eq!(&[1], g.neighbors(0));
        assert_eq!(&[0], g.neighbors(1));
        assert_eq!(1, g.edge_count());
        assert!(g.is_adjacent(0, 1));
        assert!(g.is_adjacent(1, 0));
    }

    #[test]
    fn test_neighbors_sorted() {
        let mut gb = GraphBuilder::new(4);
        gb.add_edge(0, 3);
        gb.add_edge(2, 0);
        gb.add_edge(1, 0);
        gb.add_edge(3, 2);
        let g = gb.freeze();

        assert_eq!(&[1, 2, 3], g.neighbors(0));
        assert_eq!(&[0], g.neighbors(1));
        assert_eq!(&[0, 3], g.neighbors(2));
        assert_eq!(&[0, 2], g.neighbors(3));
        assert_eq!(3, g.degree(0));
        assert_eq!(4, g.edge_count());
    }

    #[test]
    fn test_edges_listed_once() {
        let mut gb = GraphBuilder::new(3);
        gb.add_edge(2, 1);
        gb.add_edge(0, 2);
        let g = gb.freeze();

        assert_eq!(vec![(0, 2), (1, 2)], g.edges().collect::<Vec<_>>());
    }

    #[test]
    fn test_complete_graph() {
        let g = Graph::complete(5);

        assert_eq!(10, g.edge_count());
        for u in 0..5 {
            assert_eq!(4, g.degree(u));
            assert!(!g.is_adjacent(u, u));
        }
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_self_loop_dropped() {
        let mut gb = GraphBuilder::new(2);
        gb.add_edge(1, 1);
        let g = gb.freeze();

        assert_eq!(0, g.edge_count());
    }
}
