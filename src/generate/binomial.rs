use crate::core::graph::{Graph, GraphBuilder};
use crate::core::random::RandomSource;
use crate::core::universe::EdgeUniverse;

/// Draws a graph keeping each universe edge independently when a uniform
/// draw falls strictly below `p`.
///
/// `p` is not range-checked: `p <= 0` always gives the empty graph and
/// `p >= 1` the complete one. One draw is consumed per candidate edge either
/// way.
pub fn sample(universe: &EdgeUniverse, p: f64, rng: &mut RandomSource) -> Graph {
    let expected = (universe.len() as f64 * p.clamp(0.0, 1.0)) as usize;
    let mut gb = GraphBuilder::with_capacity(universe.node_count(), expected);
    for (u, v) in universe.edges() {
        if rng.uniform() < p {
            gb.add_edge(*u, *v);
        }
    }
    gb.freeze()
}
