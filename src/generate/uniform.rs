use crate::core::graph::{Graph, GraphBuilder};
use crate::core::random::RandomSource;
use crate::core::universe::{Edge, EdgeUniverse};
use crate::error::{ExperimentError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShuffleStrategy {
    /// Permute the whole universe and keep its first `m` edges.
    #[default]
    Full,
    /// Only randomize the `m` positions that are kept.
    Partial,
}

/// Draws a graph with exactly `m` edges, every `m`-subset of the universe
/// being equally likely.
///
/// The universe is permuted in place by every call.
pub fn sample(
    universe: &mut EdgeUniverse,
    m: usize,
    strategy: ShuffleStrategy,
    rng: &mut RandomSource,
) -> Result<Graph> {
    if m > universe.len() {
        return Err(ExperimentError::InvalidArgument {
            requested: m,
            max: universe.len(),
        });
    }

    let mut gb = GraphBuilder::with_capacity(universe.node_count(), m);
    let chosen: &[Edge] = match strategy {
        ShuffleStrategy::Full => {
            rng.shuffle(universe.edges_mut());
            &universe.edges()[..m]
        }
        ShuffleStrategy::Partial => rng.partial_shuffle(universe.edges_mut(), m),
    };
    for (u, v) in chosen {
        gb.add_edge(*u, *v);
    }

    Ok(gb.freeze())
}
