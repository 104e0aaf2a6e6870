//! Random graph models.

pub mod binomial;
pub mod uniform;

use crate::core::graph::Graph;
use crate::core::random::RandomSource;
use crate::core::universe::EdgeUniverse;
use crate::error::Result;

pub use uniform::ShuffleStrategy;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GraphModel {
    /// Exactly `m` edges, chosen uniformly among all `m`-subsets.
    UniformEdgeCount { m: usize, strategy: ShuffleStrategy },
    /// Every edge present independently with probability `p`.
    IndependentProbability { p: f64 },
}

impl GraphModel {
    pub fn name(&self) -> &'static str {
        match self {
            GraphModel::UniformEdgeCount { .. } => "uniform",
            GraphModel::IndependentProbability { .. } => "binomial",
        }
    }

    pub fn sample(&self, universe: &mut EdgeUniverse, rng: &mut RandomSource) -> Result<Graph> {
        match *self {
            GraphModel::UniformEdgeCount { m, strategy } => {
                uniform::sample(universe, m, strategy, rng)
            }
            GraphModel::IndependentProbability { p } => Ok(binomial::sample(universe, p, rng)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        let uniform = GraphModel::UniformEdgeCount {
            m: 1,
            strategy: ShuffleStrategy::Full,
        };
        assert_eq!("uniform", uniform.name());
        assert_eq!(
            "binomial",
            GraphModel::IndependentProbability { p: 0.5 }.name()
        );
    }

    #[test]
    fn test_dispatch() {
        let mut universe = EdgeUniverse::build(5);
        let mut rng = RandomSource::seeded(4);

        let model = GraphModel::UniformEdgeCount {
            m: 3,
            strategy: ShuffleStrategy::Partial,
        };
        assert_eq!(3, model.sample(&mut universe, &mut rng).unwrap().edge_count());

        let model = GraphModel::IndependentProbability { p: 1.0 };
        assert_eq!(10, model.sample(&mut universe, &mut rng).unwrap().edge_count());
    }
}
