//! Monte-Carlo estimation of property frequencies.
//!
//! Each descriptor goes through the same stages: resolve it, build its edge
//! universe once, then for each model draw `trials` graphs, count how often
//! each [`Property`] holds and divide by `trials`. A failure at any stage
//! drops only that descriptor (or that model) and the sweep carries on.

use crate::analysis::properties::{PROPERTY_COUNT, Property};
use crate::config::SweepConfig;
use crate::core::random::RandomSource;
use crate::core::universe::EdgeUniverse;
use crate::error::Result;
use crate::experiment::descriptor::{DescriptorRequest, ExperimentDescriptor};
use crate::generate::{GraphModel, ShuffleStrategy};
use tracing::{debug, info, info_span, warn};

/// Fraction of samples for which each property in [`Property::ALL`] held.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyVector(pub [f64; PROPERTY_COUNT]);

impl FrequencyVector {
    pub fn get(&self, property: Property) -> f64 {
        self.0[property.index()]
    }
}

struct FrequencyAccumulator {
    hits: [u32; PROPERTY_COUNT],
    samples: u32,
}

impl FrequencyAccumulator {
    fn new() -> Self {
        Self {
            hits: [0; PROPERTY_COUNT],
            samples: 0,
        }
    }

    fn record(&mut self, outcomes: [bool; PROPERTY_COUNT]) {
        for (hits, holds) in self.hits.iter_mut().zip(outcomes) {
            *hits += u32::from(holds);
        }
        self.samples += 1;
    }

    fn finish(self) -> FrequencyVector {
        FrequencyVector(
            self.hits
                .map(|hits| f64::from(hits) / f64::from(self.samples.max(1))),
        )
    }
}

#[derive(Debug, Clone)]
pub struct ExperimentResult {
    pub descriptor: ExperimentDescriptor,
    pub model: &'static str,
    pub frequencies: FrequencyVector,
}

#[derive(Debug, Default)]
pub struct SweepReport {
    pub results: Vec<ExperimentResult>,
    pub skipped: usize,
}

/// The two models run for a descriptor, in output order.
pub fn models_for(
    descriptor: &ExperimentDescriptor,
    strategy: ShuffleStrategy,
) -> [GraphModel; 2] {
    [
        GraphModel::UniformEdgeCount {
            m: descriptor.m,
            strategy,
        },
        GraphModel::IndependentProbability { p: descriptor.p },
    ]
}

/// Draws `descriptor.trials` graphs from `model` and returns how often each
/// property held.
pub fn run_experiment(
    descriptor: &ExperimentDescriptor,
    model: &GraphModel,
    universe: &mut EdgeUniverse,
    rng: &mut RandomSource,
) -> Result<FrequencyVector> {
    let mut acc = FrequencyAccumulator::new();
    for _ in 0..descriptor.trials {
        let graph = model.sample(universe, rng)?;
        acc.record(Property::ALL.map(|p| p.evaluate(&graph, descriptor.m)));
    }
    Ok(acc.finish())
}

/// Runs every model for one resolved descriptor. A model that fails is
/// logged and left out of the returned results.
pub fn run_descriptor(
    descriptor: &ExperimentDescriptor,
    strategy: ShuffleStrategy,
    rng: &mut RandomSource,
) -> Vec<ExperimentResult> {
    let mut universe = EdgeUniverse::build(descriptor.n);
    let mut results = Vec::with_capacity(2);

    for model in models_for(descriptor, strategy) {
        match run_experiment(descriptor, &model, &mut universe, rng) {
            Ok(frequencies) => {
                debug!(model = model.name(), ?frequencies, "experiment finished");
                results.push(ExperimentResult {
                    descriptor: *descriptor,
                    model: model.name(),
                    frequencies,
                });
            }
            Err(err) => warn!(model = model.name(), error = %err, "experiment aborted"),
        }
    }

    results
}

pub fn run_sweep(config: &SweepConfig, rng: &mut RandomSource) -> SweepReport {
    run_requests(config.descriptors(), config.shuffle, rng)
}

pub fn run_requests(
    requests: impl IntoIterator<Item = DescriptorRequest>,
    strategy: ShuffleStrategy,
    rng: &mut RandomSource,
) -> SweepReport {
    let mut report = SweepReport::default();

    for request in requests {
        let _span =
            info_span!("descriptor", n = request.n, formula = request.formula.name).entered();
        let descriptor = match ExperimentDescriptor::resolve(&request) {
            Ok(descriptor) => descriptor,
            Err(err) => {
                warn!(error = %err, "skipping descriptor");
                report.skipped += 1;
                continue;
            }
        };

        info!(n = descriptor.n, m = descriptor.m, "running descriptor");
        report.results.extend(run_descriptor(&descriptor, strategy, rng));
    }

    report
}
