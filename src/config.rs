use crate::experiment::descriptor::DescriptorRequest;
use crate::experiment::formula::{EdgeFormula, STANDARD_FORMULAS};
use crate::generate::ShuffleStrategy;
use std::path::PathBuf;

pub struct SweepConfig {
    pub trials: u32,
    pub output_path: PathBuf,
    /// `None` seeds from the OS entropy source.
    pub seed: Option<u64>,
    pub shuffle: ShuffleStrategy,
    pub formulas: Vec<EdgeFormula>,
    /// Vertex count always tested first, ahead of the stepped range.
    pub first_n: usize,
    pub n_start: usize,
    pub n_step: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            trials: 5000,
            output_path: PathBuf::from("data.txt"),
            seed: None,
            shuffle: ShuffleStrategy::Full,
            formulas: STANDARD_FORMULAS.to_vec(),
            first_n: 5,
            n_start: 10,
            n_step: 25,
        }
    }
}

impl SweepConfig {
    /// `first_n`, then `n_start, n_start + n_step, ...` while below
    /// `ns_max + 11`.
    pub fn vertex_counts(&self, formula: &EdgeFormula) -> Vec<usize> {
        let mut ns = vec![self.first_n];
        ns.extend((self.n_start..formula.ns_max + 11).step_by(self.n_step.max(1)));
        ns
    }

    pub fn descriptors(&self) -> impl Iterator<Item = DescriptorRequest> + '_ {
        self.formulas.iter().flat_map(move |formula| {
            self.vertex_counts(formula)
                .into_iter()
                .map(move |n| DescriptorRequest {
                    n,
                    formula: *formula,
                    trials: self.trials,
                })
        })
    }
}
