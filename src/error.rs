//! Errors raised while resolving, sampling and emitting experiments.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExperimentError {
    /// More edges were requested than the vertex count allows.
    #[error("requested {requested} edges but at most {max} are possible")]
    InvalidArgument { requested: usize, max: usize },
    /// An edge formula evaluated to a value that cannot be an edge count.
    #[error("formula `{formula}` produced unusable edge target {value}")]
    InvalidEdgeTarget { formula: &'static str, value: f64 },
    /// Edge probability `m / C(n, 2)` is undefined below two vertices.
    #[error("need at least 2 vertices to derive an edge probability, got {n}")]
    TooFewVertices { n: usize },
    #[error("trial count must be positive")]
    ZeroTrials,
    /// The results file could not be opened for writing.
    #[error("cannot write results to `{}`: {source}", path.display())]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to format results: {0}")]
    Format(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ExperimentError>;
