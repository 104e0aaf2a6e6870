use crate::config::SweepConfig;
use crate::core::random::RandomSource;
use crate::experiment::runner::run_sweep;
use crate::experiment::sink::ResultSink;
use anyhow::Context;
use tracing::{error, info};

pub mod analysis;
pub mod config;
pub mod core;
pub mod error;
pub mod experiment;
pub mod generate;
pub mod logging;

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cfg = SweepConfig::default();
    let mut rng = RandomSource::new(cfg.seed);

    let report = run_sweep(&cfg, &mut rng);

    let mut sink = ResultSink::new();
    for result in &report.results {
        sink.push(result).context("failed to buffer results")?;
    }

    match sink.flush_to(&cfg.output_path) {
        Ok(rows) => info!(
            rows,
            skipped = report.skipped,
            path = %cfg.output_path.display(),
            "results written"
        ),
        Err(err) => error!(error = %err, "results discarded"),
    }

    Ok(())
}
