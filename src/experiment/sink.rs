use crate::error::{ExperimentError, Result};
use crate::experiment::runner::ExperimentResult;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Buffers result rows in memory until [`ResultSink::flush_to`] writes them
/// out in one go.
///
/// Rows are space separated:
/// `<n> <formula> <model> <f1> <f2> <f3> <f4>`.
pub struct ResultSink {
    writer: csv::Writer<Vec<u8>>,
    rows: usize,
}

impl ResultSink {
    pub fn new() -> Self {
        let writer = csv::WriterBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(vec![]);
        Self { writer, rows: 0 }
    }

    pub fn push(&mut self, result: &ExperimentResult) -> Result<()> {
        let mut record = vec![
            result.descriptor.n.to_string(),
            result.descriptor.formula.to_string(),
            result.model.to_string(),
        ];
        record.extend(result.frequencies.0.iter().map(|f| format!("{f:.6}")));
        self.writer.write_record(&record)?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn into_bytes(self) -> Result<Vec<u8>> {
        self.writer
            .into_inner()
            .map_err(|err| ExperimentError::Format(err.into_error().into()))
    }

    /// Writes every buffered row to `path`, replacing its contents.
    pub fn flush_to(self, path: &Path) -> Result<usize> {
        let rows = self.rows;
        let bytes = self.into_bytes()?;
        let output_unavailable = |source| ExperimentError::OutputUnavailable {
            path: path.to_path_buf(),
            source,
        };
        let mut file = File::create(path).map_err(output_unavailable)?;
        file.write_all(&bytes).map_err(output_unavailable)?;
        Ok(rows)
    }
}

impl Default for ResultSink {
    fn default() -> Self {
        Self::new()
    }
}
