//! Tab-separated debug trace of accepted growth steps
//!
//! Purely observational: the engine writes to it and never reads it back.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::algorithm::complexity::Evaluation;
use crate::io::error::{HintError, Result};
use crate::spatial::Hyperinterval;

/// Writer for per-step growth records
///
/// Only accepted steps are recorded; a rejected candidate leaves no row.
pub struct TraceWriter {
    sink: Box<dyn Write>,
    header_written: bool,
}

impl TraceWriter {
    /// Trace into a newly created file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| HintError::FileSystem {
            path: path.to_path_buf(),
            operation: "create trace",
            source: e,
        })?;
        Ok(Self::from_writer(Box::new(BufWriter::new(file))))
    }

    /// Trace into any writer
    pub fn from_writer(sink: Box<dyn Write>) -> Self {
        Self {
            sink,
            header_written: false,
        }
    }

    /// Append one accepted growth step
    ///
    /// Columns: discovery, step, lower bounds, upper bounds, log-volume,
    /// covered fraction of the database, complexity.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink rejects the write
    pub fn record(
        &mut self,
        discovery: usize,
        step: usize,
        hint: &Hyperinterval,
        evaluation: &Evaluation,
        records: usize,
    ) -> Result<()> {
        if !self.header_written {
            let columns: Vec<String> = (0..hint.dims())
                .map(|dim| format!("lower_{dim}"))
                .chain((0..hint.dims()).map(|dim| format!("upper_{dim}")))
                .collect();
            writeln!(
                self.sink,
                "discovery\tstep\t{}\tlog_volume\tcoverage\tcomplexity",
                columns.join("\t")
            )?;
            self.header_written = true;
        }

        let coverage = if records == 0 {
            0.0
        } else {
            evaluation.inside_count as f64 / records as f64
        };
        let bounds: Vec<String> = hint
            .lower()
            .iter()
            .chain(hint.upper())
            .map(f64::to_string)
            .collect();
        writeln!(
            self.sink,
            "{discovery}\t{step}\t{}\t{}\t{coverage}\t{}",
            bounds.join("\t"),
            evaluation.log_volume,
            evaluation.complexity
        )?;
        Ok(())
    }

    /// Flush buffered records
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot be flushed
    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }
}
