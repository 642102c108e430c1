//! Record sinks.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use survey_model::NormalizedRecord;

use crate::error::{OutputError, Result};

/// Destination for normalized records.
///
/// Records are written in row order; `finish` flushes whatever the sink
/// buffers. Writing after `finish` is an error.
pub trait RecordSink {
    fn write(&mut self, record: &NormalizedRecord) -> Result<()>;

    fn finish(&mut self) -> Result<()>;
}

/// Writes one compact JSON document per line.
pub struct JsonLinesSink<W: Write> {
    writer: BufWriter<W>,
    target: String,
    written: usize,
    finished: bool,
}

impl JsonLinesSink<File> {
    /// Creates (or truncates) the file at `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| OutputError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "created record output");
        Ok(Self::new(file, path.display().to_string()))
    }
}

impl<W: Write> JsonLinesSink<W> {
    /// Wraps any writer. `target` names it in errors and logs.
    pub fn new(writer: W, target: impl Into<String>) -> Self {
        Self {
            writer: BufWriter::new(writer),
            target: target.into(),
            written: 0,
            finished: false,
        }
    }

    /// Number of records written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flushes and returns the inner writer.
    pub fn into_inner(self) -> Result<W> {
        let target = self.target;
        self.writer
            .into_inner()
            .map_err(|e| OutputError::Write {
                target,
                source: e.into_error(),
            })
    }

    fn io_error(&self, source: std::io::Error) -> OutputError {
        OutputError::Write {
            target: self.target.clone(),
            source,
        }
    }
}

impl<W: Write> RecordSink for JsonLinesSink<W> {
    fn write(&mut self, record: &NormalizedRecord) -> Result<()> {
        if self.finished {
            return Err(OutputError::Finished {
                target: self.target.clone(),
            });
        }
        let line =
            serde_json::to_string(record).map_err(|source| OutputError::Serialize { source })?;
        writeln!(self.writer, "{line}").map_err(|e| self.io_error(e))?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().map_err(|e| self.io_error(e))?;
        self.finished = true;
        tracing::debug!(output = %self.target, records = self.written, "finished record output");
        Ok(())
    }
}

/// Collects records in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Vec<NormalizedRecord>,
    finished: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[NormalizedRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<NormalizedRecord> {
        self.records
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl RecordSink for MemorySink {
    fn write(&mut self, record: &NormalizedRecord) -> Result<()> {
        if self.finished {
            return Err(OutputError::Finished {
                target: "memory".to_string(),
            });
        }
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}
