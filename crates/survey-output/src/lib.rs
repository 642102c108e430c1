//! Output for normalized survey records.
//!
//! Records are handed to a [`RecordSink`] one at a time as rows are
//! normalized:
//!
//! - [`JsonLinesSink`]: one compact JSON document per line, to a file or any
//!   writer
//! - [`MemorySink`]: keeps records in memory (dry runs and tests)

mod error;
mod sink;

pub use error::{OutputError, Result};
pub use sink::{JsonLinesSink, MemorySink, RecordSink};
