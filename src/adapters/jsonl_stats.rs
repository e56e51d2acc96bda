//! JSONL stats sink - exports match results to JSON Lines format

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{Result, ports::StatsSink, versus::MatchSummary};

/// Stats sink that appends one JSON object per completed match.
///
/// Each summary is written as a single line and flushed immediately, so
/// results survive even if the process exits without a clean shutdown.
pub struct JsonlStatsSink {
    writer: BufWriter<File>,
}

impl JsonlStatsSink {
    /// Create a new JSONL stats sink writing to `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        Ok(Self { writer })
    }
}

impl StatsSink for JsonlStatsSink {
    fn record_match(&mut self, summary: &MatchSummary) -> Result<()> {
        serde_json::to_writer(&mut self.writer, summary)?;
        writeln!(&mut self.writer)?;
        self.writer.flush()?;

        Ok(())
    }
}
