use crate::align::MatchedPair;
use crate::error::DelayError;
use crate::report::sink::ReportSink;
use crate::report::types::RunSummary;

/// Keeps everything in memory. Handy for embedding and for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub rows: Vec<MatchedPair>,
    pub summary: Option<RunSummary>,
    pub finished: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportSink for MemorySink {
    fn write_pair(&mut self, pair: &MatchedPair) -> Result<(), DelayError> {
        self.rows.push(*pair);
        Ok(())
    }

    fn write_summary(&mut self, summary: &RunSummary) -> Result<(), DelayError> {
        self.summary = Some(summary.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), DelayError> {
        self.finished = true;
        Ok(())
    }
}
