use crate::align::MatchedPair;
use crate::error::DelayError;
use crate::report::types::RunSummary;

/// Destination for one run's report.
pub trait ReportSink {
    fn write_pair(&mut self, pair: &MatchedPair) -> Result<(), DelayError>;

    fn write_summary(&mut self, summary: &RunSummary) -> Result<(), DelayError>;

    /// Called once after the summary. Sinks that stage output make it visible here.
    fn finish(&mut self) -> Result<(), DelayError> {
        Ok(())
    }
}

/// Replays `pairs` in match order, then the summary, into `sink`.
pub fn deliver(
    pairs: &[MatchedPair],
    summary: &RunSummary,
    sink: &mut dyn ReportSink,
) -> Result<(), DelayError> {
    for pair in pairs {
        sink.write_pair(pair)?;
    }
    sink.write_summary(summary)?;
    sink.finish()
}
