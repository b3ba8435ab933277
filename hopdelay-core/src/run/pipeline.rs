use crate::align::{MatchedPair, StreamAligner};
use crate::error::DelayError;
use crate::event::{EventParser, read_streams};
use crate::report::{CsvReportSink, ReportSink, RunSummary, deliver};
use crate::run::profile::{ReportSettings, RunProfile};
use crate::stats::{DelayAccumulator, OrderStatisticSelector};
use std::path::PathBuf;
use tracing::{info, info_span, warn};

/// A completed run: the matched pairs in order and their summary.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub pairs: Vec<MatchedPair>,
    pub summary: RunSummary,
}

impl RunReport {
    pub fn write_to(&self, sink: &mut dyn ReportSink) -> Result<(), DelayError> {
        deliver(&self.pairs, &self.summary, sink)
    }

    /// Writes the CSV pair and summary files when `settings` names a report directory.
    ///
    /// Returns the summary file path, or `None` when no directory is configured.
    pub fn persist(&self, settings: &ReportSettings) -> Result<Option<PathBuf>, DelayError> {
        let Some(dir) = &settings.dir else {
            return Ok(None);
        };

        let mut sink = CsvReportSink::create(dir, &self.summary.name, settings.unit)?;
        let summary_path = sink.summary_path().to_path_buf();
        self.write_to(&mut sink)?;

        Ok(Some(summary_path))
    }
}

/// Runs the whole pipeline for one profile.
///
/// Either every stage succeeds and a complete report comes back, or the first failure is
/// returned and nothing has been written anywhere.
pub fn execute(profile: &RunProfile) -> Result<RunReport, DelayError> {
    let span = info_span!("run", name = %profile.name);
    let _guard = span.enter();

    let settings = &profile.settings;

    let parser = EventParser::new(settings.layout.clone(), settings.reference);
    let streams = read_streams(&parser, &profile.before, profile.after.as_deref())?;

    info!(
        before = streams.before.len(),
        after = streams.after.len(),
        unmapped = streams.unmapped,
        "loaded capture streams"
    );

    let aligner = StreamAligner::new(settings.window).with_cadence(settings.cadence);
    let alignment = aligner.align(&streams.before, &streams.after);

    let mut accumulator = DelayAccumulator::new();
    accumulator.extend(&alignment.pairs);

    let stats = accumulator.finalize().inspect_err(|_| {
        warn!(
            before = streams.before.len(),
            after = streams.after.len(),
            dropped_before = alignment.counts.dropped_before,
            dropped_after = alignment.counts.dropped_after,
            "no pairs fell inside the tolerance window"
        );
    })?;
    let median = OrderStatisticSelector::median(accumulator.delays())?;
    let stats = stats.with_median(median);

    info!(
        matched = stats.count,
        min = stats.min,
        max = stats.max,
        mean = stats.mean,
        median,
        "run complete"
    );

    Ok(RunReport {
        summary: RunSummary {
            name: profile.name.clone(),
            stats,
            alignment: alignment.counts,
            unmapped_records: streams.unmapped,
            cadence: accumulator.cadence(),
            unit: settings.report.unit,
        },
        pairs: alignment.pairs,
    })
}
