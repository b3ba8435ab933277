use crate::align::{CadenceCheck, ToleranceWindow};
use crate::event::{RecordLayout, ReferenceDate, TimeUnit};
use std::path::PathBuf;

/// Everything a run needs except its input files.
#[derive(Debug, Clone)]
pub struct AnalysisSettings {
    pub layout: RecordLayout,
    pub reference: ReferenceDate,
    /// Thresholds in nanoseconds.
    pub window: ToleranceWindow,
    pub cadence: CadenceCheck,
    pub report: ReportSettings,
}

#[derive(Debug, Clone, Default)]
pub struct ReportSettings {
    /// Where CSV reports go. `None` prints the summary only.
    pub dir: Option<PathBuf>,
    pub unit: TimeUnit,
}

#[derive(Debug, Clone)]
pub struct RunProfile {
    pub name: String,
    pub before: PathBuf,
    /// Absent when both channels are interleaved in `before`.
    pub after: Option<PathBuf>,
    pub settings: AnalysisSettings,
}
