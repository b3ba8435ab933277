use crate::align::AlignmentCounts;
use crate::event::TimeUnit;
use crate::stats::{CadenceBreakdown, DelayStats};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub name: String,
    pub stats: DelayStats,
    pub alignment: AlignmentCounts,
    /// Records skipped because their channel code is not mapped.
    pub unmapped_records: usize,
    pub cadence: Option<CadenceBreakdown>,
    /// Unit the summary is rendered in. Stored values are always nanoseconds.
    pub unit: TimeUnit,
}
