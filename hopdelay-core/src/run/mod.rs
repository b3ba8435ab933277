//! One analysis run, end to end:
//!
//! capture files
//! read_streams
//! StreamAligner
//! DelayAccumulator + OrderStatisticSelector
//! RunReport
//!
//! Every run owns its parser, cursors, accumulator and heap. Nothing is shared between runs,
//! which is what lets [`execute_batch`] run them side by side.

mod batch;
mod pipeline;
mod profile;

#[cfg(test)]
mod tests;

pub use batch::{BatchOutcome, execute_batch};
pub use pipeline::{RunReport, execute};
pub use profile::{AnalysisSettings, ReportSettings, RunProfile};
