//! Report output
//!
//! A finished run is a replayable sequence of matched pairs plus one summary record. Sinks
//! receive the rows first, then the summary, then a final `finish` call:
//!
//! RunReport
//! deliver
//! ReportSink (memory, CSV files)
//!
//! Console rendering of the summary lives in [`render`].

mod csv_sink;
mod memory;
pub mod render;
mod sink;
mod types;

#[cfg(test)]
mod tests;

pub use csv_sink::CsvReportSink;
pub(crate) use csv_sink::is_valid_report_name;
pub use memory::MemorySink;
pub use render::{ReportFormat, default_report_format, render_summary};
pub use sink::{ReportSink, deliver};
pub use types::RunSummary;
