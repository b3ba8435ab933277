mod batch_tests;
mod pipeline_tests;

use crate::align::{CadenceCheck, ToleranceWindow};
use crate::event::{Channel, RecordLayout, ReferenceDate, TimeFormat, TimeUnit};
use crate::run::{AnalysisSettings, ReportSettings, RunProfile};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

/// Epoch-nanosecond layout: `seq,time` rows after one header line.
pub(super) fn settings(low: i64, high: i64) -> AnalysisSettings {
    AnalysisSettings {
        layout: RecordLayout {
            time_format: TimeFormat::Epoch(TimeUnit::Ns),
            ..RecordLayout::default()
        },
        reference: ReferenceDate::utc(NaiveDate::from_ymd_opt(2021, 8, 24).unwrap()),
        window: ToleranceWindow::new(low, high, Channel::Before).unwrap(),
        cadence: CadenceCheck::Off,
        report: ReportSettings::default(),
    }
}

pub(super) fn write_capture(dir: &Path, file: &str, times: &[i64]) -> std::path::PathBuf {
    let mut body = String::from("seq,time\n");
    for (i, t) in times.iter().enumerate() {
        body.push_str(&format!("{i},{t}\n"));
    }
    let path = dir.join(file);
    fs::write(&path, body).unwrap();
    path
}

pub(super) fn profile(dir: &Path, name: &str, before: &[i64], after: &[i64]) -> RunProfile {
    RunProfile {
        name: name.to_string(),
        before: write_capture(dir, &format!("{name}-before.csv"), before),
        after: Some(write_capture(dir, &format!("{name}-after.csv"), after)),
        settings: settings(0, 50),
    }
}
