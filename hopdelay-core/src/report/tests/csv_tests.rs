use super::{pairs, summary};
use crate::event::TimeUnit;
use crate::report::{CsvReportSink, ReportSink, deliver};
use crate::stats::CadenceBreakdown;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

#[test]
fn writes_pairs_and_summary_files() {
    // Arrange
    let dir = tempdir().unwrap();
    let mut sink = CsvReportSink::create(dir.path(), "hop", TimeUnit::Us).unwrap();

    // Act
    deliver(&pairs(), &summary(TimeUnit::Us, None), &mut sink).unwrap();

    // Assert
    let rows = fs::read_to_string(dir.path().join("hop.pairs.csv")).unwrap();
    assert_eq!(
        rows,
        "before_timestamp,after_timestamp,delay\n100000,105000,5\n300000,310000,10\n"
    );

    let summary = fs::read_to_string(dir.path().join("hop.summary.csv")).unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(
        lines[0],
        "name,count,sum,avg,max,min,median,unit,dropped_before,dropped_after,trailing_before,trailing_after,unmapped"
    );
    assert_eq!(lines[1], "hop,2,15,7.5,10,5,7.5,us,1,0,0,0,4");
}

#[test]
fn summary_carries_cadence_columns_when_present() {
    // Arrange
    let dir = tempdir().unwrap();
    let mut sink = CsvReportSink::create(dir.path(), "hop", TimeUnit::Ns).unwrap();
    let cadence = CadenceBreakdown {
        fast_count: 1,
        fast_mean_delay: Some(5_000.0),
        interval_count: 1,
        interval_mean_step: Some(5_000.0),
    };

    // Act
    deliver(&pairs(), &summary(TimeUnit::Ns, Some(cadence)), &mut sink).unwrap();

    // Assert
    let summary = fs::read_to_string(dir.path().join("hop.summary.csv")).unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert!(lines[0].ends_with("fast_count,fast_avg_delay,interval_count,interval_avg_step"));
    assert!(lines[1].ends_with(",1,5000,1,5000"));
}

#[test]
fn unfinished_sink_leaves_no_files() {
    // Arrange
    let dir = tempdir().unwrap();

    // Act
    {
        let mut sink = CsvReportSink::create(dir.path(), "hop", TimeUnit::Ns).unwrap();
        for pair in pairs() {
            sink.write_pair(&pair).unwrap();
        }
    }

    // Assert
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn finish_without_summary_fails_and_writes_nothing() {
    // Arrange
    let dir = tempdir().unwrap();
    let mut sink = CsvReportSink::create(dir.path(), "hop", TimeUnit::Ns).unwrap();
    sink.write_pair(&pairs()[0]).unwrap();

    // Act
    let result = sink.finish();
    drop(sink);

    // Assert
    assert!(result.is_err());
    assert!(!dir.path().join("hop.pairs.csv").exists());
    assert!(!dir.path().join("hop.summary.csv").exists());
}

#[test]
fn writing_after_finish_is_rejected() {
    let dir = tempdir().unwrap();
    let mut sink = CsvReportSink::create(dir.path(), "hop", TimeUnit::Ns).unwrap();
    deliver(&pairs(), &summary(TimeUnit::Ns, None), &mut sink).unwrap();

    assert!(sink.write_pair(&pairs()[0]).is_err());
}

#[test]
fn run_name_with_delimiter_is_quoted() {
    // Arrange
    let dir = tempdir().unwrap();
    let mut named = summary(TimeUnit::Us, None);
    named.name = "sz,turnover".to_string();
    let mut sink = CsvReportSink::create(dir.path(), &named.name, TimeUnit::Us).unwrap();

    // Act
    deliver(&pairs(), &named, &mut sink).unwrap();

    // Assert
    let written = fs::read_to_string(dir.path().join("sz,turnover.summary.csv")).unwrap();
    let row = written.lines().nth(1).unwrap();
    assert!(row.starts_with("\"sz,turnover\",2,15,"));
}

#[test]
fn run_name_with_path_separator_is_rejected() {
    // Arrange
    let dir = tempdir().unwrap();

    // Act
    let result = CsvReportSink::create(dir.path(), "../escape", TimeUnit::Us);

    // Assert
    assert!(matches!(
        result,
        Err(crate::error::DelayError::Configuration { .. })
    ));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
