use crate::error::DelayError;
use crate::report::MemorySink;
use crate::run::execute;
use crate::run::tests::profile;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

#[test]
fn execute_drops_the_ahead_before_event() {
    // Arrange
    let dir = tempdir().unwrap();
    let profile = profile(dir.path(), "drop", &[100, 200, 300], &[105, 310]);

    // Act
    let report = execute(&profile).unwrap();

    // Assert
    let triples: Vec<_> = report
        .pairs
        .iter()
        .map(|p| (p.before().as_nanos(), p.after().as_nanos(), p.delay()))
        .collect();
    assert_eq!(triples, vec![(100, 105, 5), (300, 310, 10)]);
    assert_eq!(report.summary.name, "drop");
    assert_eq!(report.summary.stats.count, 2);
    assert_eq!(report.summary.stats.median, Some(7.5));
    assert_eq!(report.summary.alignment.dropped_before, 1);
}

#[test]
fn execute_fails_with_no_matches_when_nothing_is_in_window() {
    // Arrange
    let dir = tempdir().unwrap();
    let profile = profile(dir.path(), "none", &[100, 200], &[400, 500]);

    // Act
    let result = execute(&profile);

    // Assert
    assert!(matches!(result, Err(DelayError::NoMatches)));
}

#[test]
fn execute_reports_malformed_record_with_line() {
    // Arrange
    let dir = tempdir().unwrap();
    let profile = profile(dir.path(), "bad", &[100, 200], &[105, 205]);
    fs::write(&profile.before, "seq,time\n0,100\n1,oops\n").unwrap();

    // Act
    let result = execute(&profile);

    // Assert
    match result {
        Err(DelayError::MalformedRecord { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected malformed record, got {other:?}"),
    }
}

#[test]
fn execute_fails_on_missing_input() {
    // Arrange
    let dir = tempdir().unwrap();
    let mut profile = profile(dir.path(), "missing", &[100], &[105]);
    profile.after = Some(dir.path().join("nope.csv"));

    // Act
    let result = execute(&profile);

    // Assert
    assert!(matches!(result, Err(DelayError::ReadInput { .. })));
}

#[test]
fn report_delivers_pairs_then_summary() {
    // Arrange
    let dir = tempdir().unwrap();
    let report = execute(&profile(dir.path(), "sink", &[100, 200], &[110, 230])).unwrap();
    let mut sink = MemorySink::default();

    // Act
    report.write_to(&mut sink).unwrap();

    // Assert
    assert_eq!(sink.rows.len(), 2);
    assert_eq!(sink.summary.as_ref(), Some(&report.summary));
    assert!(sink.finished);
}

#[test]
fn persist_without_directory_writes_nothing() {
    // Arrange
    let dir = tempdir().unwrap();
    let profile = profile(dir.path(), "quiet", &[100], &[120]);
    let report = execute(&profile).unwrap();

    // Act
    let written = report.persist(&profile.settings.report).unwrap();

    // Assert
    assert_eq!(written, None);
}

#[test]
fn persist_writes_both_csv_files() {
    // Arrange
    let dir = tempdir().unwrap();
    let mut profile = profile(dir.path(), "saved", &[100, 200], &[120, 230]);
    profile.settings.report.dir = Some(dir.path().join("reports"));
    let report = execute(&profile).unwrap();

    // Act
    let written = report.persist(&profile.settings.report).unwrap();

    // Assert
    let summary_path = dir.path().join("reports").join("saved.summary.csv");
    assert_eq!(written, Some(summary_path.clone()));
    assert!(summary_path.exists());
    let pairs = fs::read_to_string(dir.path().join("reports").join("saved.pairs.csv")).unwrap();
    assert_eq!(pairs, "before_timestamp,after_timestamp,delay\n100,120,20\n200,230,30\n");
}
