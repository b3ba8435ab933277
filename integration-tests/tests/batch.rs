use hopdelay_core::DelayError;
use hopdelay_core::conf::load_config;
use hopdelay_core::run::execute_batch;
use integration_tests::harness::CaptureDir;
use pretty_assertions::assert_eq;

const PROFILE: &str = r#"
reference_date = "2021-08-24"

tolerance = {
  low  = 0
  high = 50
  unit = "us"
}

report = { dir = "reports" }

runs = [
  { name = "good", before = "good-before.csv", after = "good-after.csv" },
  { name = "silent", before = "silent-before.csv", after = "silent-after.csv" },
  { name = "broken", before = "broken-before.csv", after = "good-after.csv" },
]
"#;

/// One run failing leaves the other runs' results and reports intact
#[test]
fn failing_runs_do_not_affect_others() {
    // Arrange
    let dir = CaptureDir::new();
    dir.clock_capture("good-before.csv", &["09:30:01.000100", "09:30:01.000200"]);
    dir.clock_capture("good-after.csv", &["09:30:01.000110", "09:30:01.000230"]);
    dir.clock_capture("silent-before.csv", &["09:30:01.000100"]);
    dir.clock_capture("silent-after.csv", &["09:31:00.000000"]);
    dir.write("broken-before.csv", "seq,time\n0,09:30:01.0001234567891\n");
    let config = load_config(&dir.write("hopdelay.hcl", PROFILE)).unwrap();

    // Act
    let outcomes = execute_batch(&config.runs);
    for (outcome, profile) in outcomes.iter().zip(&config.runs) {
        if let Ok(report) = &outcome.result {
            report.persist(&profile.settings.report).unwrap();
        }
    }

    // Assert
    assert_eq!(outcomes.len(), 3);

    let good = outcomes[0].result.as_ref().unwrap();
    assert_eq!(good.summary.stats.count, 2);
    assert_eq!(good.summary.stats.median, Some(20_000.0));

    assert!(matches!(outcomes[1].result, Err(DelayError::NoMatches)));
    assert!(matches!(
        outcomes[2].result,
        Err(DelayError::MalformedRecord { line: 2, .. })
    ));

    assert_eq!(dir.files("reports"), vec!["good.pairs.csv", "good.summary.csv"]);
}
