use crate::error::DelayError;
use crate::run::execute_batch;
use crate::run::tests::profile;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[test]
fn batch_runs_are_isolated() {
    // Arrange
    let dir = tempdir().unwrap();
    let profiles = vec![
        profile(dir.path(), "first", &[100, 200], &[110, 220]),
        profile(dir.path(), "empty", &[100], &[900]),
        profile(dir.path(), "third", &[1_000, 2_000, 3_000], &[1_001, 2_002, 3_003]),
    ];

    // Act
    let outcomes = execute_batch(&profiles);

    // Assert
    let names: Vec<_> = outcomes.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["first", "empty", "third"]);

    let first = outcomes[0].result.as_ref().unwrap();
    assert_eq!(first.summary.stats.count, 2);
    assert_eq!(first.summary.stats.sum, 30);

    assert!(matches!(outcomes[1].result, Err(DelayError::NoMatches)));

    let third = outcomes[2].result.as_ref().unwrap();
    assert_eq!(third.summary.stats.count, 3);
    assert_eq!(third.summary.stats.median, Some(2.0));
}

#[test]
fn empty_batch_yields_no_outcomes() {
    // Act
    let outcomes = execute_batch(&[]);

    // Assert
    assert!(outcomes.is_empty());
}
