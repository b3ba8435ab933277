use super::summary;
use crate::event::TimeUnit;
use crate::report::{ReportFormat, render_summary};
use crate::stats::CadenceBreakdown;
use serde_json::Value;

#[test]
fn plain_summary_lists_every_field() {
    let out = render_summary(&summary(TimeUnit::Us, None), ReportFormat::Plain);

    assert!(out.contains("count: 2\n"));
    assert!(out.contains("avg: 7.5us\n"));
    assert!(out.contains("max: 10us\n"));
    assert!(out.contains("min: 5us\n"));
    assert!(out.contains("median: 7.5us\n"));
    assert!(out.contains("dropped: before=1 after=0\n"));
    assert!(out.contains("unmapped: 4\n"));
    assert!(!out.contains("fast:"));
}

#[test]
fn plain_summary_includes_cadence_when_present() {
    let cadence = CadenceBreakdown {
        fast_count: 3,
        fast_mean_delay: Some(2_000.0),
        interval_count: 0,
        interval_mean_step: None,
    };

    let out = render_summary(&summary(TimeUnit::Us, Some(cadence)), ReportFormat::Plain);

    assert!(out.contains("fast: 3 (avg delay 2us)\n"));
    assert!(out.contains("interval: 0 (avg step -)\n"));
}

#[test]
fn json_summary_is_scaled_to_unit() {
    // Act
    let out = render_summary(&summary(TimeUnit::Ms, None), ReportFormat::Json);

    // Assert
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["name"], "hop");
    assert_eq!(json["unit"], "ms");
    assert_eq!(json["count"], 2);
    assert_eq!(json["median"], 0.0075);
    assert_eq!(json["alignment"]["dropped_before"], 1);
    assert!(json["cadence"].is_null());
}

#[test]
fn pretty_summary_mentions_run_name_and_counts() {
    let out = render_summary(&summary(TimeUnit::Ns, None), ReportFormat::Pretty);

    assert!(out.contains("Delay summary"));
    assert!(out.contains("hop"));
    assert!(out.contains("7500ns"));
}
