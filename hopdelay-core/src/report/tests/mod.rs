mod csv_tests;
mod render_tests;

use crate::align::{AlignmentCounts, MatchedPair};
use crate::event::{CompositeTimestamp, TimeUnit};
use crate::report::RunSummary;
use crate::stats::{CadenceBreakdown, DelayStats};

pub(super) fn pairs() -> Vec<MatchedPair> {
    vec![
        MatchedPair::new(
            CompositeTimestamp::from_nanos(100_000),
            CompositeTimestamp::from_nanos(105_000),
            None,
        ),
        MatchedPair::new(
            CompositeTimestamp::from_nanos(300_000),
            CompositeTimestamp::from_nanos(310_000),
            None,
        ),
    ]
}

pub(super) fn summary(unit: TimeUnit, cadence: Option<CadenceBreakdown>) -> RunSummary {
    RunSummary {
        name: "hop".to_string(),
        stats: DelayStats {
            count: 2,
            sum: 15_000,
            min: 5_000,
            max: 10_000,
            mean: 7_500.0,
            median: Some(7_500.0),
        },
        alignment: AlignmentCounts {
            before_events: 3,
            after_events: 2,
            dropped_before: 1,
            dropped_after: 0,
            trailing_before: 0,
            trailing_after: 0,
        },
        unmapped_records: 4,
        cadence,
        unit,
    }
}
