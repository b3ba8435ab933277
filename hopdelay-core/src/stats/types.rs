use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DelayStats {
    pub count: usize,
    pub sum: i128,
    pub min: i64,
    pub max: i64,
    pub mean: f64,
    /// Filled in by the order statistic selector after the accumulator is finalized.
    pub median: Option<f64>,
}

impl DelayStats {
    pub fn with_median(self, median: f64) -> Self {
        Self {
            median: Some(median),
            ..self
        }
    }
}

/// Split of matches by cadence class, present when a cadence check ran.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CadenceBreakdown {
    pub fast_count: usize,
    /// Mean delay of fast matches.
    pub fast_mean_delay: Option<f64>,
    pub interval_count: usize,
    /// Mean step (delay increase or after-side gap) of interval matches.
    pub interval_mean_step: Option<f64>,
}
