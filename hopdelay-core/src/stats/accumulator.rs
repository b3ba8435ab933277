use crate::align::{MatchClass, MatchedPair};
use crate::error::DelayError;
use crate::stats::types::{CadenceBreakdown, DelayStats};

/// Running statistics over one run's matches, in emission order.
#[derive(Debug, Clone, Default)]
pub struct DelayAccumulator {
    delays: Vec<i64>,
    sum: i128,
    min: i64,
    max: i64,
    cadence: Option<CadenceTally>,
}

#[derive(Debug, Clone, Copy, Default)]
struct CadenceTally {
    fast_count: usize,
    fast_sum: i128,
    interval_count: usize,
    interval_sum: i128,
}

impl DelayAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pair: &MatchedPair) {
        let delay = pair.delay();

        if self.delays.is_empty() {
            self.min = delay;
            self.max = delay;
        } else {
            self.min = self.min.min(delay);
            self.max = self.max.max(delay);
        }

        self.delays.push(delay);
        self.sum += i128::from(delay);

        if let Some(class) = pair.class() {
            let tally = self.cadence.get_or_insert_with(CadenceTally::default);
            match class {
                MatchClass::Fast => {
                    tally.fast_count += 1;
                    tally.fast_sum += i128::from(delay);
                }
                MatchClass::Interval { step } => {
                    tally.interval_count += 1;
                    tally.interval_sum += i128::from(step);
                }
            }
        }
    }

    pub fn extend<'a>(&mut self, pairs: impl IntoIterator<Item = &'a MatchedPair>) {
        for pair in pairs {
            self.push(pair);
        }
    }

    pub fn count(&self) -> usize {
        self.delays.len()
    }

    /// Every delay seen so far, in match order.
    pub fn delays(&self) -> &[i64] {
        &self.delays
    }

    /// Count, sum, extremes and mean. The median is left for the selector.
    pub fn finalize(&self) -> Result<DelayStats, DelayError> {
        let count = self.delays.len();
        if count == 0 {
            return Err(DelayError::NoMatches);
        }

        Ok(DelayStats {
            count,
            sum: self.sum,
            min: self.min,
            max: self.max,
            mean: self.sum as f64 / count as f64,
            median: None,
        })
    }

    pub fn cadence(&self) -> Option<CadenceBreakdown> {
        self.cadence.map(|t| CadenceBreakdown {
            fast_count: t.fast_count,
            fast_mean_delay: mean(t.fast_sum, t.fast_count),
            interval_count: t.interval_count,
            interval_mean_step: mean(t.interval_sum, t.interval_count),
        })
    }
}

fn mean(sum: i128, count: usize) -> Option<f64> {
    (count > 0).then(|| sum as f64 / count as f64)
}
