use crate::align::decision::AlignDecision;
use crate::align::strategy::AlignmentStrategy;
use crate::error::DelayError;
use crate::event::Channel;

/// Accepts delays inside `(too_small_low, too_large_high]`.
///
/// A delay above the window means the `ahead` side holds an event the other side never saw,
/// so that event is dropped. A delay at or below the window drops the event on the other side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToleranceWindow {
    too_small_low: i64,
    too_large_high: i64,
    ahead: Channel,
}

impl ToleranceWindow {
    pub fn new(too_small_low: i64, too_large_high: i64, ahead: Channel) -> Result<Self, DelayError> {
        if too_small_low >= too_large_high {
            return Err(DelayError::configuration(format!(
                "tolerance window ({too_small_low}, {too_large_high}] is empty or inverted"
            )));
        }

        Ok(Self {
            too_small_low,
            too_large_high,
            ahead,
        })
    }

    pub fn too_small_low(&self) -> i64 {
        self.too_small_low
    }

    pub fn too_large_high(&self) -> i64 {
        self.too_large_high
    }

    pub fn ahead(&self) -> Channel {
        self.ahead
    }

    pub fn contains(&self, delay: i64) -> bool {
        delay > self.too_small_low && delay <= self.too_large_high
    }
}

impl AlignmentStrategy for ToleranceWindow {
    fn decide(&self, delay: i64) -> AlignDecision {
        if delay > self.too_large_high {
            AlignDecision::Drop(self.ahead)
        } else if delay <= self.too_small_low {
            AlignDecision::Drop(self.ahead.other())
        } else {
            AlignDecision::Match
        }
    }
}
