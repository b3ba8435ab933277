//! Delay statistics
//!
//! matched pairs
//! DelayAccumulator (count / sum / min / max, delays kept in match order)
//! OrderStatisticSelector (median, bounded min-heap)
//! DelayStats

mod accumulator;
mod median;
mod types;


pub use accumulator::DelayAccumulator;
pub use median::OrderStatisticSelector;
pub use types::{CadenceBreakdown, DelayStats};
