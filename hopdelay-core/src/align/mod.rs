//! Stream alignment
//!
//! Two capture points rarely log the same set of events: one side loses packets, the other
//! fires more often, and clocks drift. The aligner walks both sequences with one cursor each
//! and asks an [`AlignmentStrategy`] what to do with the current pair:
//!
//! - accept it as a match and advance both cursors, or
//! - drop the event on one side and retry.
//!
//! The strategy owns the thresholds; the walk itself knows nothing about them.

mod aligner;
mod cadence;
mod decision;
mod strategy;
mod types;
mod window;


pub use aligner::{Alignment, AlignmentCounts, StreamAligner};
pub use cadence::{CadenceCheck, MatchClass};
pub use decision::AlignDecision;
pub use strategy::AlignmentStrategy;
pub use types::MatchedPair;
pub use window::ToleranceWindow;
