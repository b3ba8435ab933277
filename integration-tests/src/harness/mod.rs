pub mod fixtures;
pub mod tracing;

pub use fixtures::{CaptureDir, clock_profile};
pub use tracing::{CapturedEvent, capture_events};
