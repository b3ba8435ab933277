//! Event parsing
//!
//! Raw capture logs are delimited text: one optional header row, then one record per line.
//! Every record that belongs to one of the two observation points becomes an [`Event`]:
//!
//! raw line
//! split on delimiter
//! EventParser (channel + composite timestamp)
//! ChannelStreams (before / after, file order)
//!
//! Records whose channel code is not mapped are dropped here and never reach the aligner.

mod error;
mod parse;
mod reader;
mod timestamp;
mod types;

#[cfg(test)]
mod tests;

pub use error::RecordError;
pub use parse::{ChannelMap, ChannelSource, EventParser, RecordLayout, TimeFormat};
pub use reader::{ChannelStreams, read_streams};
pub use timestamp::ReferenceDate;
pub use types::{Channel, CompositeTimestamp, Event, TimeUnit};
