use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two observation points being aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Channel A: the event as seen before the hop.
    Before,
    /// Channel B: the same event seen after the hop.
    After,
}

impl Channel {
    pub fn other(self) -> Self {
        match self {
            Channel::Before => Channel::After,
            Channel::After => Channel::Before,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Before => f.write_str("before"),
            Channel::After => f.write_str("after"),
        }
    }
}

/// Nanoseconds since the Unix epoch.
///
/// Built once while parsing from the whole-second part and the fractional suffix, so suffixes of
/// different widths on the two channels still subtract correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CompositeTimestamp(i64);

impl CompositeTimestamp {
    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    pub const fn as_nanos(self) -> i64 {
        self.0
    }

    /// Signed distance from `self` to `later`.
    pub fn delay_to(self, later: CompositeTimestamp) -> i64 {
        later.0.saturating_sub(self.0)
    }
}

impl fmt::Display for CompositeTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub channel: Channel,
    pub composite_time: CompositeTimestamp,
}

impl Event {
    pub fn new(channel: Channel, composite_time: CompositeTimestamp) -> Self {
        Self {
            channel,
            composite_time,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    S,
    Ms,
    Us,
    #[default]
    Ns,
}

impl TimeUnit {
    pub const fn nanos(self) -> i64 {
        match self {
            TimeUnit::S => 1_000_000_000,
            TimeUnit::Ms => 1_000_000,
            TimeUnit::Us => 1_000,
            TimeUnit::Ns => 1,
        }
    }

    /// Converts a count of this unit to nanoseconds, `None` on overflow.
    pub fn to_nanos(self, value: i64) -> Option<i64> {
        value.checked_mul(self.nanos())
    }

    pub fn from_nanos(self, nanos: f64) -> f64 {
        nanos / self.nanos() as f64
    }

    pub fn suffix(self) -> &'static str {
        match self {
            TimeUnit::S => "s",
            TimeUnit::Ms => "ms",
            TimeUnit::Us => "us",
            TimeUnit::Ns => "ns",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}
