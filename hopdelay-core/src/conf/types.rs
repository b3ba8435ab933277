use crate::event::{Channel, TimeUnit};
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One analysis profile as written in HCL. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileSpec {
    /// Anchors clock-format timestamps. Required for `time_format = "clock"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_date: Option<NaiveDate>,
    pub utc_offset_minutes: i32,
    pub record: RecordSpec,
    /// Absent means positional: first file `before`, second file `after`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<ChannelsSpec>,
    pub tolerance: ToleranceSpec,
    pub report: ReportSpec,
    pub runs: Vec<RunSpec>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecordSpec {
    pub delimiter: String,
    pub skip_header: bool,
    /// Zero-based.
    pub time_field: usize,
    pub time_format: TimeFormatSpec,
    /// Unit of epoch-format time fields.
    pub epoch_unit: TimeUnit,
}

impl Default for RecordSpec {
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(),
            skip_header: true,
            time_field: 1,
            time_format: TimeFormatSpec::Clock,
            epoch_unit: TimeUnit::Ns,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TimeFormatSpec {
    #[default]
    Clock,
    Epoch,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChannelsSpec {
    /// Zero-based index of the integer channel code.
    pub field: usize,
    pub before: Vec<i64>,
    pub after: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToleranceSpec {
    /// Exclusive lower bound in `unit`. Defaults to 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<i64>,
    /// Inclusive upper bound in `unit`. Defaults to one second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<i64>,
    pub unit: TimeUnit,
    /// The side treated as running ahead, dropped when a delay exceeds the window.
    pub drop: DropSide,
    pub secondary: SecondarySpec,
    /// In `unit`. Only read by `secondary = "after_gap"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_gap: Option<i64>,
}

/// [`Channel`] with a `before` default, so the tolerance section can derive `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct DropSide(pub Channel);

impl Default for DropSide {
    fn default() -> Self {
        Self(Channel::Before)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SecondarySpec {
    #[default]
    None,
    IncreasingDelay,
    AfterGap,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    /// Falls back to the tolerance unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<TimeUnit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RunSpec {
    pub name: String,
    pub before: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<PathBuf>,
}
