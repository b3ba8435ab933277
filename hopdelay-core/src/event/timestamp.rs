use crate::event::error::RecordError;
use crate::event::types::{CompositeTimestamp, TimeUnit};
use chrono::{FixedOffset, NaiveDate, NaiveTime, Offset, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static CLOCK_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{2}):(\d{2}):(\d{2})").expect("clock time pattern is valid"));

const NANOS_PER_SECOND: i64 = 1_000_000_000;
const MAX_FRACTION_DIGITS: usize = 9;

/// Calendar date that anchors bare `HH:MM:SS` clock strings to absolute time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceDate {
    date: NaiveDate,
    offset: FixedOffset,
}

impl ReferenceDate {
    pub fn utc(date: NaiveDate) -> Self {
        Self {
            date,
            offset: Utc.fix(),
        }
    }

    /// `None` when the offset is outside ±24h.
    pub fn with_offset(date: NaiveDate, utc_offset_minutes: i32) -> Option<Self> {
        let offset = FixedOffset::east_opt(utc_offset_minutes.checked_mul(60)?)?;
        Some(Self { date, offset })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn utc_offset_minutes(&self) -> i32 {
        self.offset.local_minus_utc() / 60
    }

    /// Whole seconds since the Unix epoch for `time` on the reference date.
    pub fn epoch_seconds(&self, time: NaiveTime) -> i64 {
        self.date.and_time(time).and_utc().timestamp() - i64::from(self.offset.local_minus_utc())
    }

    /// Parses a free-text field holding an `HH:MM:SS` clock time and a `.`-delimited suffix.
    ///
    /// The suffix is the text after the first `.` of the field, up to the next whitespace.
    pub(crate) fn parse_clock(&self, field: &str) -> Result<CompositeTimestamp, RecordError> {
        let Some(caps) = CLOCK_TIME.captures(field) else {
            return Err(RecordError::TimePatternNotFound {
                value: field.to_string(),
            });
        };

        let clock = &caps[0];
        let part = |i: usize| caps[i].parse::<u32>().unwrap_or(u32::MAX);
        let time = NaiveTime::from_hms_opt(part(1), part(2), part(3)).ok_or_else(|| {
            RecordError::InvalidClockTime {
                value: clock.to_string(),
            }
        })?;

        let fraction = field
            .split_once('.')
            .and_then(|(_, rest)| rest.split(char::is_whitespace).next())
            .unwrap_or_default();

        let nanos = fraction_nanos(fraction)?;

        self.epoch_seconds(time)
            .checked_mul(NANOS_PER_SECOND)
            .and_then(|whole| whole.checked_add(nanos))
            .map(CompositeTimestamp::from_nanos)
            .ok_or_else(|| RecordError::TimestampOutOfRange {
                value: field.to_string(),
            })
    }
}

/// Parses an epoch count in `unit`, optionally with a `.fraction` of that unit.
///
/// `1629790000.123456789` in seconds is exact; fractions finer than a nanosecond truncate.
pub(crate) fn parse_epoch(field: &str, unit: TimeUnit) -> Result<CompositeTimestamp, RecordError> {
    let trimmed = field.trim();
    let invalid = || RecordError::InvalidEpoch {
        value: trimmed.to_string(),
    };
    let out_of_range = || RecordError::TimestampOutOfRange {
        value: trimmed.to_string(),
    };

    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    let (negative, digits) = match whole.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, whole.strip_prefix('+').unwrap_or(whole)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let count: i128 = digits.parse().map_err(|_| invalid())?;
    let fraction = i128::from(fraction_nanos(fraction)?);
    let unit_nanos = i128::from(unit.nanos());

    let magnitude = count
        .checked_mul(unit_nanos)
        .and_then(|whole| whole.checked_add(fraction * unit_nanos / i128::from(NANOS_PER_SECOND)))
        .ok_or_else(out_of_range)?;
    let nanos = if negative { -magnitude } else { magnitude };

    i64::try_from(nanos)
        .map(CompositeTimestamp::from_nanos)
        .map_err(|_| out_of_range())
}

/// Scales a verbatim fractional-second suffix ("5", "123456", "123456789") to nanoseconds.
fn fraction_nanos(fraction: &str) -> Result<i64, RecordError> {
    if fraction.is_empty() {
        return Ok(0);
    }

    if fraction.len() > MAX_FRACTION_DIGITS || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RecordError::InvalidFraction {
            value: fraction.to_string(),
        });
    }

    let digits: i64 = fraction
        .parse()
        .map_err(|_| RecordError::InvalidFraction {
            value: fraction.to_string(),
        })?;

    let scale = 10_i64.pow((MAX_FRACTION_DIGITS - fraction.len()) as u32);
    Ok(digits * scale)
}
