use crate::error::DelayError;
use crate::event::error::RecordError;
use crate::event::timestamp::{ReferenceDate, parse_epoch};
use crate::event::types::{Channel, Event, TimeUnit};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat {
    /// `HH:MM:SS` plus a fractional suffix, anchored on the reference date.
    Clock,
    /// Integer count since the Unix epoch.
    Epoch(TimeUnit),
}

/// Raw classification code to logical channel.
///
/// Different capture tools use different numeric codes for the same two observation points,
/// so the table is always supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelMap {
    codes: HashMap<i64, Channel>,
}

impl ChannelMap {
    /// Fails when a code is claimed by both channels or a channel has no code at all.
    pub fn new(entries: impl IntoIterator<Item = (i64, Channel)>) -> Result<Self, DelayError> {
        let mut codes = HashMap::new();

        for (code, channel) in entries {
            match codes.insert(code, channel) {
                Some(previous) if previous != channel => {
                    return Err(DelayError::configuration(format!(
                        "channel code {code} is mapped to both {previous} and {channel}"
                    )));
                }
                _ => {}
            }
        }

        for channel in [Channel::Before, Channel::After] {
            if !codes.values().any(|c| *c == channel) {
                return Err(DelayError::configuration(format!(
                    "no channel code is mapped to {channel}"
                )));
            }
        }

        Ok(Self { codes })
    }

    pub fn lookup(&self, code: i64) -> Option<Channel> {
        self.codes.get(&code).copied()
    }

    /// Sorted codes that map to `channel`.
    pub fn codes_for(&self, channel: Channel) -> Vec<i64> {
        let mut out: Vec<i64> = self
            .codes
            .iter()
            .filter(|(_, c)| **c == channel)
            .map(|(code, _)| *code)
            .collect();
        out.sort_unstable();
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelSource {
    /// The first input file is `Before`, the second `After`.
    Positional,
    /// Both channels may interleave in one file; a code field tells them apart.
    Field { index: usize, mapping: ChannelMap },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLayout {
    pub delimiter: char,
    pub skip_header: bool,
    pub time_field: usize,
    pub time_format: TimeFormat,
    pub channels: ChannelSource,
}

impl RecordLayout {
    pub fn min_fields(&self) -> usize {
        let channel_field = match &self.channels {
            ChannelSource::Positional => 0,
            ChannelSource::Field { index, .. } => *index,
        };
        self.time_field.max(channel_field) + 1
    }
}

impl Default for RecordLayout {
    fn default() -> Self {
        Self {
            delimiter: ',',
            skip_header: true,
            time_field: 1,
            time_format: TimeFormat::Clock,
            channels: ChannelSource::Positional,
        }
    }
}

/// Turns one split record into a typed [`Event`].
#[derive(Debug, Clone)]
pub struct EventParser {
    layout: RecordLayout,
    reference: ReferenceDate,
}

impl EventParser {
    pub fn new(layout: RecordLayout, reference: ReferenceDate) -> Self {
        Self { layout, reference }
    }

    pub fn layout(&self) -> &RecordLayout {
        &self.layout
    }

    /// Returns `Ok(None)` for records whose channel code is not in the mapping.
    ///
    /// `file_channel` is the channel implied by the input file and is only consulted for
    /// positional layouts.
    pub fn parse_record(
        &self,
        fields: &[&str],
        file_channel: Channel,
    ) -> Result<Option<Event>, RecordError> {
        let expected = self.layout.min_fields();
        if fields.len() < expected {
            return Err(RecordError::ShortRecord {
                expected,
                found: fields.len(),
            });
        }

        let channel = match &self.layout.channels {
            ChannelSource::Positional => file_channel,
            ChannelSource::Field { index, mapping } => {
                let raw = fields[*index].trim();
                if raw.is_empty() {
                    return Err(RecordError::MissingChannelCode { field: *index });
                }
                let code = raw
                    .parse::<i64>()
                    .map_err(|_| RecordError::InvalidChannelCode {
                        value: raw.to_string(),
                    })?;
                match mapping.lookup(code) {
                    Some(channel) => channel,
                    None => return Ok(None),
                }
            }
        };

        let field = fields[self.layout.time_field];
        let composite_time = match self.layout.time_format {
            TimeFormat::Clock => self.reference.parse_clock(field)?,
            TimeFormat::Epoch(unit) => parse_epoch(field, unit)?,
        };

        Ok(Some(Event::new(channel, composite_time)))
    }
}
