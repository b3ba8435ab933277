use crate::error::DelayError;
use crate::event::parse::{ChannelSource, EventParser};
use crate::event::types::{Channel, Event};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use tracing::{debug, warn};

/// The two per-channel event sequences of one run, each in file order.
#[derive(Debug, Clone, Default)]
pub struct ChannelStreams {
    pub before: Vec<Event>,
    pub after: Vec<Event>,
    /// Records whose channel code is not in the mapping.
    pub unmapped: usize,
}

impl ChannelStreams {
    fn push(&mut self, event: Event) {
        match event.channel {
            Channel::Before => self.before.push(event),
            Channel::After => self.after.push(event),
        }
    }
}

/// Reads one or two capture files into per-channel event sequences.
///
/// Positional layouts need both files; coded layouts read `before` and then `after` (if given)
/// and route every record by its channel code.
pub fn read_streams(
    parser: &EventParser,
    before: &Path,
    after: Option<&Path>,
) -> Result<ChannelStreams, DelayError> {
    let mut streams = ChannelStreams::default();

    if matches!(parser.layout().channels, ChannelSource::Positional) && after.is_none() {
        return Err(DelayError::configuration(
            "positional channels need both a before and an after input file",
        ));
    }

    read_file(parser, before, Channel::Before, &mut streams)?;
    if let Some(after) = after {
        read_file(parser, after, Channel::After, &mut streams)?;
    }

    Ok(streams)
}

fn read_file(
    parser: &EventParser,
    path: &Path,
    file_channel: Channel,
    streams: &mut ChannelStreams,
) -> Result<(), DelayError> {
    let layout = parser.layout();
    let delimiter = u8::try_from(layout.delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| {
            DelayError::configuration(format!(
                "delimiter '{}' is not a single ASCII character",
                layout.delimiter
            ))
        })?;

    let file = File::open(path).map_err(|e| DelayError::read_input(path, e))?;
    // Quoted fields may contain the delimiter; records may differ in width.
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(layout.skip_header)
        .flexible(true)
        .from_reader(file);

    let mut parsed = 0usize;
    let mut unmapped = 0usize;
    let mut blank = 0usize;

    for record in reader.records() {
        let record = record.map_err(|e| DelayError::read_input(path, e.into()))?;

        if record.iter().all(|field| field.trim().is_empty()) {
            blank += 1;
            continue;
        }

        let fields: Vec<&str> = record.iter().collect();
        let line = record.position().map_or(0, |pos| pos.line() as usize);

        match parser.parse_record(&fields, file_channel) {
            Ok(Some(event)) => {
                streams.push(event);
                parsed += 1;
            }
            Ok(None) => unmapped += 1,
            Err(reason) => {
                return Err(DelayError::MalformedRecord {
                    path: path.to_path_buf(),
                    line,
                    reason,
                });
            }
        }
    }

    if blank > 0 {
        warn!(path = %path.display(), blank, "skipped blank records");
    }

    debug!(
        path = %path.display(),
        parsed,
        unmapped,
        "read capture file"
    );

    streams.unmapped += unmapped;
    Ok(())
}
