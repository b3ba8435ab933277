use crate::align::{CadenceCheck, ToleranceWindow};
use crate::conf::error::ConfigError;
use crate::conf::types::{ProfileSpec, SecondarySpec, TimeFormatSpec};
use crate::conf::validate::default_high_nanos;
use crate::event::{
    Channel, ChannelMap, ChannelSource, RecordLayout, ReferenceDate, TimeFormat, TimeUnit,
};
use crate::run::{AnalysisSettings, ReportSettings, RunProfile};
use chrono::NaiveDate;
use std::path::Path;

/// Turns a validated profile into engine settings.
///
/// Relative report directories resolve against `base_dir`.
pub fn lower_settings(spec: &ProfileSpec, base_dir: &Path) -> Result<AnalysisSettings, ConfigError> {
    let record = &spec.record;

    let delimiter = single_char(&record.delimiter)?;

    let time_format = match record.time_format {
        TimeFormatSpec::Clock => TimeFormat::Clock,
        TimeFormatSpec::Epoch => TimeFormat::Epoch(record.epoch_unit),
    };

    let channels = match &spec.channels {
        None => ChannelSource::Positional,
        Some(channels) => {
            let entries = channels
                .before
                .iter()
                .map(|code| (*code, Channel::Before))
                .chain(channels.after.iter().map(|code| (*code, Channel::After)));
            ChannelSource::Field {
                index: channels.field,
                mapping: ChannelMap::new(entries)?,
            }
        }
    };

    // Epoch timestamps never consult the date.
    let date = match (spec.reference_date, record.time_format) {
        (Some(date), _) => date,
        (None, TimeFormatSpec::Epoch) => NaiveDate::default(),
        (None, TimeFormatSpec::Clock) => return Err(ConfigError::MissingReferenceDate),
    };
    let reference = ReferenceDate::with_offset(date, spec.utc_offset_minutes).ok_or(
        ConfigError::InvalidUtcOffset {
            minutes: spec.utc_offset_minutes,
        },
    )?;

    let tolerance = &spec.tolerance;
    let unit = tolerance.unit;
    let low = nanos(tolerance.low.unwrap_or(0), unit)?;
    let high = match tolerance.high {
        Some(high) => nanos(high, unit)?,
        None => default_high_nanos(),
    };
    let window = ToleranceWindow::new(low, high, tolerance.drop.0)?;

    let cadence = match tolerance.secondary {
        SecondarySpec::None => CadenceCheck::Off,
        SecondarySpec::IncreasingDelay => CadenceCheck::IncreasingDelay,
        SecondarySpec::AfterGap => {
            let gap = tolerance.max_gap.ok_or(ConfigError::MissingMaxGap)?;
            CadenceCheck::AfterGap {
                max_gap: nanos(gap, unit)?,
            }
        }
    };

    Ok(AnalysisSettings {
        layout: RecordLayout {
            delimiter,
            skip_header: record.skip_header,
            time_field: record.time_field,
            time_format,
            channels,
        },
        reference,
        window,
        cadence,
        report: ReportSettings {
            dir: spec.report.dir.as_ref().map(|dir| base_dir.join(dir)),
            unit: spec.report.unit.unwrap_or(unit),
        },
    })
}

/// One [`RunProfile`] per `runs` entry, input paths resolved against `base_dir`.
pub fn lower_runs(
    spec: &ProfileSpec,
    settings: &AnalysisSettings,
    base_dir: &Path,
) -> Vec<RunProfile> {
    spec.runs
        .iter()
        .map(|run| RunProfile {
            name: run.name.clone(),
            before: base_dir.join(&run.before),
            after: run.after.as_ref().map(|after| base_dir.join(after)),
            settings: settings.clone(),
        })
        .collect()
}

fn single_char(value: &str) -> Result<char, ConfigError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::InvalidDelimiter {
            value: value.to_string(),
        }),
    }
}

fn nanos(value: i64, unit: TimeUnit) -> Result<i64, ConfigError> {
    unit.to_nanos(value)
        .ok_or(ConfigError::ThresholdOutOfRange { value })
}
