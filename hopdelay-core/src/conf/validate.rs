use crate::conf::error::ConfigError;
use crate::conf::types::{ProfileSpec, SecondarySpec, TimeFormatSpec};
use crate::event::{Channel, TimeUnit};
use crate::report::is_valid_report_name;
use std::collections::HashSet;

const MAX_UTC_OFFSET_MINUTES: i32 = 24 * 60;
const DEFAULT_HIGH_NANOS: i64 = 1_000_000_000;

#[derive(Default)]
pub(crate) struct ValidationCtx {
    errors: Vec<ConfigError>,
}

impl ValidationCtx {
    pub fn push(&mut self, err: ConfigError) {
        self.errors.push(err);
    }

    pub fn into_result(self) -> Result<(), ConfigError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation {
                validation_errors: self.errors,
            })
        }
    }
}

/// Checks every semantic rule and reports all violations together.
pub fn validate_spec(spec: &ProfileSpec) -> Result<(), ConfigError> {
    let mut ctx = ValidationCtx::default();

    validate_record(spec, &mut ctx);
    validate_channels(spec, &mut ctx);
    validate_tolerance(spec, &mut ctx);
    validate_runs(spec, &mut ctx);

    ctx.into_result()
}

fn validate_record(spec: &ProfileSpec, ctx: &mut ValidationCtx) {
    if spec.record.delimiter.len() != 1 || !spec.record.delimiter.is_ascii() {
        ctx.push(ConfigError::InvalidDelimiter {
            value: spec.record.delimiter.clone(),
        });
    }

    if spec.record.time_format == TimeFormatSpec::Clock && spec.reference_date.is_none() {
        ctx.push(ConfigError::MissingReferenceDate);
    }

    if spec.utc_offset_minutes.abs() >= MAX_UTC_OFFSET_MINUTES {
        ctx.push(ConfigError::InvalidUtcOffset {
            minutes: spec.utc_offset_minutes,
        });
    }
}

fn validate_channels(spec: &ProfileSpec, ctx: &mut ValidationCtx) {
    let Some(channels) = &spec.channels else {
        return;
    };

    if channels.field == spec.record.time_field {
        ctx.push(ConfigError::FieldCollision {
            field: channels.field,
        });
    }

    for (channel, codes) in [
        (Channel::Before, &channels.before),
        (Channel::After, &channels.after),
    ] {
        if codes.is_empty() {
            ctx.push(ConfigError::EmptyChannel { channel });
        }
    }

    let before: HashSet<i64> = channels.before.iter().copied().collect();
    let mut reported = HashSet::new();
    for code in &channels.after {
        if before.contains(code) && reported.insert(*code) {
            ctx.push(ConfigError::AmbiguousChannelCode { code: *code });
        }
    }
}

fn validate_tolerance(spec: &ProfileSpec, ctx: &mut ValidationCtx) {
    let tolerance = &spec.tolerance;
    let unit = tolerance.unit;

    let low = scaled(tolerance.low.unwrap_or(0), unit, ctx);
    let high = match tolerance.high {
        Some(high) => scaled(high, unit, ctx),
        None => Some(DEFAULT_HIGH_NANOS),
    };

    if let (Some(low), Some(high)) = (low, high)
        && low >= high
    {
        ctx.push(ConfigError::InvertedThresholds { low, high });
    }

    if tolerance.secondary == SecondarySpec::AfterGap {
        match tolerance.max_gap {
            None => ctx.push(ConfigError::MissingMaxGap),
            Some(gap) if gap <= 0 => ctx.push(ConfigError::InvalidMaxGap { value: gap }),
            Some(gap) => {
                scaled(gap, unit, ctx);
            }
        }
    }
}

fn scaled(value: i64, unit: TimeUnit, ctx: &mut ValidationCtx) -> Option<i64> {
    let nanos = unit.to_nanos(value);
    if nanos.is_none() {
        ctx.push(ConfigError::ThresholdOutOfRange { value });
    }
    nanos
}

fn validate_runs(spec: &ProfileSpec, ctx: &mut ValidationCtx) {
    let mut seen = HashSet::new();

    for run in &spec.runs {
        if run.name.trim().is_empty() {
            ctx.push(ConfigError::EmptyRunName);
        } else if !is_valid_report_name(&run.name) {
            ctx.push(ConfigError::InvalidRunName {
                name: run.name.clone(),
            });
        } else if !seen.insert(run.name.as_str()) {
            ctx.push(ConfigError::DuplicateRun {
                name: run.name.clone(),
            });
        }

        if spec.channels.is_none() && run.after.is_none() {
            ctx.push(ConfigError::MissingAfterInput {
                name: run.name.clone(),
            });
        }
    }
}

pub(crate) const fn default_high_nanos() -> i64 {
    DEFAULT_HIGH_NANOS
}
