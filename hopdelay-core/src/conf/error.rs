use crate::error::DelayError;
use crate::event::Channel;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO / Parsing
    //-------------------------------------------------------------------------
    #[error("failed to read config file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration file: {}\n\n{source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    #[error("config validation failed")]
    Validation {
        #[related]
        validation_errors: Vec<ConfigError>,
    },

    //-------------------------------------------------------------------------
    // Record layout
    //-------------------------------------------------------------------------
    #[error("delimiter must be exactly one ASCII character, got '{value}'")]
    InvalidDelimiter { value: String },

    #[error("clock time format requires reference_date")]
    MissingReferenceDate,

    #[error("utc_offset_minutes {minutes} is outside ±1440")]
    InvalidUtcOffset { minutes: i32 },

    #[error("channel code field and time field are both {field}")]
    FieldCollision { field: usize },

    //-------------------------------------------------------------------------
    // Channels
    //-------------------------------------------------------------------------
    #[error("no channel codes map to '{channel}'")]
    EmptyChannel { channel: Channel },

    #[error("channel code {code} maps to both before and after")]
    AmbiguousChannelCode { code: i64 },

    //-------------------------------------------------------------------------
    // Tolerance
    //-------------------------------------------------------------------------
    #[error("tolerance low ({low}ns) must be below high ({high}ns)")]
    InvertedThresholds { low: i64, high: i64 },

    #[error("threshold {value} does not fit in nanoseconds")]
    ThresholdOutOfRange { value: i64 },

    #[error("secondary check 'after_gap' requires max_gap")]
    MissingMaxGap,

    #[error("max_gap must be positive, got {value}")]
    InvalidMaxGap { value: i64 },

    //-------------------------------------------------------------------------
    // Runs
    //-------------------------------------------------------------------------
    #[error("run names must not be empty")]
    EmptyRunName,

    #[error("run name '{name}' must not contain path separators")]
    InvalidRunName { name: String },

    #[error("duplicate run '{name}'")]
    DuplicateRun { name: String },

    #[error("run '{name}' needs an 'after' file when channels are positional")]
    MissingAfterInput { name: String },

    #[error("profile declares no runs")]
    NoRuns,

    //-------------------------------------------------------------------------
    // Engine
    //-------------------------------------------------------------------------
    #[error(transparent)]
    #[diagnostic(transparent)]
    Engine(#[from] DelayError),
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
