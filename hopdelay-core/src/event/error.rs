use thiserror::Error;

/// Why a single record could not be turned into an event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("expected at least {expected} fields, found {found}")]
    ShortRecord { expected: usize, found: usize },

    #[error("channel code field {field} is empty")]
    MissingChannelCode { field: usize },

    #[error("channel code '{value}' is not an integer")]
    InvalidChannelCode { value: String },

    #[error("no HH:MM:SS time found in '{value}'")]
    TimePatternNotFound { value: String },

    #[error("clock time '{value}' is not a valid time of day")]
    InvalidClockTime { value: String },

    #[error("fractional suffix '{value}' must be at most 9 digits")]
    InvalidFraction { value: String },

    #[error("epoch value '{value}' is not a number")]
    InvalidEpoch { value: String },

    #[error("timestamp '{value}' does not fit in 64-bit nanoseconds")]
    TimestampOutOfRange { value: String },
}
