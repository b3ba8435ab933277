use crate::event::RecordError;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of a single analysis run.
///
/// Parsing and alignment fail fast: any of these aborts the run before a report is written.
#[derive(Debug, Error, Diagnostic)]
pub enum DelayError {
    //-------------------------------------------------------------------------
    // IO
    //-------------------------------------------------------------------------
    #[error("failed to read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report {}: {source}", .path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    //-------------------------------------------------------------------------
    // Parsing
    //-------------------------------------------------------------------------
    #[error("malformed record at {}:{line}: {reason}", .path.display())]
    #[diagnostic(help("check the record layout (delimiter, field indexes, time format)"))]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        #[source]
        reason: RecordError,
    },

    //-------------------------------------------------------------------------
    // Statistics
    //-------------------------------------------------------------------------
    #[error("alignment produced no matched pairs")]
    #[diagnostic(help("widen the tolerance window or flip the drop side"))]
    NoMatches,

    #[error("cannot select an order statistic from an empty collection")]
    InsufficientData,

    //-------------------------------------------------------------------------
    // Configuration
    //-------------------------------------------------------------------------
    #[error("invalid configuration: {reason}")]
    Configuration { reason: String },
}

impl DelayError {
    pub fn read_input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadInput {
            path: path.into(),
            source,
        }
    }

    pub fn write_report(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteReport {
            path: path.into(),
            source,
        }
    }

    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }
}
