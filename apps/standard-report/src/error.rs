//! Error types and process exit codes.

use crate::models::Summary;

/// standard-report error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file invalid or holding an unsupported value
    #[error("config error: {message}")]
    Config { message: String },

    /// Offense report could not be decoded
    #[error("input error: {0}")]
    Input(#[from] serde_json::Error),

    /// File or stream I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type using the crate `Error`
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// No uncorrected offenses
    Success = 0,
    /// At least one uncorrected offense was reported
    OffensesFound = 1,
    /// Configuration or input error
    ConfigError = 2,
    /// I/O failure
    InternalError = 3,
}

impl ExitCode {
    /// Outcome of a completed report run.
    pub fn for_summary(summary: &Summary) -> Self {
        if summary.offenses > 0 {
            ExitCode::OffensesFound
        } else {
            ExitCode::Success
        }
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } | Error::Input(_) => ExitCode::ConfigError,
            Error::Io { .. } => ExitCode::InternalError,
        }
    }
}
