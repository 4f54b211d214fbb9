//! Shared data models for offense reports and run summaries.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single style violation reported by the linting engine.
///
/// Coordinates are 1-based when the engine supplies them but are not
/// validated here; zero or negative values render verbatim.
pub struct Offense {
    pub corrected: bool,
    pub line: i64,
    pub column: i64,
    pub message: String,
    pub cop_name: Option<String>,
}

impl Offense {
    /// An offense that still needs fixing.
    pub fn uncorrected(line: i64, column: i64, message: impl Into<String>) -> Self {
        Self {
            corrected: false,
            line,
            column,
            message: message.into(),
            cop_name: None,
        }
    }

    /// An offense the engine already fixed. Location and message are irrelevant
    /// since it is never rendered.
    pub fn corrected() -> Self {
        Self {
            corrected: true,
            line: 0,
            column: 0,
            message: String::new(),
            cop_name: None,
        }
    }

    pub fn with_cop_name(mut self, name: impl Into<String>) -> Self {
        self.cop_name = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Offenses reported for one file, in the order the engine supplied them.
pub struct FileReport {
    pub path: String,
    pub offenses: Vec<Offense>,
}

impl FileReport {
    pub fn new(path: impl Into<String>, offenses: Vec<Offense>) -> Self {
        Self {
            path: path.into(),
            offenses,
        }
    }

    /// Offenses not yet fixed, supplied order preserved.
    pub fn uncorrected(&self) -> impl Iterator<Item = &Offense> {
        self.offenses.iter().filter(|o| !o.corrected)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
/// Aggregated run summary returned when a report is finished.
pub struct Summary {
    pub files: usize,
    pub offenses: usize,
    pub corrected: usize,
}
