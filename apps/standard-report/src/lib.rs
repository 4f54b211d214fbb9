//! standard-report core library.
//!
//! This crate renders the offense report produced by a Ruby linting engine
//! in the Ruby Standard Style console format.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `error`: Error type and process exit codes.
//! - `input`: RuboCop JSON report decoding.
//! - `models`: Offense, per-file report and summary structs.
//! - `output`: Human/JSON printers.
//! - `reporter`: The stateful human-readable reporter.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod reporter;
pub mod utils;

pub use error::{Error, Result};
pub use models::{FileReport, Offense, Summary};
pub use reporter::{FixCommand, Reporter, CALL_TO_ACTION_MESSAGE};
