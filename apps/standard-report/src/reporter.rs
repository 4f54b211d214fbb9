//! Human-readable offense reporter.
//!
//! Output layout:
//! ```text
//! standard: Use Ruby Standard Style (https://github.com/testdouble/standard)
//! standard: Run `standardrb --fix` to automatically fix some problems.
//!   <path>:<line>:<column>: <message>
//!
//! <call to action>
//! ```
//!
//! The header is printed lazily, right before the first uncorrected offense of
//! the run. A run without uncorrected offenses prints nothing at all.

use crate::models::{FileReport, Offense, Summary};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Closing message printed once after all offenses.
pub const CALL_TO_ACTION_MESSAGE: &str = "\
Notice: Disagree with these rules? While StandardRB is pre-1.0.0, feel free to submit suggestions to:
  https://github.com/testdouble/standard/issues/new
";

const HEADER_TITLE: &str =
    "standard: Use Ruby Standard Style (https://github.com/testdouble/standard)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Command suggested in the header to autocorrect offenses.
pub enum FixCommand {
    Rake,
    Standardrb,
}

impl FixCommand {
    /// Pick the command from a program invocation name such as `/usr/bin/rake`.
    pub fn from_program_name(name: &str) -> Self {
        let base = Path::new(name).file_name().and_then(|s| s.to_str());
        match base {
            Some("rake") => FixCommand::Rake,
            _ => FixCommand::Standardrb,
        }
    }

    /// Inspect how the current process was invoked.
    pub fn detect() -> Self {
        std::env::args_os()
            .next()
            .map(|arg0| Self::from_program_name(&arg0.to_string_lossy()))
            .unwrap_or(FixCommand::Standardrb)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FixCommand::Rake => "rake standard:fix",
            FixCommand::Standardrb => "standardrb --fix",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    NoOffensesYet,
    HeaderPrinted,
}

/// Accumulates per-file offenses for one run and writes the text report.
///
/// Lifecycle: construct, call [`Reporter::record_file`] once per finished
/// file, then [`Reporter::finish`] exactly once.
pub struct Reporter<W: Write> {
    out: W,
    state: State,
    reports: Vec<FileReport>,
    corrected: usize,
    base_dir: Option<PathBuf>,
    fix_command: fn() -> FixCommand,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            state: State::NoOffensesYet,
            reports: Vec::new(),
            corrected: 0,
            base_dir: None,
            fix_command: FixCommand::detect,
        }
    }

    /// Show absolute paths relative to `dir`.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Replace invocation-name detection for the header's fix command.
    pub fn with_fix_command_detector(mut self, detect: fn() -> FixCommand) -> Self {
        self.fix_command = detect;
        self
    }

    /// Record the offenses of one finished file and print the uncorrected ones.
    pub fn record_file(&mut self, path: &str, offenses: &[Offense]) -> io::Result<()> {
        let retained: Vec<Offense> = offenses.iter().filter(|o| !o.corrected).cloned().collect();
        let skipped = offenses.len() - retained.len();
        self.corrected += skipped;
        tracing::debug!(path, retained = retained.len(), skipped, "file finished");
        if retained.is_empty() {
            return Ok(());
        }

        self.print_header_once()?;
        let shown = self.display_path(path);
        for o in &retained {
            writeln!(
                self.out,
                "  {}:{}:{}: {}",
                shown,
                o.line,
                o.column,
                single_line(&o.message)
            )?;
        }
        self.reports.push(FileReport::new(path, retained));
        Ok(())
    }

    /// Close the run: print the call to action if anything was reported.
    ///
    /// `all_paths` only feeds the returned summary.
    pub fn finish<S: AsRef<str>>(&mut self, all_paths: &[S]) -> io::Result<Summary> {
        if self.state == State::HeaderPrinted {
            writeln!(self.out)?;
            self.out.write_all(CALL_TO_ACTION_MESSAGE.as_bytes())?;
        }
        self.out.flush()?;
        let summary = self.summary(all_paths.len());
        tracing::debug!(
            files = summary.files,
            offenses = summary.offenses,
            corrected = summary.corrected,
            "report finished"
        );
        Ok(summary)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn summary(&self, files: usize) -> Summary {
        Summary {
            files,
            offenses: self.reports.iter().map(|r| r.offenses.len()).sum(),
            corrected: self.corrected,
        }
    }

    fn print_header_once(&mut self) -> io::Result<()> {
        if self.state == State::HeaderPrinted {
            return Ok(());
        }
        let command = (self.fix_command)();
        writeln!(self.out, "{}", HEADER_TITLE)?;
        writeln!(
            self.out,
            "standard: Run `{}` to automatically fix some problems.",
            command.as_str()
        )?;
        self.state = State::HeaderPrinted;
        Ok(())
    }

    fn display_path(&self, path: &str) -> String {
        display_path(path, self.base_dir.as_deref())
    }
}

/// Render `path` relative to `base` when both make that possible.
pub(crate) fn display_path(path: &str, base: Option<&Path>) -> String {
    let p = Path::new(path);
    match base {
        Some(base) if p.is_absolute() => pathdiff::diff_paths(p, base)
            .map(|rel| rel.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string()),
        _ => path.to_string(),
    }
}

fn single_line(message: &str) -> String {
    message.replace('\n', " ")
}
