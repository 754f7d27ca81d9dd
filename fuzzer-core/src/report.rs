//! Leveled console reporting.
//!
//! The display level travels with the [`Reporter`] value instead of living
//! in a global, so every reporting call site sees the caller's setting.

use std::fmt;
use std::io::Write;
use std::time::Duration;

use crate::timing::ProgressGate;

/// Nothing is displayed.
pub const LEVEL_SILENT: u8 = 0;

/// Errors only.
pub const LEVEL_ERRORS: u8 = 1;

/// Results, interaction, warnings and rate-limited progress.
pub const LEVEL_RESULTS: u8 = 2;

/// Adds a trace line for every test and stage.
pub const LEVEL_TRACE: u8 = 4;

/// Level used when the caller does not choose one.
pub const DEFAULT_LEVEL: u8 = LEVEL_RESULTS;

/// Writes user-facing lines at or below the configured level.
///
/// Write errors are ignored: reporting never changes a run's outcome.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    out: W,
    level: u8,
    gate: ProgressGate,
}

impl<W: Write> Reporter<W> {
    /// Creates a reporter whose progress updates are `interval` apart.
    pub fn new(out: W, level: u8, interval: Duration) -> Self {
        Self {
            out,
            level,
            gate: ProgressGate::new(interval),
        }
    }

    /// Writes `args` if the configured level is at least `level`.
    pub fn display(&mut self, level: u8, args: fmt::Arguments<'_>) {
        if self.level >= level {
            let _ = self.out.write_fmt(args);
            let _ = self.out.flush();
        }
    }

    /// Reports that test `test_nb` is starting.
    ///
    /// Every test is shown at [`LEVEL_TRACE`]; from [`LEVEL_RESULTS`] on, at
    /// most one test per gate interval.
    pub fn progress(&mut self, test_nb: u32) {
        if self.level >= LEVEL_TRACE {
            self.display(LEVEL_TRACE, format_args!("\r test {test_nb:5}      "));
        } else if self.level >= LEVEL_RESULTS && self.gate.ready() {
            self.display(LEVEL_RESULTS, format_args!("\r test {test_nb:5}      "));
        }
    }

    /// Reports that stage `tag` of the current test is starting.
    pub fn stage(&mut self, tag: u32) {
        self.display(LEVEL_TRACE, format_args!("\u{8}\u{8}\u{8}\u{8}{tag:3} "));
    }

    /// Consumes the reporter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
