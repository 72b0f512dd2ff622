//! Load command: bulk-load a break file and report the most common break time.

use crate::engine::{LoadReport, OverlapEngine};
use crate::error::Result;
use crate::report::Summary;
use crate::source::read_lines_or_stdin;
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Statistics from a load.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LoadStats {
    pub lines_read: usize,
    pub accepted: usize,
    pub skipped: usize,
    pub markers: usize,
    pub elapsed_secs: f64,
}

impl LoadStats {
    fn from_report(report: &LoadReport, lines_read: usize, markers: usize) -> Self {
        Self {
            lines_read,
            accepted: report.accepted,
            skipped: report.skipped.len(),
            markers,
            elapsed_secs: 0.0,
        }
    }
}

impl fmt::Display for LoadStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} lines ({} accepted, {} skipped), {} markers held ({:.3}s)",
            self.lines_read,
            self.accepted,
            self.skipped,
            self.markers,
            self.elapsed_secs
        )
    }
}

/// Load command.
#[derive(Debug, Default, Clone)]
pub struct LoadCommand;

impl LoadCommand {
    pub fn new() -> Self {
        Self
    }

    /// Read `input` (a path, or `-` for stdin) into `engine`.
    ///
    /// Skipped lines go to `errors`, the summary goes to `output`. A missing
    /// file or an aborted all-or-nothing load is returned as an error and
    /// leaves the engine as it was.
    pub fn run<P, W, E>(
        &self,
        engine: &mut OverlapEngine,
        input: P,
        output: &mut W,
        errors: &mut E,
    ) -> Result<LoadStats>
    where
        P: AsRef<Path>,
        W: Write,
        E: Write,
    {
        let start = Instant::now();
        let lines = read_lines_or_stdin(input.as_ref())?;
        info!(path = %input.as_ref().display(), lines = lines.len(), "loading breaks");

        let mut stats = self.load_lines(engine, &lines, output, errors)?;
        stats.elapsed_secs = start.elapsed().as_secs_f64();
        Ok(stats)
    }

    /// Load already-read lines into `engine` and print the summary.
    pub fn load_lines<S, W, E>(
        &self,
        engine: &mut OverlapEngine,
        lines: &[S],
        output: &mut W,
        errors: &mut E,
    ) -> Result<LoadStats>
    where
        S: AsRef<str>,
        W: Write,
        E: Write,
    {
        let report = engine.load_all(lines)?;

        for skipped in &report.skipped {
            writeln!(errors, "Skipped line {}: {}", skipped.line, skipped.error)?;
        }

        let overlap = engine.most_overlapped();
        writeln!(output, "{}", Summary::new(&overlap, engine.config()))?;
        output.flush()?;

        Ok(LoadStats::from_report(&report, lines.len(), engine.len()))
    }
}
