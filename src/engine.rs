//! Overlap engine: collects break markers and finds the most common break time.
//!
//! Uses a sweep-line over the sorted markers. O(n log n) to bulk load,
//! O(n) per interactive add, O(n) per query.

use crate::config::Config;
use crate::error::{BreakError, Result};
use crate::parse::{self, parse_interval, ParseError};
use crate::time_range::{Marker, MarkerKind, TimeRange};
use crate::timeline::Timeline;
use chrono::NaiveTime;
use tracing::{debug, warn};

/// The busiest span found by the sweep and how many breaks share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overlap {
    pub range: TimeRange,
    pub count: usize,
}

/// A line rejected during a partial load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the input.
    pub line: usize,
    pub error: ParseError,
}

/// Outcome of a bulk load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Intervals added (two markers each).
    pub accepted: usize,
    pub skipped: Vec<SkippedLine>,
}

impl LoadReport {
    /// Number of lines looked at.
    pub fn lines_parsed(&self) -> usize {
        self.accepted + self.skipped.len()
    }
}

/// Owns the sorted markers and answers "when do most people take a break".
#[derive(Debug, Clone)]
pub struct OverlapEngine {
    config: Config,
    timeline: Timeline,
}

impl Default for OverlapEngine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl OverlapEngine {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            timeline: Timeline::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse and add many interval lines, sorting once at the end.
    ///
    /// Under the all-or-nothing policy the first bad line aborts the load
    /// and the engine keeps exactly the markers it had before the call.
    /// Otherwise bad lines are recorded in the report and skipped.
    ///
    /// Lines are parsed exactly as given: a blank or padded line fails the
    /// length check like any other malformed line.
    pub fn load_all<I, S>(&mut self, lines: I) -> Result<LoadReport>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = LoadReport::default();
        let mut batch: Vec<Marker> = Vec::new();

        for (idx, line) in lines.into_iter().enumerate() {
            let line_number = idx + 1;
            match parse_interval(line.as_ref(), &self.config) {
                Ok((start, end)) => {
                    batch.push(start);
                    batch.push(end);
                    report.accepted += 1;
                }
                Err(error) if self.config.is_all_or_nothing() => {
                    return Err(BreakError::LoadAborted {
                        line: line_number,
                        source: error,
                    });
                }
                Err(error) => {
                    warn!(line = line_number, %error, "skipping invalid interval");
                    report.skipped.push(SkippedLine {
                        line: line_number,
                        error,
                    });
                }
            }
        }

        self.timeline.extend_sorted(batch);
        debug!(
            accepted = report.accepted,
            skipped = report.skipped.len(),
            markers = self.timeline.len(),
            "bulk load complete"
        );

        Ok(report)
    }

    /// Parse and insert a single interval in place.
    ///
    /// On error nothing is inserted.
    pub fn add_interval(&mut self, text: &str) -> parse::Result<()> {
        let (start, end) = parse_interval(text, &self.config)?;
        self.timeline.insert_sorted(start);
        self.timeline.insert_sorted(end);
        debug!(start = %start.value, end = %end.value, "interval added");
        Ok(())
    }

    /// Sweep the markers and return the span with the most open breaks.
    ///
    /// Each `End` closes the span running from the latest `Start` to it. A
    /// span wins with a higher open count, or with an equal count and a
    /// strictly longer duration; earlier spans win exact ties. With no
    /// markers the result is an empty range at midnight with count 0.
    pub fn most_overlapped(&self) -> Overlap {
        let mut best = Overlap::default();
        let mut open = 0usize;
        let mut pending_start = NaiveTime::MIN;

        for marker in &self.timeline {
            match marker.kind {
                MarkerKind::Start => {
                    pending_start = marker.value;
                    open += 1;
                }
                MarkerKind::End => {
                    let candidate = TimeRange::new(pending_start, marker.value);
                    if open > best.count
                        || (open == best.count && candidate.duration() > best.range.duration())
                    {
                        best = Overlap {
                            range: candidate,
                            count: open,
                        };
                    }
                    open = open.saturating_sub(1);
                }
            }
        }

        best
    }

    /// Markers in sweep order.
    #[inline]
    pub fn markers(&self) -> &[Marker] {
        self.timeline.as_slice()
    }

    /// Number of markers held (two per interval).
    #[inline]
    pub fn len(&self) -> usize {
        self.timeline.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }

    #[inline]
    pub fn interval_count(&self) -> usize {
        self.timeline.len() / 2
    }

    /// Whether the markers are in sweep order.
    pub fn is_sorted(&self) -> bool {
        self.timeline.is_sorted()
    }

    /// Forget every interval, ready for a full reload.
    pub fn clear(&mut self) {
        self.timeline.clear();
    }
}
