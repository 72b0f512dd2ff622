//! Core time-of-day types: break intervals and their boundary markers.

use chrono::{Duration, NaiveTime};
use std::cmp::Ordering;

/// A break between two wall-clock times on the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    /// Create a new range.
    #[inline]
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Returns the length of the range.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.end.signed_duration_since(self.start)
    }

    /// Returns true if the range has zero length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check whether `time` lies within the range, endpoints included.
    #[inline]
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time <= self.end
    }

    /// The two boundary markers of this range.
    #[inline]
    pub fn markers(&self) -> (Marker, Marker) {
        (Marker::start(self.start), Marker::end(self.end))
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        Self::new(NaiveTime::MIN, NaiveTime::MIN)
    }
}

/// Which side of a range a marker bounds.
///
/// Variant order is significant: `Start` sorts before `End`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MarkerKind {
    Start,
    End,
}

/// One endpoint of a break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marker {
    pub kind: MarkerKind,
    pub value: NaiveTime,
}

impl Marker {
    #[inline]
    pub fn start(value: NaiveTime) -> Self {
        Self {
            kind: MarkerKind::Start,
            value,
        }
    }

    #[inline]
    pub fn end(value: NaiveTime) -> Self {
        Self {
            kind: MarkerKind::End,
            value,
        }
    }
}

/// Sweep order: by time, and at equal times every `Start` before any `End`.
///
/// Both insertion paths of the timeline sort with this ordering, and the
/// sweep relies on it: a break that ends at the instant another begins is
/// counted as overlapping it.
impl Ord for Marker {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then(self.kind.cmp(&other.kind))
    }
}

impl PartialOrd for Marker {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
