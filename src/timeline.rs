//! Ordered marker storage for the sweep.
//!
//! The timeline keeps markers sorted by [`Marker`]'s `Ord` (time, then
//! `Start` before `End`) through two insertion paths:
//!
//! - [`Timeline::extend_sorted`]: append a batch, then sort once. O(n log n).
//! - [`Timeline::insert_sorted`]: positional insert of a single marker. O(n).

use crate::time_range::{Marker, MarkerKind};

/// Sorted sequence of markers backed by a `Vec`.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    markers: Vec<Marker>,
}

impl Timeline {
    /// Create an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a batch of markers and restore order with a single sort.
    pub fn extend_sorted<I>(&mut self, batch: I)
    where
        I: IntoIterator<Item = Marker>,
    {
        let before = self.markers.len();
        self.markers.extend(batch);
        if self.markers.len() != before {
            self.markers.sort();
        }
    }

    /// Insert one marker at its sorted position.
    ///
    /// Positions come from the same `Ord` the bulk sort uses. A `Start` goes
    /// before the first marker at the same time or later; an `End` goes
    /// before the first marker strictly later. Falls back to appending.
    pub fn insert_sorted(&mut self, marker: Marker) {
        let idx = match marker.kind {
            MarkerKind::Start => self.markers.iter().position(|m| *m >= marker),
            MarkerKind::End => self.markers.iter().position(|m| *m > marker),
        }
        .unwrap_or(self.markers.len());
        self.markers.insert(idx, marker);
    }

    /// Check the ordering invariant by scanning adjacent pairs.
    pub fn is_sorted(&self) -> bool {
        self.markers.windows(2).all(|w| w[0] <= w[1])
    }

    #[inline]
    pub fn as_slice(&self) -> &[Marker] {
        &self.markers
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Drop every marker.
    pub fn clear(&mut self) {
        self.markers.clear();
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Marker;
    type IntoIter = std::slice::Iter<'a, Marker>;

    fn into_iter(self) -> Self::IntoIter {
        self.markers.iter()
    }
}
