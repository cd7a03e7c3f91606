//! Registry of accepted, mutually non-overlapping matches.

use crate::candidate::rect::MatchRect;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// Set of accepted matches.
///
/// Every rectangle, at the moment it is accepted, intersects no rectangle
/// already present. [`MatchRegistry::try_accept`] performs the check and the
/// insert under one lock, so concurrent callers can never both insert two
/// rectangles that overlap each other.
#[derive(Debug, Default)]
pub struct MatchRegistry {
    accepted: Mutex<RowBuckets>,
}

/// Accepted rectangles bucketed by their top row.
///
/// A rectangle can only intersect a candidate when its top row lies within
/// `max_height` rows above the candidate's top row, or inside the candidate,
/// so an overlap query visits only those buckets.
#[derive(Debug, Default)]
struct RowBuckets {
    by_row: BTreeMap<usize, Vec<MatchRect>>,
    max_height: usize,
    len: usize,
}

impl RowBuckets {
    fn overlaps_any(&self, candidate: &MatchRect) -> bool {
        let first = candidate.row1.saturating_sub(self.max_height);
        self.by_row
            .range(first..=candidate.row2)
            .flat_map(|(_, rects)| rects)
            .any(|rect| rect.intersects(candidate))
    }

    fn insert(&mut self, rect: MatchRect) {
        self.max_height = self.max_height.max(rect.height());
        self.by_row.entry(rect.row1).or_default().push(rect);
        self.len += 1;
    }

    fn into_sorted(self) -> Vec<MatchRect> {
        let mut out: Vec<MatchRect> = self.by_row.into_values().flatten().collect();
        out.sort();
        out
    }
}

impl MatchRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when `candidate` intersects an accepted rectangle.
    pub fn is_duplicate(&self, candidate: &MatchRect) -> bool {
        self.lock().overlaps_any(candidate)
    }

    /// Inserts `candidate` unless it intersects an accepted rectangle.
    ///
    /// Returns true when the candidate was inserted.
    pub fn try_accept(&self, candidate: MatchRect) -> bool {
        let mut accepted = self.lock();
        if accepted.overlaps_any(&candidate) {
            return false;
        }
        accepted.insert(candidate);
        true
    }

    /// Returns the number of accepted rectangles.
    pub fn len(&self) -> usize {
        self.lock().len
    }

    /// Returns true when nothing has been accepted.
    pub fn is_empty(&self) -> bool {
        self.lock().len == 0
    }

    /// Returns a snapshot of the accepted rectangles in natural order.
    pub fn sorted(&self) -> Vec<MatchRect> {
        let accepted = self.lock();
        let mut out: Vec<MatchRect> = accepted.by_row.values().flatten().copied().collect();
        out.sort();
        out
    }

    /// Consumes the registry and returns the rectangles in natural order.
    pub fn into_sorted(self) -> Vec<MatchRect> {
        self.accepted
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .into_sorted()
    }

    // `insert` cannot panic halfway, so a poisoned set is still consistent.
    fn lock(&self) -> MutexGuard<'_, RowBuckets> {
        self.accepted
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
