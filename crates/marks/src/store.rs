// Chunk: docs/chunks/mark_store - Ordered non-overlapping highlight intervals

//! Ordered, non-overlapping collection of highlight marks.
//!
//! One `MarkStore` holds the marks of a single highlight category for a
//! single view. Marks are kept sorted by start offset and never overlap;
//! both invariants are enforced at insertion and preserved by every other
//! operation.
//!
//! # Backing structure
//!
//! A sorted `Vec<Mark>` with binary-search partition points. Queries are
//! O(log n + k); `shift` is O(n) in the mark count because trailing marks
//! are translated in place. Stores are repopulated from viewport-bounded
//! scans, so n stays at viewport scale. The API is shaped so an ordered
//! tree with split/merge can replace the Vec without touching callers if
//! shift/query ever dominates profiles.
//!
//! # Edit-shift semantics
//!
//! `shift` is applied on every text edit before anything else touches the
//! store. Marks entirely before the edit are unchanged; marks entirely
//! at/after the edited span translate by the edit's net length change;
//! marks overlapping the edited span are removed and returned so the caller
//! can re-derive them with a fresh search. Marks are never stretched across
//! an edit.

use thiserror::Error;

use crate::mark::Mark;

/// Insertion rejected because the new mark intersects an existing one.
///
/// This is an invariant violation on the caller's side: stores are cleared
/// or range-evicted before bulk insertion, so a live overlap means two
/// search passes raced or the caller skipped eviction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("mark {new:?} overlaps existing mark {existing:?}")]
pub struct OverlapError {
    /// The mark that was being inserted.
    pub new: Mark,
    /// The already-stored mark it collided with.
    pub existing: Mark,
}

/// Ordered collection of non-overlapping highlight marks.
///
/// Created per highlight category per open view; cleared and repopulated
/// whenever the search text or the relevant buffer region changes.
#[derive(Debug, Clone, Default)]
pub struct MarkStore {
    /// Sorted by start offset; pairwise non-overlapping. Because marks do
    /// not overlap, end offsets are sorted too, which the partition-point
    /// queries rely on.
    marks: Vec<Mark>,
}

impl MarkStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self { marks: Vec::new() }
    }

    /// Returns the number of stored marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns true if the store holds no marks.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Iterates all marks in ascending start order.
    pub fn iter(&self) -> impl Iterator<Item = &Mark> {
        self.marks.iter()
    }

    /// Inserts a mark, rejecting it if it intersects an existing mark.
    ///
    /// Empty marks are rejected against themselves (an empty interval can
    /// never be rendered and would be unfindable by `query`).
    pub fn insert(&mut self, mark: Mark) -> Result<(), OverlapError> {
        if mark.is_empty() {
            return Err(OverlapError {
                new: mark,
                existing: mark,
            });
        }

        let idx = self.marks.partition_point(|m| m.start < mark.start);

        // Check the neighbor on each side; non-overlap of everything else
        // follows from the sort order.
        if idx > 0 {
            let prev = self.marks[idx - 1];
            if prev.overlaps(&mark) {
                return Err(OverlapError {
                    new: mark,
                    existing: prev,
                });
            }
        }
        if let Some(next) = self.marks.get(idx) {
            if next.overlaps(&mark) {
                return Err(OverlapError {
                    new: mark,
                    existing: *next,
                });
            }
        }

        self.marks.insert(idx, mark);
        Ok(())
    }

    /// Empties the store.
    ///
    /// Implemented as structure replacement rather than per-element
    /// deletion, so it is O(1) amortized regardless of mark count.
    pub fn remove_all(&mut self) {
        self.marks = Vec::new();
    }

    /// Applies a text edit to every stored mark.
    ///
    /// `position` is where the edit happened, `old_len` how many chars were
    /// replaced, `new_len` how many chars replaced them. Marks entirely
    /// before `position` are unchanged; marks starting at or after
    /// `position + old_len` translate by `new_len - old_len`; marks
    /// overlapping the edited span are removed and returned (their content
    /// is no longer guaranteed valid and must be re-derived by a fresh
    /// search over the affected region).
    ///
    /// A delta that would translate a mark to before the end of the
    /// replacement text indicates a desynced host notification; such marks
    /// are invalidated (returned) rather than clamped into an ordering
    /// violation, and the incident is logged. The host's buffer is the
    /// source of truth and resynchronizes via re-search.
    pub fn shift(&mut self, position: usize, old_len: usize, new_len: usize) -> Vec<Mark> {
        let edit_end = position + old_len;
        let delta = new_len as i64 - old_len as i64;

        let mut kept = Vec::with_capacity(self.marks.len());
        let mut removed = Vec::new();

        for &mark in &self.marks {
            if mark.end() <= position {
                // Entirely before the edit
                kept.push(mark);
            } else if mark.start >= edit_end {
                // Entirely after the edited span: translate
                let shifted = mark.start as i64 + delta;
                if shifted < (position + new_len) as i64 {
                    log::warn!(
                        "edit at {position} (old_len {old_len}, new_len {new_len}) would move \
                         mark {mark:?} before the replacement text; invalidating"
                    );
                    removed.push(mark);
                } else {
                    kept.push(Mark::new(shifted as usize, mark.len));
                }
            } else {
                // Overlaps the edited span: invalidate, never stretch
                removed.push(mark);
            }
        }

        self.marks = kept;
        removed
    }

    /// Returns, in ascending offset order, all marks intersecting the
    /// half-open range `[start, end)`.
    ///
    /// Inverted or empty ranges yield an empty slice rather than an error;
    /// viewport races can transiently produce them during rapid scrolling.
    pub fn query(&self, start: usize, end: usize) -> &[Mark] {
        if end <= start {
            return &[];
        }
        let (lo, hi) = self.intersecting_bounds(start, end);
        &self.marks[lo..hi]
    }

    /// Removes and returns all marks intersecting `[start, end)`.
    ///
    /// Used to evict a region that is about to be repopulated by a fresh
    /// search; the removed marks are returned so the caller can damage
    /// their screen footprint.
    pub fn remove_intersecting(&mut self, start: usize, end: usize) -> Vec<Mark> {
        if end <= start {
            return Vec::new();
        }
        let (lo, hi) = self.intersecting_bounds(start, end);
        self.marks.drain(lo..hi).collect()
    }

    /// Returns the mark containing `offset`, if any.
    pub fn nearest(&self, offset: usize) -> Option<Mark> {
        let idx = self.marks.partition_point(|m| m.start <= offset);
        let candidate = self.marks.get(idx.checked_sub(1)?)?;
        candidate.contains(offset).then_some(*candidate)
    }

    /// Returns the first mark starting strictly after `offset`.
    pub fn next_after(&self, offset: usize) -> Option<Mark> {
        let idx = self.marks.partition_point(|m| m.start <= offset);
        self.marks.get(idx).copied()
    }

    /// Returns the last mark starting strictly before `offset`.
    pub fn prev_before(&self, offset: usize) -> Option<Mark> {
        let idx = self.marks.partition_point(|m| m.start < offset);
        self.marks.get(idx.checked_sub(1)?).copied()
    }

    /// Returns the first and last stored marks, if any.
    pub fn first(&self) -> Option<Mark> {
        self.marks.first().copied()
    }

    pub fn last(&self) -> Option<Mark> {
        self.marks.last().copied()
    }

    /// Partition indices `[lo, hi)` of the marks intersecting `[start, end)`.
    ///
    /// Relies on end offsets being sorted, which holds because marks never
    /// overlap.
    fn intersecting_bounds(&self, start: usize, end: usize) -> (usize, usize) {
        let lo = self.marks.partition_point(|m| m.end() <= start);
        let hi = self.marks.partition_point(|m| m.start < end);
        (lo, hi.max(lo))
    }
}
