// Chunk: docs/chunks/damage_tracking - Coalesced repaint region accumulation

//! Damage tracking for the request/validate repaint protocol.
//!
//! Every change that can alter what a highlight looks like on screen is
//! folded into a single running bounding span of char offsets, clipped to
//! the viewport. When the host asks what to repaint, the span is converted
//! to one screen rectangle; after the host paints, it validates (clears)
//! the accumulator.
//!
//! The accumulator is the one piece of engine state mutated from more than
//! one execution context: edit and scroll notifications may arrive on a
//! different thread than the repaint request. All four operations take the
//! same mutex, held only for the accumulation arithmetic.

use parking_lot::Mutex;

use matchlight_marks::Mark;

use crate::position::PositionIndex;
use crate::viewport::ViewportInfo;

/// Accumulated dirty char span since the last validate.
///
/// `None` is the identity element for [`DamageSpan::merge`]; a `Span` is a
/// half-open `[min, max)` bounding range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DamageSpan {
    /// Nothing to repaint.
    #[default]
    None,
    /// The bounding range of every damaged offset [min, max).
    Span { min: usize, max: usize },
}

impl DamageSpan {
    /// Returns true if no offsets are damaged.
    pub fn is_none(&self) -> bool {
        matches!(self, DamageSpan::None)
    }

    /// Creates a span for `[start, end)`; empty ranges produce `None`.
    pub fn from_range(start: usize, end: usize) -> Self {
        if start >= end {
            DamageSpan::None
        } else {
            DamageSpan::Span { min: start, max: end }
        }
    }

    /// Merges another span into this one, producing the smallest span
    /// covering both. `None` is the identity element.
    pub fn merge(&mut self, other: DamageSpan) {
        *self = match (&*self, &other) {
            (DamageSpan::None, _) => other,
            (_, DamageSpan::None) => return,
            (DamageSpan::Span { min: a, max: b }, DamageSpan::Span { min: c, max: d }) => {
                DamageSpan::Span {
                    min: (*a).min(*c),
                    max: (*b).max(*d),
                }
            }
        };
    }
}

/// One rectangle of the drawing surface, in pixels.
///
/// Damage rectangles always span the full surface width; only the vertical
/// extent is tightened to the affected lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Mutex-guarded damage accumulator for one view.
///
/// Reset to empty only by [`DamageTracker::validate`]; `flush` reports
/// without clearing so a host that fails to paint can ask again.
#[derive(Debug, Default)]
pub struct DamageTracker {
    span: Mutex<DamageSpan>,
}

impl DamageTracker {
    pub fn new() -> Self {
        Self {
            span: Mutex::new(DamageSpan::None),
        }
    }

    /// Widens the damage span to cover the mark, if it intersects the
    /// viewport. No-op otherwise.
    pub fn include_mark(&self, mark: &Mark, viewport: &ViewportInfo) {
        self.include_range(mark.start, mark.len, viewport);
    }

    /// Widens the damage span to cover `[offset, offset + len)`, clipped to
    /// the viewport. No-op when the range is empty or fully off screen.
    pub fn include_range(&self, offset: usize, len: usize, viewport: &ViewportInfo) {
        let Some((start, end)) = viewport.clip(offset, offset + len) else {
            return;
        };
        self.span.lock().merge(DamageSpan::from_range(start, end));
    }

    /// Returns true if nothing is currently damaged.
    pub fn is_empty(&self) -> bool {
        self.span.lock().is_none()
    }

    /// Converts the accumulated span into a screen rectangle.
    ///
    /// The span is re-clipped to the viewport (which may have moved since
    /// the damage was recorded) and widened to the full surface width;
    /// the vertical extent covers exactly the affected lines. Returns
    /// `None` when nothing visible is damaged.
    ///
    /// Does not clear the accumulator; clearing happens on [`validate`]
    /// once the host confirms the repaint.
    ///
    /// [`validate`]: DamageTracker::validate
    pub fn flush(&self, index: &PositionIndex, viewport: &ViewportInfo) -> Option<ScreenRect> {
        // Copy the span out so the index walk happens outside the lock
        let span = *self.span.lock();
        let DamageSpan::Span { min, max } = span else {
            return None;
        };
        let (min, max) = viewport.clip(min, max)?;

        let first_line = index.line_at_offset(min);
        let last_line = index.line_at_offset(max.saturating_sub(1).max(min));
        let top_line = index.line_at_offset(viewport.visible_start);

        let y = first_line.saturating_sub(top_line) as f32 * viewport.line_height;
        let height = (last_line - first_line + 1) as f32 * viewport.line_height;

        Some(ScreenRect {
            x: 0.0,
            y,
            width: viewport.surface_width,
            height,
        })
    }

    /// Clears the accumulator after the host has painted (or promised to).
    ///
    /// Safe to call when nothing is damaged; calling it twice in a row
    /// leaves the tracker empty both times.
    pub fn validate(&self) {
        *self.span.lock() = DamageSpan::None;
    }
}
