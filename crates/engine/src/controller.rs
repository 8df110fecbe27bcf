// Chunk: docs/chunks/highlight_controller - Edit/search/scroll orchestration

//! The highlight controller: orchestrates stores, search, and damage in
//! response to host notifications.
//!
//! One controller tracks one document/view pair. It owns a mark store per
//! highlight category, the damage accumulator, and the latest viewport,
//! and applies events in arrival order:
//!
//! - **Edit**: shift every store first, then re-search only the
//!   invalidated sub-range (the hull of the edited span and the viewport,
//!   never the whole document) and damage what actually changed.
//! - **Search/selection change**: replace the category's store wholesale
//!   from a viewport-bounded scan; both the old and new mark footprints go
//!   dirty.
//! - **Viewport change**: re-scan the newly visible region; marks entering
//!   the viewport are damaged because they were un-rendered, not
//!   un-highlighted.
//! - **Repaint**: `request_repaint` flushes the damage rectangle without
//!   clearing; `on_repaint_complete` validates it once the host has
//!   painted.
//!
//! Host read failures degrade to "no matches this cycle" with a logged
//! warning; the controller never panics on malformed notifications.

use std::collections::HashMap;

use matchlight_marks::{Mark, MarkStore};

use crate::config::HighlightConfig;
use crate::damage::{DamageTracker, ScreenRect};
use crate::event_channel::{EventReceiver, HighlightEvent};
use crate::host::HostBuffer;
use crate::position::PositionIndex;
use crate::search::SearchEngine;
use crate::viewport::ViewportInfo;

/// A logical highlight layer with its own mark store and pattern.
///
/// Categories are fully independent: no cross-category overlap checking,
/// the renderer decides precedence where layers cover the same text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightCategory {
    /// Matches of the explicit find query.
    Search,
    /// Live occurrences of the currently selected text.
    Selection,
    /// A pinned copy of a former selection highlight.
    Frozen(u8),
}

/// Controller phase; transitions are synchronous with event application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Ready for the next notification.
    #[default]
    Idle,
    /// A wholesale re-search is replacing a store.
    Searching,
    /// A damage rectangle has been handed to the host and not yet
    /// validated.
    Flushing,
}

/// Per-category tracking state.
#[derive(Debug, Default)]
struct CategoryState {
    /// The text whose occurrences this category highlights; empty means
    /// the category is inactive.
    pattern: String,
    store: MarkStore,
}

/// Live highlight tracking for one document/view pair.
pub struct HighlightController<H: HostBuffer> {
    host: H,
    config: HighlightConfig,
    engine: SearchEngine,
    categories: HashMap<HighlightCategory, CategoryState>,
    damage: DamageTracker,
    viewport: ViewportInfo,
    phase: Phase,
}

impl<H: HostBuffer> HighlightController<H> {
    /// Creates a controller over the given host buffer.
    ///
    /// The viewport starts empty; nothing is scanned or damaged until the
    /// host reports one.
    pub fn new(host: H, config: HighlightConfig) -> Self {
        Self {
            host,
            engine: SearchEngine::new(config.case_sensitive),
            config,
            categories: HashMap::new(),
            damage: DamageTracker::new(),
            viewport: ViewportInfo::empty(),
            phase: Phase::Idle,
        }
    }

    /// Read access to the host buffer.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host buffer (the host mutates its document,
    /// then notifies via an edit event).
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Current controller phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The latest viewport reported by the host.
    pub fn viewport(&self) -> ViewportInfo {
        self.viewport
    }

    /// The active pattern of a category, if any.
    pub fn pattern(&self, category: HighlightCategory) -> Option<&str> {
        self.categories
            .get(&category)
            .filter(|s| !s.pattern.is_empty())
            .map(|s| s.pattern.as_str())
    }

    /// Returns true if un-flushed damage is pending.
    pub fn has_pending_damage(&self) -> bool {
        !self.damage.is_empty()
    }

    // ------------------------------------------------------------------
    // Event ingress
    // ------------------------------------------------------------------

    /// Applies every queued event in arrival order.
    ///
    /// The host's drain loop calls this once per wakeup, then flushes the
    /// accumulated damage with one `request_repaint`.
    pub fn drain(&mut self, receiver: &EventReceiver) {
        for event in receiver.drain() {
            self.apply_event(event);
        }
    }

    /// Applies a single host notification.
    pub fn apply_event(&mut self, event: HighlightEvent) {
        match event {
            HighlightEvent::Edit {
                position,
                old_len,
                new_len,
            } => self.on_edit(position, old_len, new_len),
            HighlightEvent::SearchTextChanged(text) => self.on_search_text_changed(text),
            HighlightEvent::SelectionChanged(text) => self.on_selection_changed(text),
            HighlightEvent::FreezeSelection(slot) => self.freeze_selection(slot),
            HighlightEvent::ViewportChanged(viewport) => self.on_viewport_changed(viewport),
            HighlightEvent::RepaintComplete => self.on_repaint_complete(),
        }
    }

    // ------------------------------------------------------------------
    // Edits
    // ------------------------------------------------------------------

    /// Handles a document edit: `old_len` chars at `position` became
    /// `new_len` chars.
    ///
    /// Stores are shifted before anything else touches them; marks the
    /// shift invalidated are damaged at their pre-shift offsets, and the
    /// invalidated sub-range is re-searched.
    pub fn on_edit(&mut self, position: usize, old_len: usize, new_len: usize) {
        let viewport = self.viewport;

        for state in self.categories.values_mut() {
            let removed = state.store.shift(position, old_len, new_len);
            for mark in &removed {
                self.damage.include_mark(mark, &viewport);
            }
        }

        if old_len != new_len {
            // Everything below the edit moved; damage from the edit to the
            // bottom of the viewport
            self.damage.include_range(
                position,
                viewport.visible_end.saturating_sub(position),
                &viewport,
            );
        } else {
            self.damage.include_range(position, old_len, &viewport);
        }

        // Re-search the hull of the edited span and the viewport, never
        // the whole document
        let (hull_start, hull_end) = if viewport.is_empty() {
            (position, position + new_len)
        } else {
            (
                position.min(viewport.visible_start),
                (position + new_len).max(viewport.visible_end),
            )
        };
        log::debug!(
            "edit at {position} (-{old_len} +{new_len}); re-scanning [{hull_start}, {hull_end})"
        );
        self.rescan_all(hull_start, hull_end);
    }

    // ------------------------------------------------------------------
    // Pattern changes
    // ------------------------------------------------------------------

    /// Replaces the find query.
    pub fn on_search_text_changed(&mut self, text: String) {
        self.phase = Phase::Searching;
        self.set_pattern(HighlightCategory::Search, text);
        self.phase = Phase::Idle;
    }

    /// Replaces the live selection highlight.
    ///
    /// A selection spanning a line break clears the highlight instead:
    /// matches never span lines, so such a selection can have no
    /// occurrences.
    pub fn on_selection_changed(&mut self, text: String) {
        let pattern = if text.contains('\n') { String::new() } else { text };
        self.set_pattern(HighlightCategory::Selection, pattern);
    }

    /// Pins the current selection pattern into a frozen slot.
    ///
    /// Freezing with an empty selection clears the slot. Slots at or past
    /// the configured count are ignored.
    pub fn freeze_selection(&mut self, slot: u8) {
        if slot >= self.config.frozen_slots {
            log::warn!(
                "freeze slot {slot} out of range (configured {})",
                self.config.frozen_slots
            );
            return;
        }
        let pattern = self
            .categories
            .get(&HighlightCategory::Selection)
            .map(|s| s.pattern.clone())
            .unwrap_or_default();
        self.set_pattern(HighlightCategory::Frozen(slot), pattern);
    }

    /// Replaces a category's pattern and rebuilds its store from a
    /// viewport-bounded scan. Old and new footprints both go dirty.
    fn set_pattern(&mut self, category: HighlightCategory, pattern: String) {
        let viewport = self.viewport;
        let state = self.categories.entry(category).or_default();

        for mark in state.store.query(viewport.visible_start, viewport.visible_end) {
            self.damage.include_mark(mark, &viewport);
        }
        state.store.remove_all();
        state.pattern = pattern;

        if !viewport.is_empty() {
            self.rescan_category(category, viewport.visible_start, viewport.visible_end);
        }
    }

    // ------------------------------------------------------------------
    // Viewport
    // ------------------------------------------------------------------

    /// Handles a scroll or resize notification.
    pub fn on_viewport_changed(&mut self, viewport: ViewportInfo) {
        let old = self.viewport;
        self.viewport = viewport;

        self.rescan_all(viewport.visible_start, viewport.visible_end);

        // Marks scrolled into view were never rendered; damage them even
        // though their store entries are unchanged
        let keys: Vec<HighlightCategory> = self.categories.keys().copied().collect();
        for key in keys {
            let Some(state) = self.categories.get(&key) else {
                continue;
            };
            for mark in state.store.query(viewport.visible_start, viewport.visible_end) {
                if !old.intersects(mark.start, mark.end()) {
                    self.damage.include_mark(mark, &viewport);
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Repaint protocol
    // ------------------------------------------------------------------

    /// Converts pending damage into a screen rectangle for the host to
    /// invalidate.
    ///
    /// Does not clear the damage; the host acknowledges with
    /// [`on_repaint_complete`] after painting. Returns `None` when nothing
    /// visible changed or the buffer cannot be read this cycle.
    ///
    /// [`on_repaint_complete`]: HighlightController::on_repaint_complete
    pub fn request_repaint(&mut self) -> Option<ScreenRect> {
        let viewport = self.viewport;
        if viewport.is_empty() {
            return None;
        }
        self.phase = Phase::Flushing;

        let slice = match self
            .host
            .text_range(viewport.visible_start, viewport.visible_end)
        {
            Ok(text) => text,
            Err(err) => {
                log::warn!("cannot read viewport text for repaint: {err}");
                self.phase = Phase::Idle;
                return None;
            }
        };
        let index = PositionIndex::from_text_at(&slice, viewport.visible_start);

        let rect = self.damage.flush(&index, &viewport);
        if rect.is_none() {
            self.phase = Phase::Idle;
        }
        rect
    }

    /// Acknowledges that the host painted the flushed rectangle.
    ///
    /// Safe to call with nothing pending.
    pub fn on_repaint_complete(&mut self) {
        self.damage.validate();
        self.phase = Phase::Idle;
    }

    // ------------------------------------------------------------------
    // Render/navigation queries
    // ------------------------------------------------------------------

    /// Marks of a category intersecting the viewport, in ascending order.
    pub fn visible_marks(&self, category: HighlightCategory) -> Vec<Mark> {
        let Some(state) = self.categories.get(&category) else {
            return Vec::new();
        };
        state
            .store
            .query(self.viewport.visible_start, self.viewport.visible_end)
            .to_vec()
    }

    /// The mark of a category containing `offset`, if any.
    pub fn mark_at(&self, category: HighlightCategory, offset: usize) -> Option<Mark> {
        self.categories.get(&category)?.store.nearest(offset)
    }

    /// The next occurrence after `offset`, wrapping to the first.
    pub fn next_match_after(&self, category: HighlightCategory, offset: usize) -> Option<Mark> {
        let store = &self.categories.get(&category)?.store;
        store.next_after(offset).or_else(|| store.first())
    }

    /// The previous occurrence before `offset`, wrapping to the last.
    pub fn prev_match_before(&self, category: HighlightCategory, offset: usize) -> Option<Mark> {
        let store = &self.categories.get(&category)?.store;
        store.prev_before(offset).or_else(|| store.last())
    }

    // ------------------------------------------------------------------
    // Scanning
    // ------------------------------------------------------------------

    fn rescan_all(&mut self, range_start: usize, range_end: usize) {
        let keys: Vec<HighlightCategory> = self.categories.keys().copied().collect();
        for key in keys {
            self.rescan_category(key, range_start, range_end);
        }
    }

    /// Evicts and re-derives a category's marks within `[range_start,
    /// range_end)`, damaging only the marks that actually changed.
    ///
    /// The scan range is widened by the pattern length on each side so
    /// matches straddling the range boundary are still found.
    fn rescan_category(&mut self, category: HighlightCategory, range_start: usize, range_end: usize) {
        let doc_len = self.host.len_chars();
        let viewport = self.viewport;
        let Some(state) = self.categories.get_mut(&category) else {
            return;
        };
        if state.pattern.is_empty() {
            return;
        }

        let pattern_len = state.pattern.chars().count();
        let start = range_start.saturating_sub(pattern_len);
        let end = range_end.saturating_add(pattern_len).min(doc_len);
        if end <= start {
            return;
        }

        let text = match self.host.text_range(start, end) {
            Ok(text) => text,
            Err(err) => {
                // Degrade to stale output; the next successful cycle
                // resynchronizes from the host's buffer
                log::warn!("cannot read [{start}, {end}) for re-scan: {err}");
                return;
            }
        };

        // Evict and repopulate only the unwidened range: every mark
        // intersecting it lies entirely inside the widened scan window, so
        // a still-valid highlight is always re-derived. Hits confined to
        // the widening margins belong to marks that were not evicted.
        //
        // The scan reports overlapping hits; the store holds
        // non-overlapping marks. First hit wins, later hits overlapping it
        // are skipped, so an OverlapError out of insert stays a genuine
        // invariant violation.
        let before = state.store.remove_intersecting(range_start, range_end);
        let mut inserted = Vec::new();
        let mut covered_to = 0usize;
        for found in self.engine.find_matches(&text, &state.pattern, 0, end - start) {
            let mark = Mark::new(start + found.start, found.len);
            if mark.start < covered_to {
                continue;
            }
            if mark.intersects(range_start, range_end) {
                match state.store.insert(mark) {
                    Ok(()) => {
                        covered_to = mark.end();
                        inserted.push(mark);
                    }
                    Err(err) => log::warn!("re-scan produced overlapping mark: {err}"),
                }
            } else {
                // Margin-only hit: mirrors a surviving mark's footprint
                covered_to = mark.end();
            }
        }

        for mark in &before {
            if !inserted.contains(mark) {
                self.damage.include_mark(mark, &viewport);
            }
        }
        for mark in &inserted {
            if !before.contains(mark) {
                self.damage.include_mark(mark, &viewport);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostError;
    use crate::snapshot::BufferSnapshot;

    fn vp(start: usize, end: usize) -> ViewportInfo {
        ViewportInfo::new(start, end, 16.0, 640.0)
    }

    fn controller(text: &str) -> HighlightController<BufferSnapshot> {
        let mut c = HighlightController::new(
            BufferSnapshot::new(text),
            HighlightConfig::default(),
        );
        c.on_viewport_changed(vp(0, text.chars().count()));
        c
    }

    fn starts(marks: &[Mark]) -> Vec<usize> {
        marks.iter().map(|m| m.start).collect()
    }

    // ==================== Search text ====================

    #[test]
    fn search_text_populates_visible_marks() {
        let mut c = controller("the cat sat on the mat");
        c.on_search_text_changed("at".into());

        let marks = c.visible_marks(HighlightCategory::Search);
        assert_eq!(starts(&marks), vec![5, 9, 20]);
        assert!(c.has_pending_damage());
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn empty_search_text_clears_marks() {
        let mut c = controller("aaa aaa");
        c.on_search_text_changed("aaa".into());
        assert_eq!(c.visible_marks(HighlightCategory::Search).len(), 2);

        c.on_search_text_changed(String::new());
        assert!(c.visible_marks(HighlightCategory::Search).is_empty());
        assert_eq!(c.pattern(HighlightCategory::Search), None);
    }

    #[test]
    fn marks_outside_viewport_are_not_visible() {
        let text = "word xxxx word xxxx word";
        let mut c = HighlightController::new(
            BufferSnapshot::new(text),
            HighlightConfig::default(),
        );
        c.on_viewport_changed(vp(0, 12));
        c.on_search_text_changed("word".into());

        // Only the occurrences inside [0, 12) show up
        let marks = c.visible_marks(HighlightCategory::Search);
        assert_eq!(starts(&marks), vec![0, 10]);
    }

    #[test]
    fn case_sensitivity_is_explicit_config() {
        let mut c = HighlightController::new(
            BufferSnapshot::new("Word word"),
            HighlightConfig {
                case_sensitive: true,
                ..HighlightConfig::default()
            },
        );
        c.on_viewport_changed(vp(0, 9));
        c.on_search_text_changed("word".into());
        assert_eq!(starts(&c.visible_marks(HighlightCategory::Search)), vec![5]);
    }

    // ==================== Edits ====================

    #[test]
    fn typing_before_matches_shifts_them() {
        let mut c = controller("xx cat cat");
        c.on_search_text_changed("cat".into());
        assert_eq!(starts(&c.visible_marks(HighlightCategory::Search)), vec![3, 7]);

        // Insert "yy" at the front, host first, then notify
        c.host_mut().apply_edit(0, 0, "yy");
        c.on_edit(0, 0, 2);

        assert_eq!(starts(&c.visible_marks(HighlightCategory::Search)), vec![5, 9]);
    }

    #[test]
    fn edit_inside_match_invalidates_only_it() {
        let mut c = controller("cat cat cat");
        c.on_search_text_changed("cat".into());
        assert_eq!(
            starts(&c.visible_marks(HighlightCategory::Search)),
            vec![0, 4, 8]
        );

        // Replace the middle occurrence's 'a' with 'u': "cat cut cat"
        c.host_mut().apply_edit(5, 1, "u");
        c.on_edit(5, 1, 1);

        assert_eq!(starts(&c.visible_marks(HighlightCategory::Search)), vec![0, 8]);
    }

    #[test]
    fn edit_creating_a_match_is_found_by_rescan() {
        let mut c = controller("cat cot cat");
        c.on_search_text_changed("cat".into());
        assert_eq!(starts(&c.visible_marks(HighlightCategory::Search)), vec![0, 8]);

        // "cot" becomes "cat"
        c.host_mut().apply_edit(5, 1, "a");
        c.on_edit(5, 1, 1);

        assert_eq!(
            starts(&c.visible_marks(HighlightCategory::Search)),
            vec![0, 4, 8]
        );
    }

    #[test]
    fn edit_with_net_delta_damages_to_viewport_end() {
        let mut c = controller("abc def ghi");
        c.on_repaint_complete();
        assert!(!c.has_pending_damage());

        c.host_mut().apply_edit(4, 0, "xx");
        c.on_edit(4, 0, 2);
        assert!(c.has_pending_damage());
    }

    #[test]
    fn edit_outside_empty_viewport_accumulates_no_damage() {
        let mut c = HighlightController::new(
            BufferSnapshot::new("cat cat"),
            HighlightConfig::default(),
        );
        c.on_search_text_changed("cat".into());
        c.on_edit(0, 0, 1);
        assert!(!c.has_pending_damage());
    }

    // ==================== Selection & frozen slots ====================

    #[test]
    fn selection_highlights_occurrences() {
        let mut c = controller("foo bar foo");
        c.on_selection_changed("foo".into());
        assert_eq!(
            starts(&c.visible_marks(HighlightCategory::Selection)),
            vec![0, 8]
        );
    }

    #[test]
    fn multi_line_selection_clears_highlight() {
        let mut c = controller("foo\nfoo bar");
        c.on_selection_changed("foo".into());
        assert_eq!(c.visible_marks(HighlightCategory::Selection).len(), 2);

        c.on_selection_changed("foo\nfoo".into());
        assert!(c.visible_marks(HighlightCategory::Selection).is_empty());
    }

    #[test]
    fn frozen_slot_survives_selection_change() {
        let mut c = controller("foo bar foo bar");
        c.on_selection_changed("foo".into());
        c.freeze_selection(0);
        c.on_selection_changed("bar".into());

        assert_eq!(
            starts(&c.visible_marks(HighlightCategory::Frozen(0))),
            vec![0, 8]
        );
        assert_eq!(
            starts(&c.visible_marks(HighlightCategory::Selection)),
            vec![4, 12]
        );
    }

    #[test]
    fn freeze_with_empty_selection_clears_slot() {
        let mut c = controller("foo foo");
        c.on_selection_changed("foo".into());
        c.freeze_selection(1);
        assert!(!c.visible_marks(HighlightCategory::Frozen(1)).is_empty());

        c.on_selection_changed(String::new());
        c.freeze_selection(1);
        assert!(c.visible_marks(HighlightCategory::Frozen(1)).is_empty());
    }

    #[test]
    fn freeze_out_of_range_slot_is_ignored() {
        let mut c = controller("foo foo");
        c.on_selection_changed("foo".into());
        c.freeze_selection(200);
        assert!(c.visible_marks(HighlightCategory::Frozen(200)).is_empty());
    }

    // ==================== Viewport ====================

    #[test]
    fn scrolling_reveals_marks_and_damages_them() {
        let text = "word xxxx word xxxx word";
        let mut c = HighlightController::new(
            BufferSnapshot::new(text),
            HighlightConfig::default(),
        );
        c.on_viewport_changed(vp(0, 12));
        c.on_search_text_changed("word".into());
        c.on_repaint_complete();
        assert!(!c.has_pending_damage());

        // Scroll so the last occurrence becomes visible; the occurrence at
        // 10 straddles the new viewport edge and stays partially visible
        c.on_viewport_changed(vp(12, 24));
        let marks = c.visible_marks(HighlightCategory::Search);
        assert_eq!(starts(&marks), vec![10, 20]);
        assert!(c.has_pending_damage());
    }

    #[test]
    fn unchanged_viewport_rescan_is_damage_free() {
        let mut c = controller("cat cat");
        c.on_search_text_changed("cat".into());
        c.on_repaint_complete();

        // Same viewport again: stores re-derive identical marks
        c.on_viewport_changed(vp(0, 7));
        assert!(!c.has_pending_damage());
    }

    // ==================== Repaint protocol ====================

    #[test]
    fn repaint_cycle_flushes_then_validates() {
        let mut c = controller("one two one");
        c.on_search_text_changed("one".into());

        let rect = c.request_repaint().unwrap();
        assert_eq!(c.phase(), Phase::Flushing);
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.width, 640.0);

        // Flush does not clear; asking again yields the same rect
        assert_eq!(c.request_repaint(), Some(rect));

        c.on_repaint_complete();
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.request_repaint(), None);
    }

    #[test]
    fn repaint_complete_without_damage_is_safe() {
        let mut c = controller("hello");
        c.on_repaint_complete();
        c.on_repaint_complete();
        assert_eq!(c.phase(), Phase::Idle);
        assert!(!c.has_pending_damage());
    }

    // ==================== Navigation ====================

    #[test]
    fn navigation_wraps_around() {
        let mut c = controller("cat cat cat");
        c.on_search_text_changed("cat".into());

        let cat = HighlightCategory::Search;
        assert_eq!(c.next_match_after(cat, 0).map(|m| m.start), Some(4));
        assert_eq!(c.next_match_after(cat, 8).map(|m| m.start), Some(0));
        assert_eq!(c.prev_match_before(cat, 8).map(|m| m.start), Some(4));
        assert_eq!(c.prev_match_before(cat, 0).map(|m| m.start), Some(8));
        assert_eq!(c.mark_at(cat, 5).map(|m| m.start), Some(4));
    }

    // ==================== Host degrade ====================

    struct FailingHost;

    impl HostBuffer for FailingHost {
        fn len_chars(&self) -> usize {
            100
        }
        fn text_range(&self, _start: usize, _end: usize) -> Result<String, HostError> {
            Err(HostError::Unavailable("detached".into()))
        }
    }

    #[test]
    fn host_failure_degrades_to_no_matches() {
        let mut c = HighlightController::new(FailingHost, HighlightConfig::default());
        c.on_viewport_changed(vp(0, 50));
        c.on_search_text_changed("word".into());

        assert!(c.visible_marks(HighlightCategory::Search).is_empty());
        // Repaint request also degrades without panicking
        assert_eq!(c.request_repaint(), None);
        assert_eq!(c.phase(), Phase::Idle);
    }

    // ==================== Event dispatch ====================

    #[test]
    fn drain_applies_events_in_order() {
        use crate::event_channel::create_event_channel;

        let mut c = controller("cat dog cat");
        let (sender, receiver) = create_event_channel(|| {});

        sender.send_search_text("cat").unwrap();
        sender.send_selection("dog").unwrap();
        c.drain(&receiver);

        assert_eq!(starts(&c.visible_marks(HighlightCategory::Search)), vec![0, 8]);
        assert_eq!(
            starts(&c.visible_marks(HighlightCategory::Selection)),
            vec![4]
        );
    }
}
