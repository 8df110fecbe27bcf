// Chunk: docs/chunks/mark_store - Ordered non-overlapping highlight intervals

//! Integration tests for realistic edit sequences against the mark store.
//!
//! These tests verify that the store's ordering and non-overlap invariants
//! survive long runs of interleaved inserts, shifts, and evictions, the way
//! a controller drives it during an editing session.

use matchlight_marks::{Mark, MarkStore};

fn assert_invariants(store: &MarkStore) {
    let marks: Vec<Mark> = store.iter().copied().collect();
    for pair in marks.windows(2) {
        assert!(
            pair[0].end() <= pair[1].start,
            "marks out of order or overlapping: {pair:?}"
        );
    }
}

#[test]
fn test_typing_before_highlights_keeps_them_aligned() {
    let mut store = MarkStore::new();
    // Highlights for a 5-char word at three occurrences
    store.insert(Mark::new(10, 5)).unwrap();
    store.insert(Mark::new(30, 5)).unwrap();
    store.insert(Mark::new(50, 5)).unwrap();

    // Type 7 characters at the top of the document, one keystroke at a time
    for i in 0..7 {
        let removed = store.shift(i, 0, 1);
        assert!(removed.is_empty());
        assert_invariants(&store);
    }

    let marks: Vec<Mark> = store.iter().copied().collect();
    assert_eq!(
        marks,
        vec![Mark::new(17, 5), Mark::new(37, 5), Mark::new(57, 5)]
    );
}

#[test]
fn test_backspacing_through_a_highlight_invalidates_only_it() {
    let mut store = MarkStore::new();
    store.insert(Mark::new(10, 5)).unwrap();
    store.insert(Mark::new(30, 5)).unwrap();

    // Backspace from offset 14 down into the first mark
    let removed = store.shift(13, 1, 0);
    assert_eq!(removed, vec![Mark::new(10, 5)]);
    assert_invariants(&store);

    // The trailing mark moved left by one; the first is gone
    let marks: Vec<Mark> = store.iter().copied().collect();
    assert_eq!(marks, vec![Mark::new(29, 5)]);
}

#[test]
fn test_rebuild_cycle_after_invalidation() {
    let mut store = MarkStore::new();
    store.insert(Mark::new(10, 4)).unwrap();
    store.insert(Mark::new(20, 4)).unwrap();

    // An edit lands inside the first mark
    let removed = store.shift(11, 2, 6);
    assert_eq!(removed.len(), 1);

    // Controller evicts the affected region and re-inserts fresh matches
    store.remove_intersecting(8, 20);
    store.insert(Mark::new(9, 4)).unwrap();
    store.insert(Mark::new(15, 4)).unwrap();
    assert_invariants(&store);

    let marks: Vec<Mark> = store.iter().copied().collect();
    assert_eq!(
        marks,
        vec![Mark::new(9, 4), Mark::new(15, 4), Mark::new(24, 4)]
    );
}

#[test]
fn test_interleaved_inserts_and_edits_preserve_invariants() {
    let mut store = MarkStore::new();
    for i in 0..20 {
        store.insert(Mark::new(i * 10, 4)).unwrap();
    }

    // Alternate insertions and deletions at varying positions
    let edits = [
        (3usize, 0usize, 2usize),
        (45, 5, 0),
        (90, 2, 2),
        (0, 0, 10),
        (120, 30, 1),
    ];
    for &(pos, old_len, new_len) in &edits {
        store.shift(pos, old_len, new_len);
        assert_invariants(&store);
    }

    // Whatever survived still round-trips through query
    let all: Vec<Mark> = store.iter().copied().collect();
    assert_eq!(store.query(0, usize::MAX / 2), &all[..]);
}

#[test]
fn test_wholesale_replacement_cycle() {
    let mut store = MarkStore::new();
    store.insert(Mark::new(5, 3)).unwrap();
    store.insert(Mark::new(15, 3)).unwrap();

    // Search text changed: controller clears and repopulates
    store.remove_all();
    assert!(store.is_empty());

    for start in [2, 9, 16, 23] {
        store.insert(Mark::new(start, 6)).unwrap();
    }
    assert_invariants(&store);
    assert_eq!(store.len(), 4);
}

#[test]
fn test_navigation_survives_edits() {
    let mut store = MarkStore::new();
    store.insert(Mark::new(10, 4)).unwrap();
    store.insert(Mark::new(30, 4)).unwrap();
    store.insert(Mark::new(50, 4)).unwrap();

    // Cursor at 12 sits inside the first mark
    assert_eq!(store.nearest(12), Some(Mark::new(10, 4)));
    assert_eq!(store.next_after(12), Some(Mark::new(30, 4)));

    // An edit deletes the middle occurrence's text
    store.shift(28, 8, 0);
    assert_eq!(store.next_after(12), Some(Mark::new(42, 4)));
    assert_eq!(store.prev_before(42), Some(Mark::new(10, 4)));
}
