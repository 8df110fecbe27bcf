// Chunk: docs/chunks/mark_store - Ordered non-overlapping highlight intervals

//! matchlight-marks: the highlight mark interval store for matchlight.
//!
//! This crate provides the ordered collection of highlighted text ranges
//! ("marks") that the tracking engine keeps per highlight category. It knows
//! nothing about search patterns, viewports, or screens; it is a pure data
//! structure over char offsets and is fully testable in isolation.
//!
//! # Overview
//!
//! The main type is [`MarkStore`], which provides:
//! - Overlap-rejecting insertion ([`MarkStore::insert`])
//! - O(1) wholesale clearing ([`MarkStore::remove_all`])
//! - Edit-shift semantics ([`MarkStore::shift`]): marks after an edit are
//!   translated, marks overlapping it are invalidated, never stretched
//! - Ordered range queries ([`MarkStore::query`]) and neighbor lookups
//!   backing occurrence navigation
//!
//! # Example
//!
//! ```
//! use matchlight_marks::{Mark, MarkStore};
//!
//! let mut store = MarkStore::new();
//! store.insert(Mark::new(10, 4)).unwrap();
//! store.insert(Mark::new(20, 4)).unwrap();
//!
//! // An edit of net length +3 strictly before both marks shifts both
//! let removed = store.shift(5, 2, 5);
//! assert!(removed.is_empty());
//! assert_eq!(store.query(0, 100), &[Mark::new(13, 4), Mark::new(23, 4)]);
//! ```

mod mark;
mod store;

pub use mark::Mark;
pub use store::{MarkStore, OverlapError};
