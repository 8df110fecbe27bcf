// Chunk: docs/chunks/highlight_controller - Live highlight tracking engine

//! matchlight: a live occurrence-highlight tracking engine for text
//! editors.
//!
//! Given a stream of edit, search, selection, and viewport notifications
//! from a host editor, the engine keeps per-category sets of highlighted
//! text ranges correct as the user types and scrolls, without rescanning
//! the whole document on every keystroke and without repainting more
//! screen than necessary.
//!
//! # Overview
//!
//! The main type is [`HighlightController`], which owns:
//! - one [`MarkStore`] per [`HighlightCategory`] (find query, live
//!   selection, frozen slots)
//! - a [`DamageTracker`] accumulating the screen region that needs
//!   repainting, behind a mutex because notifications and repaint
//!   requests may arrive on different threads
//! - the latest [`ViewportInfo`], which bounds all scan and damage work
//!
//! Hosts feed notifications through the [`event_channel`] and drive the
//! repaint protocol with [`HighlightController::request_repaint`] /
//! [`HighlightController::on_repaint_complete`].
//!
//! # Example
//!
//! ```
//! use matchlight::{
//!     BufferSnapshot, HighlightCategory, HighlightConfig, HighlightController, ViewportInfo,
//! };
//!
//! let host = BufferSnapshot::new("the cat sat on the mat");
//! let mut tracker = HighlightController::new(host, HighlightConfig::default());
//! tracker.on_viewport_changed(ViewportInfo::new(0, 22, 16.0, 640.0));
//!
//! tracker.on_search_text_changed("at".into());
//! let marks = tracker.visible_marks(HighlightCategory::Search);
//! assert_eq!(marks.len(), 3);
//!
//! // The host paints the flushed rectangle, then acknowledges
//! let rect = tracker.request_repaint().unwrap();
//! assert_eq!(rect.x, 0.0);
//! tracker.on_repaint_complete();
//! ```
//!
//! The engine operates on one document/view pair at a time; hosts with
//! multiple views create one controller per view. Rendering, persistence,
//! and editor registration stay on the host's side of the [`HostBuffer`]
//! seam.

pub mod config;
pub mod controller;
pub mod damage;
pub mod event_channel;
pub mod host;
pub mod position;
pub mod search;
pub mod snapshot;
pub mod viewport;

pub use config::HighlightConfig;
pub use controller::{HighlightCategory, HighlightController, Phase};
pub use damage::{DamageSpan, DamageTracker, ScreenRect};
pub use event_channel::{create_event_channel, EventReceiver, EventSender, HighlightEvent};
pub use host::{HostBuffer, HostError};
pub use position::{Position, PositionIndex};
pub use search::{Matches, SearchEngine};
pub use snapshot::BufferSnapshot;
pub use viewport::ViewportInfo;

// Re-export the mark types so hosts depend on one crate
pub use matchlight_marks::{Mark, MarkStore, OverlapError};
