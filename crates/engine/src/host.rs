// Chunk: docs/chunks/host_boundary - Buffer access trait and error taxonomy

//! The host boundary.
//!
//! Everything the engine requires from its embedder is expressed by the
//! [`HostBuffer`] trait: the ability to read a slice of the document as
//! text. The editor's event plumbing, settings dialogs, and native window
//! APIs stay on the host's side of this seam.
//!
//! Host failures are ordinary values, never panics: the controller treats
//! a failed read as "no matches this cycle" and the highlight feature
//! degrades to transiently stale output rather than failing the session.

use thiserror::Error;

use crate::position::{Position, PositionIndex};

/// Why a host buffer read failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The requested range reaches past the end of the buffer.
    #[error("range [{start}, {end}) is out of bounds (buffer length {len})")]
    OutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },
    /// The buffer cannot be read right now (closing view, detached
    /// document, host-side lock contention).
    #[error("host buffer unavailable: {0}")]
    Unavailable(String),
}

/// Read access to the host's document buffer, in char-offset terms.
///
/// The host's buffer is the source of truth; the engine never caches its
/// content beyond a single tracking cycle.
pub trait HostBuffer {
    /// Total document length in chars.
    fn len_chars(&self) -> usize;

    /// Returns the text of the half-open char range `[start, end)`.
    ///
    /// Implementations may clamp `end` to the buffer length but must fail
    /// with [`HostError::OutOfBounds`] when `start` is past the end.
    fn text_range(&self, start: usize, end: usize) -> Result<String, HostError>;

    /// Converts a char offset to a (line, column) position.
    ///
    /// The default rebuilds a line index from the full text; hosts with a
    /// native line table should override it.
    fn position_of(&self, offset: usize) -> Result<Position, HostError> {
        let text = self.text_range(0, self.len_chars())?;
        Ok(PositionIndex::from_text(&text).position_of(offset))
    }

    /// Converts a (line, column) position back to a char offset.
    fn offset_of(&self, pos: Position) -> Result<usize, HostError> {
        let text = self.text_range(0, self.len_chars())?;
        Ok(PositionIndex::from_text(&text).offset_of(pos))
    }
}
