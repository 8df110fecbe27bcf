// Chunk: docs/chunks/host_boundary - In-memory reference host

//! In-memory reference implementation of the host boundary.
//!
//! `BufferSnapshot` pairs a text string with a [`PositionIndex`], giving
//! embedders that only hand over text (and the test suite) a ready-made
//! [`HostBuffer`]. Edits replace content wholesale; the snapshot mirrors a
//! host buffer, it does not try to be an editing data structure.

use crate::host::{HostBuffer, HostError};
use crate::position::{Position, PositionIndex};

/// A host buffer backed by an owned string.
#[derive(Debug, Clone)]
pub struct BufferSnapshot {
    text: String,
    index: PositionIndex,
}

impl BufferSnapshot {
    /// Creates a snapshot over the given content.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let index = PositionIndex::from_text(&text);
        Self { text, index }
    }

    /// Replaces the full content, reindexing lines.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.index = PositionIndex::from_text(&self.text);
    }

    /// Applies an edit the way a host buffer would: `old_len` chars at
    /// `position` are replaced by `replacement`.
    ///
    /// Positions past the end clamp to the end (append).
    pub fn apply_edit(&mut self, position: usize, old_len: usize, replacement: &str) {
        let chars: Vec<char> = self.text.chars().collect();
        let position = position.min(chars.len());
        let old_end = (position + old_len).min(chars.len());

        let mut next: String = chars[..position].iter().collect();
        next.push_str(replacement);
        next.extend(&chars[old_end..]);
        self.set_text(next);
    }

    /// The full content.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl HostBuffer for BufferSnapshot {
    fn len_chars(&self) -> usize {
        self.index.len_chars()
    }

    fn text_range(&self, start: usize, end: usize) -> Result<String, HostError> {
        let len = self.len_chars();
        if start > len {
            return Err(HostError::OutOfBounds { start, end, len });
        }
        let end = end.min(len);
        Ok(self
            .text
            .chars()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect())
    }

    // The maintained line index makes these O(log n) instead of the
    // default full-text walk
    fn position_of(&self, offset: usize) -> Result<Position, HostError> {
        Ok(self.index.position_of(offset))
    }

    fn offset_of(&self, pos: Position) -> Result<usize, HostError> {
        Ok(self.index.offset_of(pos))
    }
}
