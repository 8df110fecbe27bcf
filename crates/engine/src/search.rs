// Chunk: docs/chunks/incremental_search - Bounded lazy occurrence scan

//! Occurrence search over buffer text.
//!
//! The engine is content-driven: it receives the text to scan and owns no
//! buffer, so the same engine runs against a whole document or a bounded
//! viewport slice. Results come back as a lazy iterator; the caller stops
//! pulling when it has what it needs, which is also the cancellation story
//! for long scans (no token, no shared state to unwind).
//!
//! # Matching rules
//!
//! - Case folding is simple one-to-one Unicode lowercasing, controlled by
//!   an explicit flag passed at construction, never read from ambient state.
//! - A hit advances the scan cursor by one char, not by the pattern length,
//!   so overlapping occurrences are all reported ("aa" in "aaaa" yields
//!   marks at 0, 1, 2).
//! - Matches never span a line break. Matching is exact per folded char, so
//!   a newline-free pattern cannot produce a multi-line hit; a pattern that
//!   itself contains a line break yields the empty sequence.
//! - Matches lie entirely within the scan range. Callers widen the range by
//!   the pattern length when a boundary straddle matters.

use matchlight_marks::Mark;

/// Case-folds a single char. Multi-char lowercase expansions keep their
/// first char so offsets stay one-to-one with the source text.
fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Occurrence search with an explicit case-sensitivity policy.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine {
    case_sensitive: bool,
}

impl SearchEngine {
    pub fn new(case_sensitive: bool) -> Self {
        Self { case_sensitive }
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Scans `text` for `pattern` within the char-offset range
    /// `[range_start, range_end)`.
    ///
    /// Returns a finite, restartable lazy sequence of marks in ascending
    /// start order. Degenerate inputs (empty pattern, pattern containing a
    /// line break, inverted or empty range) yield the empty sequence, never
    /// an error; viewport races transiently produce inverted ranges during
    /// rapid scrolling.
    pub fn find_matches(
        &self,
        text: &str,
        pattern: &str,
        range_start: usize,
        range_end: usize,
    ) -> Matches {
        if pattern.is_empty() || pattern.contains('\n') || range_end <= range_start {
            return Matches::empty();
        }

        let fold = |c: char| {
            if self.case_sensitive {
                c
            } else {
                fold_char(c)
            }
        };

        let hay: Vec<char> = text
            .chars()
            .skip(range_start)
            .take(range_end - range_start)
            .map(fold)
            .collect();
        let needle: Vec<char> = pattern.chars().map(fold).collect();

        Matches {
            hay,
            needle,
            base: range_start,
            cursor: 0,
        }
    }
}

/// Lazy match sequence produced by [`SearchEngine::find_matches`].
///
/// Each pull scans forward from the cursor; dropping the iterator abandons
/// the remaining scan with no cleanup required.
#[derive(Debug, Clone)]
pub struct Matches {
    /// Folded chars of the scan window.
    hay: Vec<char>,
    /// Folded chars of the pattern; empty means the sequence is empty.
    needle: Vec<char>,
    /// Char offset of `hay[0]` in the document.
    base: usize,
    /// Next scan position within `hay`.
    cursor: usize,
}

impl Matches {
    fn empty() -> Self {
        Self {
            hay: Vec::new(),
            needle: Vec::new(),
            base: 0,
            cursor: 0,
        }
    }
}

impl Iterator for Matches {
    type Item = Mark;

    fn next(&mut self) -> Option<Mark> {
        if self.needle.is_empty() {
            return None;
        }
        while self.cursor + self.needle.len() <= self.hay.len() {
            let window = &self.hay[self.cursor..self.cursor + self.needle.len()];
            let hit = window == self.needle.as_slice();
            let at = self.base + self.cursor;
            // Advance by one either way so overlapping occurrences are
            // all reported
            self.cursor += 1;
            if hit {
                return Some(Mark::new(at, self.needle.len()));
            }
        }
        None
    }
}
