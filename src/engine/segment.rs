//! Sentence segmentation.
//!
//! Input is split on runs of sentence terminators (`.`, `!`, `?`). Each piece
//! is trimmed and kept only if it reaches the minimum length; shorter pieces
//! ("ok", "3", stray punctuation) are treated as noise.
//!
//! ```text
//! "Pay rent!! ok. Call Ana"
//!   ├─ "Pay rent"   kept
//!   ├─ "ok"         dropped (< min)
//!   └─ "Call Ana"   kept
//! ```
//!
//! The iterator is lazy and borrows from the input. Abbreviations and decimal
//! points split like any other terminator; the engine is heuristic.

use regex::{Regex, Split};

fn terminators() -> &'static Regex {
    regex!(r"[.!?]+")
}

/// Lazy iterator over retained fragments.
#[derive(Debug)]
pub(crate) struct Segments<'a> {
    pieces: Split<'static, 'a>,
    min_len: usize,
    dropped: usize,
}

impl Segments<'_> {
    /// Number of non-empty pieces discarded so far by the length filter.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        for piece in self.pieces.by_ref() {
            let trimmed = piece.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.chars().count() >= self.min_len {
                return Some(trimmed);
            }
            self.dropped += 1;
        }
        None
    }
}

/// Split `input` into trimmed fragments of at least `min_len` characters.
pub(crate) fn segments(input: &str, min_len: usize) -> Segments<'_> {
    Segments { pieces: terminators().split(input), min_len: min_len.max(1), dropped: 0 }
}
