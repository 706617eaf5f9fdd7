//! Segmenter — split a character map into units.
//!
//! [`segment`] walks the map once, asking [`is_word_boundary`] about every
//! offset. Each `true` closes the current run as a [`Unit`] and starts the
//! next one right after it, so the units come out ordered, contiguous and
//! non-overlapping, covering `[0, len)` exactly. An empty map yields nothing.
//!
//! The iterator is lazy and borrows the map. It carries no state beyond its
//! cursor: calling [`segment`] again (or cloning a fresh iterator) replays
//! the identical sequence.

use std::iter::FusedIterator;

use n_unicode::CharacterMap;

use crate::boundary::is_word_boundary;
use crate::unit::Unit;

/// Lazy sequence of units over one [`CharacterMap`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Segments<'a> {
    map: &'a CharacterMap,
    /// First offset of the run being built.
    start: usize,
    /// Next offset to test.
    pos: usize,
}

/// Segment `map` into units.
///
/// ```
/// use n_segment::{segment, Unit};
/// use n_unicode::{classify_str, PropertyTable};
///
/// let map = classify_str(&PropertyTable::builtin(), "cat dog");
/// let units: Vec<Unit> = segment(&map).collect();
/// assert_eq!(units, [Unit::new(0, 2), Unit::new(3, 3), Unit::new(4, 6)]);
/// ```
pub fn segment(map: &CharacterMap) -> Segments<'_> {
    Segments {
        map,
        start: 0,
        pos: 0,
    }
}

impl Iterator for Segments<'_> {
    type Item = Unit;

    fn next(&mut self) -> Option<Unit> {
        let len = self.map.len();
        while self.pos < len {
            let offset = self.pos;
            self.pos += 1;
            if is_word_boundary(self.map, offset) {
                let unit = Unit::new(self.start, offset);
                self.start = self.pos;
                return Some(unit);
            }
        }

        // Close any run left open at the end.
        if self.start < len {
            let unit = Unit::new(self.start, len - 1);
            self.start = len;
            return Some(unit);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.map.len().saturating_sub(self.start);
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl FusedIterator for Segments<'_> {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
