//! Units — inclusive spans of buffer offsets.
//!
//! A [`Unit`] is one segmented run: `start` and `finish` are both
//! **inclusive** char offsets, so a one-character unit has
//! `start == finish`. There is no empty unit.
//!
//! The [`Spanned`] trait is what [`PositionIndex`](crate::index::PositionIndex)
//! actually needs, so callers can index their own span types (a word with its
//! text, a highlight with its style) without converting to `Unit` first.

use std::fmt;
use std::ops::RangeInclusive;

// ---------------------------------------------------------------------------
// Spanned
// ---------------------------------------------------------------------------

/// Anything that covers an inclusive range of offsets.
pub trait Spanned {
    /// First offset covered.
    fn start(&self) -> usize;

    /// Last offset covered (inclusive).
    fn finish(&self) -> usize;

    /// True if `offset` lies in `[start, finish]`.
    #[inline]
    fn contains_offset(&self, offset: usize) -> bool {
        self.start() <= offset && offset <= self.finish()
    }
}

// ---------------------------------------------------------------------------
// Unit
// ---------------------------------------------------------------------------

/// A contiguous run of characters, `[start, finish]` inclusive.
///
/// Ordered by `start`, then `finish`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Unit {
    pub start: usize,
    pub finish: usize,
}

impl Unit {
    /// Create a unit. Panics in debug if `start > finish`.
    #[inline]
    #[must_use]
    pub const fn new(start: usize, finish: usize) -> Self {
        debug_assert!(start <= finish, "Unit::new requires start <= finish");
        Self { start, finish }
    }

    /// A unit covering exactly one offset.
    #[inline]
    #[must_use]
    pub const fn single(offset: usize) -> Self {
        Self {
            start: offset,
            finish: offset,
        }
    }

    /// Number of characters covered. Always at least 1.
    #[inline]
    #[must_use]
    pub const fn char_len(self) -> usize {
        self.finish - self.start + 1
    }

    /// True if `offset` lies inside this unit.
    #[inline]
    #[must_use]
    pub const fn contains(self, offset: usize) -> bool {
        self.start <= offset && offset <= self.finish
    }

    /// The covered offsets as a range.
    #[inline]
    #[must_use]
    pub const fn range(self) -> RangeInclusive<usize> {
        self.start..=self.finish
    }

    /// The same unit moved `delta` offsets to the right, or `None` if the
    /// end would pass `usize::MAX`.
    #[inline]
    #[must_use]
    pub const fn shifted(self, delta: usize) -> Option<Self> {
        match (self.start.checked_add(delta), self.finish.checked_add(delta)) {
            (Some(start), Some(finish)) => Some(Self { start, finish }),
            _ => None,
        }
    }
}

impl Spanned for Unit {
    #[inline]
    fn start(&self) -> usize {
        self.start
    }

    #[inline]
    fn finish(&self) -> usize {
        self.finish
    }
}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unit({}..={})", self.start, self.finish)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{}}}", self.start, self.finish)
    }
}

impl From<Unit> for RangeInclusive<usize> {
    fn from(unit: Unit) -> Self {
        unit.range()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
