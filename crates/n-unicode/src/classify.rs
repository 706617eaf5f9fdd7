// SPDX-License-Identifier: MIT
//
// CharacterClassifier — buffer → CharacterMap.
//
// Classification is a pure per-character table lookup. The resulting map is
// index-aligned with the buffer: position `i` of the map is the category of
// the `i`-th char (Unicode scalar value, not byte) of the buffer.
//
// A map is a snapshot. It is never patched; when the buffer changes, the
// owner classifies again.

use std::ops::Index;

use ropey::Rope;

use crate::category::WordCategory;
use crate::table::PropertyTable;

// ─── CharacterMap ────────────────────────────────────────────────────────────

/// Per-position categories for one buffer snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CharacterMap {
    categories: Vec<WordCategory>,
}

impl CharacterMap {
    /// Wrap an existing category sequence.
    #[must_use]
    pub const fn new(categories: Vec<WordCategory>) -> Self {
        Self { categories }
    }

    /// Category at `index`, or `None` outside the buffer.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<WordCategory> {
        self.categories.get(index).copied()
    }

    /// Category `back` positions before `index`, or `None` if that falls
    /// before the start.
    #[inline]
    #[must_use]
    pub fn before(&self, index: usize, back: usize) -> Option<WordCategory> {
        index.checked_sub(back).and_then(|i| self.get(i))
    }

    /// Category `ahead` positions after `index`, or `None` past the end.
    #[inline]
    #[must_use]
    pub fn after(&self, index: usize, ahead: usize) -> Option<WordCategory> {
        index.checked_add(ahead).and_then(|i| self.get(i))
    }

    /// Number of positions.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// True for an empty buffer.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// The categories as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[WordCategory] {
        &self.categories
    }

    /// Iterate over the categories in buffer order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, WordCategory>> {
        self.categories.iter().copied()
    }
}

impl Index<usize> for CharacterMap {
    type Output = WordCategory;

    fn index(&self, index: usize) -> &WordCategory {
        &self.categories[index]
    }
}

impl From<Vec<WordCategory>> for CharacterMap {
    fn from(categories: Vec<WordCategory>) -> Self {
        Self::new(categories)
    }
}

impl FromIterator<WordCategory> for CharacterMap {
    fn from_iter<I: IntoIterator<Item = WordCategory>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CharacterMap {
    type Item = WordCategory;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, WordCategory>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ─── Classification ──────────────────────────────────────────────────────────

/// Classify every character of `chars`.
#[must_use]
pub fn classify<I>(table: &PropertyTable, chars: I) -> CharacterMap
where
    I: IntoIterator<Item = char>,
{
    chars.into_iter().map(|ch| table.category(ch)).collect()
}

/// Classify a string slice. Offsets in the map are char offsets.
#[must_use]
pub fn classify_str(table: &PropertyTable, text: &str) -> CharacterMap {
    classify(table, text.chars())
}

/// Classify the contents of a rope.
#[must_use]
pub fn classify_rope(table: &PropertyTable, rope: &Rope) -> CharacterMap {
    let mut categories = Vec::with_capacity(rope.len_chars());
    categories.extend(rope.chars().map(|ch| table.category(ch)));
    CharacterMap::new(categories)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
