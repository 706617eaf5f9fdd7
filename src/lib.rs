// SPDX-License-Identifier: MIT
//
// n-words — word-boundary segmentation for editor buffers.
//
// This crate wires the two engine crates together behind one owner:
//
//   n-unicode → WordCategory, PropertyTable, classify → CharacterMap
//   n-segment → boundary rules, segment → Unit, PositionIndex
//
// A `WordIndex` holds one buffer snapshot and everything derived from it:
//
//   text ──classify──▶ CharacterMap ──segment──▶ [Unit] ──build──▶ PositionIndex
//
// The snapshot is immutable between rebuilds. An edit means calling
// `rebuild` with the new text; nothing is patched in place, so every query
// after a rebuild sees a map and an index that agree with each other.

use std::sync::Arc;

use ropey::Rope;

pub use n_segment::{
    self, PositionIndex, Spanned, Unit, UnitKind, WordOptions, is_word_boundary, segment,
    unit_kind, words,
};
pub use n_unicode::{self, CharacterMap, PropertyTable, TableBuilder, WordCategory};

// ─── WordIndex ───────────────────────────────────────────────────────────────

/// A classified, segmented and indexed buffer snapshot.
///
/// Offsets are char offsets into the text the index was built from.
#[derive(Debug, Clone)]
pub struct WordIndex {
    table: Arc<PropertyTable>,
    chars: Vec<char>,
    map: CharacterMap,
    index: PositionIndex,
}

impl WordIndex {
    /// Build the index for `text`.
    #[must_use]
    pub fn new(table: Arc<PropertyTable>, text: &str) -> Self {
        Self::from_chars(table, text.chars().collect())
    }

    /// Build the index for the contents of a rope.
    #[must_use]
    pub fn from_rope(table: Arc<PropertyTable>, rope: &Rope) -> Self {
        Self::from_chars(table, rope.chars().collect())
    }

    fn from_chars(table: Arc<PropertyTable>, chars: Vec<char>) -> Self {
        let mut this = Self {
            table,
            chars,
            map: CharacterMap::default(),
            index: PositionIndex::default(),
        };
        this.reindex();
        this
    }

    /// Replace the snapshot with `text` and derive everything again.
    pub fn rebuild(&mut self, text: &str) {
        self.chars.clear();
        self.chars.extend(text.chars());
        self.reindex();
    }

    fn reindex(&mut self) {
        let span = tracing::debug_span!("word_index", chars = self.chars.len());
        let _guard = span.enter();

        self.map = n_unicode::classify(&self.table, self.chars.iter().copied());
        tracing::trace!(message = "classified", positions = self.map.len());

        self.index = segment(&self.map).collect();
        tracing::debug!(
            message = "word index rebuilt",
            chars = self.chars.len(),
            units = self.index.len(),
        );
    }

    // ── Queries ─────────────────────────────────────────────────────────────

    /// The unit covering `offset`, or `None` past the end.
    #[must_use]
    pub fn unit_at(&self, offset: usize) -> Option<Unit> {
        self.index.get(offset).copied()
    }

    /// Text of the word under `offset`. `None` when the offset is past the
    /// end or sits on whitespace, punctuation or a line break.
    #[must_use]
    pub fn word_at(&self, offset: usize) -> Option<String> {
        let unit = self.unit_at(offset)?;
        match unit_kind(&self.map, unit)? {
            UnitKind::Word => self.text_of(unit),
            UnitKind::Whitespace | UnitKind::LineBreak | UnitKind::Punctuation => None,
        }
    }

    /// Is there a word boundary after `offset`?
    #[must_use]
    pub fn is_boundary(&self, offset: usize) -> bool {
        is_word_boundary(&self.map, offset)
    }

    /// Units selected by `options`, in buffer order.
    #[must_use]
    pub fn words(&self, options: &WordOptions) -> Vec<Unit> {
        words(&self.map, options)
    }

    /// The text a unit covers, or `None` if it reaches past the end.
    #[must_use]
    pub fn text_of(&self, unit: Unit) -> Option<String> {
        self.chars
            .get(unit.start..=unit.finish)
            .map(|chars| chars.iter().collect())
    }

    /// The table this index classifies with.
    #[must_use]
    pub fn table(&self) -> &Arc<PropertyTable> {
        &self.table
    }

    /// The per-position categories of the current snapshot.
    #[must_use]
    pub const fn map(&self) -> &CharacterMap {
        &self.map
    }

    /// Every unit of the current snapshot.
    #[must_use]
    pub const fn units(&self) -> &PositionIndex {
        &self.index
    }

    /// Length of the snapshot in chars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
