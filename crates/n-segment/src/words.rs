//! Word extraction — keep the units that are words.
//!
//! Segmentation covers every character, so whitespace, punctuation and line
//! breaks come out as units too. [`unit_kind`] labels a unit from its
//! categories and [`words`] filters the segmentation by [`WordOptions`].

use n_unicode::{CharacterMap, WordCategory};
use strum_macros::{Display, EnumIter};

use crate::segment::segment;
use crate::unit::Unit;

// ---------------------------------------------------------------------------
// UnitKind
// ---------------------------------------------------------------------------

/// What a unit holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum UnitKind {
    /// Contains at least one letter, digit, katakana or `_`.
    Word,
    Whitespace,
    /// `CR LF`, `CR`, `LF` or another newline character.
    LineBreak,
    /// Anything else: punctuation, or connectors and marks with nothing to
    /// attach to.
    Punctuation,
}

/// Label `unit` from the categories it covers. `None` if the unit reaches
/// past the end of `map`.
#[must_use]
pub fn unit_kind(map: &CharacterMap, unit: Unit) -> Option<UnitKind> {
    let cats = map.as_slice().get(unit.start..=unit.finish)?;

    if cats
        .iter()
        .any(|&c| c.is_extendable() || c == WordCategory::ExtendNumLet)
    {
        return Some(UnitKind::Word);
    }

    Some(match cats.first().copied()? {
        WordCategory::Whitespace => UnitKind::Whitespace,
        WordCategory::Newline | WordCategory::Cr | WordCategory::Lf => UnitKind::LineBreak,
        WordCategory::Punctuation
        | WordCategory::ALetter
        | WordCategory::MidLetter
        | WordCategory::MidNumLet
        | WordCategory::MidNum
        | WordCategory::At
        | WordCategory::Numeric
        | WordCategory::Extend
        | WordCategory::Format
        | WordCategory::Katakana
        | WordCategory::ExtendNumLet => UnitKind::Punctuation,
    })
}

// ---------------------------------------------------------------------------
// WordOptions
// ---------------------------------------------------------------------------

/// Which unit kinds [`words`] returns besides words themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct WordOptions {
    pub include_whitespace: bool,
    pub include_punctuation: bool,
    pub include_line_breaks: bool,
}

impl WordOptions {
    /// Words only.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_whitespace: false,
            include_punctuation: false,
            include_line_breaks: false,
        }
    }

    /// Every unit; `words` then equals the full segmentation.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            include_whitespace: true,
            include_punctuation: true,
            include_line_breaks: true,
        }
    }

    /// True if a unit of `kind` should be returned.
    #[inline]
    #[must_use]
    pub const fn accepts(&self, kind: UnitKind) -> bool {
        match kind {
            UnitKind::Word => true,
            UnitKind::Whitespace => self.include_whitespace,
            UnitKind::LineBreak => self.include_line_breaks,
            UnitKind::Punctuation => self.include_punctuation,
        }
    }
}

/// Segment `map` and keep the units `options` accepts, in order.
#[must_use]
pub fn words(map: &CharacterMap, options: &WordOptions) -> Vec<Unit> {
    segment(map)
        .filter(|&unit| unit_kind(map, unit).is_some_and(|kind| options.accepts(kind)))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
