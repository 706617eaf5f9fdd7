// SPDX-License-Identifier: MIT
//
// Word-break categories.
//
// Every character in a buffer is assigned exactly one `WordCategory`. The set
// is closed: the boundary rules in n-segment match on it, and the category
// traits below are an exhaustive `match`, so adding a variant is a compile
// error everywhere a decision depends on it.
//
// Positions outside a buffer have no category at all. That is modelled as
// `Option::None` by callers, never as a variant here.
//
// Names follow the Unicode Word_Break property values (UAX #29) where one
// exists. `Punctuation` and `Whitespace` are editor additions: they always
// break, so the rule chain checks them first.

use std::fmt;

use strum_macros::{EnumCount, EnumIter, EnumString, IntoStaticStr};

// ─── Category ────────────────────────────────────────────────────────────────

/// The word-break class of a single character.
///
/// Parses from its own name and from the UCD aliases that fold into it:
///
/// ```
/// use n_unicode::WordCategory;
///
/// assert_eq!("ALetter".parse(), Ok(WordCategory::ALetter));
/// assert_eq!("Hebrew_Letter".parse(), Ok(WordCategory::ALetter));
/// assert_eq!("ZWJ".parse(), Ok(WordCategory::Extend));
/// assert!("Regional_Indicator".parse::<WordCategory>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount, EnumString,
    IntoStaticStr,
)]
pub enum WordCategory {
    /// Punctuation and symbols. Always separates words.
    #[strum(to_string = "Punctuation", serialize = "Double_Quote")]
    Punctuation,
    /// Horizontal whitespace. Always separates words.
    #[strum(to_string = "Whitespace", serialize = "WSegSpace")]
    Whitespace,
    /// Alphabetic letters of most scripts.
    #[strum(to_string = "ALetter", serialize = "Hebrew_Letter")]
    ALetter,
    /// Joins letters only: `:` in Swedish `k:a`, middle dot.
    #[strum(to_string = "MidLetter")]
    MidLetter,
    /// Joins letters and digits: `.` and `'`.
    #[strum(to_string = "MidNumLet", serialize = "Single_Quote")]
    MidNumLet,
    /// Joins digits only: `,` and `;`.
    #[strum(to_string = "MidNum")]
    MidNum,
    /// `@`, glued between letters (`user@host`).
    #[strum(to_string = "At")]
    At,
    /// Decimal digits.
    #[strum(to_string = "Numeric")]
    Numeric,
    /// Combining marks and other extending characters.
    #[strum(to_string = "Extend", serialize = "ZWJ")]
    Extend,
    /// Invisible format controls (soft hyphen, bidi marks).
    #[strum(to_string = "Format")]
    Format,
    /// Line separators other than CR and LF (VT, FF, NEL, LS, PS).
    #[strum(to_string = "Newline")]
    Newline,
    /// Carriage return, U+000D.
    #[strum(to_string = "CR")]
    Cr,
    /// Line feed, U+000A.
    #[strum(to_string = "LF")]
    Lf,
    /// Katakana and the Katakana-like marks.
    #[strum(to_string = "Katakana")]
    Katakana,
    /// Connector punctuation such as `_`.
    #[strum(to_string = "ExtendNumLet")]
    ExtendNumLet,
}

impl fmt::Display for WordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &'static str = self.into();
        f.write_str(name)
    }
}

// ─── Traits ──────────────────────────────────────────────────────────────────

bitflags::bitflags! {
    /// Groupings of categories that the boundary rules test together.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CategoryTraits: u8 {
        /// `Punctuation` or `Whitespace` — always break around these.
        const SEPARATOR         = 1 << 0;
        /// `MidLetter`, `MidNumLet`, `At` — glue between two letters.
        const LETTER_CONNECTOR  = 1 << 1;
        /// `MidNum`, `MidNumLet` — glue between two digits.
        const NUMERIC_CONNECTOR = 1 << 2;
        /// `ALetter` or `Numeric`.
        const ALPHANUMERIC      = 1 << 3;
        /// `Extend` or `Format` — never host a boundary.
        const IGNORABLE         = 1 << 4;
        /// `Newline`, `CR`, `LF`.
        const LINE_BREAK        = 1 << 5;
        /// `ALetter`, `Numeric`, `Katakana` — joined by `ExtendNumLet`.
        const EXTENDABLE        = 1 << 6;
    }
}

impl WordCategory {
    /// The rule groupings this category belongs to.
    #[must_use]
    pub const fn traits(self) -> CategoryTraits {
        match self {
            Self::Punctuation | Self::Whitespace => CategoryTraits::SEPARATOR,
            Self::ALetter | Self::Numeric => {
                CategoryTraits::ALPHANUMERIC.union(CategoryTraits::EXTENDABLE)
            }
            Self::MidLetter | Self::At => CategoryTraits::LETTER_CONNECTOR,
            Self::MidNumLet => {
                CategoryTraits::LETTER_CONNECTOR.union(CategoryTraits::NUMERIC_CONNECTOR)
            }
            Self::MidNum => CategoryTraits::NUMERIC_CONNECTOR,
            Self::Extend | Self::Format => CategoryTraits::IGNORABLE,
            Self::Newline | Self::Cr | Self::Lf => CategoryTraits::LINE_BREAK,
            Self::Katakana => CategoryTraits::EXTENDABLE,
            Self::ExtendNumLet => CategoryTraits::empty(),
        }
    }

    /// True for `Punctuation` and `Whitespace`.
    #[inline]
    #[must_use]
    pub const fn is_separator(self) -> bool {
        self.traits().contains(CategoryTraits::SEPARATOR)
    }

    /// True for `MidLetter`, `MidNumLet` and `At`.
    #[inline]
    #[must_use]
    pub const fn is_letter_connector(self) -> bool {
        self.traits().contains(CategoryTraits::LETTER_CONNECTOR)
    }

    /// True for `MidNum` and `MidNumLet`.
    #[inline]
    #[must_use]
    pub const fn is_numeric_connector(self) -> bool {
        self.traits().contains(CategoryTraits::NUMERIC_CONNECTOR)
    }

    /// True for `ALetter` and `Numeric`.
    #[inline]
    #[must_use]
    pub const fn is_alphanumeric(self) -> bool {
        self.traits().contains(CategoryTraits::ALPHANUMERIC)
    }

    /// True for `Extend` and `Format`.
    #[inline]
    #[must_use]
    pub const fn is_ignorable(self) -> bool {
        self.traits().contains(CategoryTraits::IGNORABLE)
    }

    /// True for `Newline`, `CR` and `LF`.
    #[inline]
    #[must_use]
    pub const fn is_line_break(self) -> bool {
        self.traits().contains(CategoryTraits::LINE_BREAK)
    }

    /// True for `ALetter`, `Numeric` and `Katakana`.
    #[inline]
    #[must_use]
    pub const fn is_extendable(self) -> bool {
        self.traits().contains(CategoryTraits::EXTENDABLE)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
