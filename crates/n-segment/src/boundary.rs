//! Word boundary rules — is there a break after position `index`?
//!
//! The decision reads a window of four categories around the gap between
//! `map[index]` and `map[index + 1]`:
//!
//! ```text
//!          prev    cur  │  next   next2
//!   map: [ i-1 ] [ i ]  │ [ i+1 ] [ i+2 ]
//!                       ▲
//!                 boundary after `index`?
//! ```
//!
//! Positions outside the map read as `None`. The rules are an ordered table;
//! the first rule whose predicate holds decides, and later rules never
//! override it. Order matters: punctuation and whitespace break before the
//! letter rules are consulted, and `Extend`/`Format` suppress a break before
//! the line-break rules get a chance to force one.
//!
//! | #  | Rule                       | Window                                   | Break |
//! |----|----------------------------|------------------------------------------|-------|
//! | 1  | [`Rule::OutOfRange`]       | `index` past the end, `index != 0`       | no    |
//! | 2  | [`Rule::Separator`]        | cur or next is `Punctuation`/`Whitespace`| yes   |
//! | 3  | [`Rule::EndOfText`]        | next absent                              | yes   |
//! | 4  | [`Rule::LetterLetter`]     | `ALetter` × `ALetter`                    | no    |
//! | 5a | [`Rule::LetterConnectorLeading`]  | `ALetter` × connector `ALetter`   | no    |
//! | 5b | [`Rule::LetterConnectorTrailing`] | `ALetter` connector × `ALetter`   | no    |
//! | 6  | [`Rule::Alphanumeric`]     | `(ALetter\|Numeric)` × `(ALetter\|Numeric)` | no |
//! | 7a | [`Rule::NumericConnectorTrailing`] | `Numeric` sep × `Numeric`        | no    |
//! | 7b | [`Rule::NumericConnectorLeading`]  | `Numeric` × sep `Numeric`        | no    |
//! | 8  | [`Rule::Ignorable`]        | prev, cur or next is `Extend`/`Format`   | no    |
//! | 9  | [`Rule::CrLf`]             | `CR` × `LF`                              | no    |
//! | 10a| [`Rule::LineBreakAfter`]   | cur is `Newline`/`CR`/`LF`               | yes   |
//! | 10b| [`Rule::LineBreakBefore`]  | next is `Newline`/`CR`/`LF`              | yes   |
//! | 11 | [`Rule::KatakanaKatakana`] | `Katakana` × `Katakana`                  | no    |
//! | 12a| [`Rule::ExtendNumLetAfter`]  | `(ALetter\|Numeric\|Katakana\|ExtendNumLet)` × `ExtendNumLet` | no |
//! | 12b| [`Rule::ExtendNumLetBefore`] | `ExtendNumLet` × `(ALetter\|Numeric\|Katakana)` | no |
//! | 13 | [`Rule::AtSign`]           | cur is `At`                              | no    |
//! | 14 | [`Rule::Fallthrough`]      | anything else                            | no    |
//!
//! Rule 14 means pairs no rule mentions (`Katakana` next to `ALetter`, a
//! letter followed by a lone `@`) stay joined. That is the observed behaviour
//! and is pinned by tests; do not "fix" it here without updating them.

use n_unicode::{CharacterMap, WordCategory};
use strum_macros::{Display, EnumCount, EnumIter};

// ---------------------------------------------------------------------------
// Window
// ---------------------------------------------------------------------------

/// The categories a rule may look at for one gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// False when `index` lies past the last position (and is not 0).
    pub in_range: bool,
    pub prev: Option<WordCategory>,
    pub cur: Option<WordCategory>,
    pub next: Option<WordCategory>,
    pub next2: Option<WordCategory>,
}

impl Window {
    /// Read the window for the gap after `index`.
    #[must_use]
    pub fn at(map: &CharacterMap, index: usize) -> Self {
        Self {
            in_range: index < map.len() || index == 0,
            prev: map.before(index, 1),
            cur: map.get(index),
            next: map.after(index, 1),
            next2: map.after(index, 2),
        }
    }
}

/// `Some(cat)` where `cat` satisfies `pred`.
#[inline]
fn has(slot: Option<WordCategory>, pred: fn(WordCategory) -> bool) -> bool {
    slot.is_some_and(pred)
}

#[inline]
fn is(slot: Option<WordCategory>, want: WordCategory) -> bool {
    slot == Some(want)
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Identifies which rule decided a gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
pub enum Rule {
    OutOfRange,
    Separator,
    EndOfText,
    LetterLetter,
    LetterConnectorLeading,
    LetterConnectorTrailing,
    Alphanumeric,
    NumericConnectorTrailing,
    NumericConnectorLeading,
    Ignorable,
    CrLf,
    LineBreakAfter,
    LineBreakBefore,
    KatakanaKatakana,
    ExtendNumLetAfter,
    ExtendNumLetBefore,
    AtSign,
    Fallthrough,
}

/// One row of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct RuleEntry {
    pub rule: Rule,
    pub applies: fn(&Window) -> bool,
    pub boundary: bool,
}

/// The rule chain, in evaluation order. The last entry always applies.
pub static RULES: &[RuleEntry] = &[
    RuleEntry {
        rule: Rule::OutOfRange,
        applies: |w| !w.in_range,
        boundary: false,
    },
    RuleEntry {
        rule: Rule::Separator,
        applies: |w| has(w.cur, WordCategory::is_separator) || has(w.next, WordCategory::is_separator),
        boundary: true,
    },
    RuleEntry {
        rule: Rule::EndOfText,
        applies: |w| w.next.is_none(),
        boundary: true,
    },
    RuleEntry {
        rule: Rule::LetterLetter,
        applies: |w| is(w.cur, WordCategory::ALetter) && is(w.next, WordCategory::ALetter),
        boundary: false,
    },
    RuleEntry {
        rule: Rule::LetterConnectorLeading,
        applies: |w| {
            is(w.cur, WordCategory::ALetter)
                && has(w.next, WordCategory::is_letter_connector)
                && is(w.next2, WordCategory::ALetter)
        },
        boundary: false,
    },
    RuleEntry {
        rule: Rule::LetterConnectorTrailing,
        applies: |w| {
            is(w.prev, WordCategory::ALetter)
                && has(w.cur, WordCategory::is_letter_connector)
                && is(w.next, WordCategory::ALetter)
        },
        boundary: false,
    },
    RuleEntry {
        rule: Rule::Alphanumeric,
        applies: |w| {
            has(w.cur, WordCategory::is_alphanumeric) && has(w.next, WordCategory::is_alphanumeric)
        },
        boundary: false,
    },
    RuleEntry {
        rule: Rule::NumericConnectorTrailing,
        applies: |w| {
            is(w.prev, WordCategory::Numeric)
                && has(w.cur, WordCategory::is_numeric_connector)
                && is(w.next, WordCategory::Numeric)
        },
        boundary: false,
    },
    RuleEntry {
        rule: Rule::NumericConnectorLeading,
        applies: |w| {
            is(w.cur, WordCategory::Numeric)
                && has(w.next, WordCategory::is_numeric_connector)
                && is(w.next2, WordCategory::Numeric)
        },
        boundary: false,
    },
    RuleEntry {
        rule: Rule::Ignorable,
        applies: |w| {
            has(w.prev, WordCategory::is_ignorable)
                || has(w.cur, WordCategory::is_ignorable)
                || has(w.next, WordCategory::is_ignorable)
        },
        boundary: false,
    },
    RuleEntry {
        rule: Rule::CrLf,
        applies: |w| is(w.cur, WordCategory::Cr) && is(w.next, WordCategory::Lf),
        boundary: false,
    },
    RuleEntry {
        rule: Rule::LineBreakAfter,
        applies: |w| has(w.cur, WordCategory::is_line_break),
        boundary: true,
    },
    RuleEntry {
        rule: Rule::LineBreakBefore,
        applies: |w| has(w.next, WordCategory::is_line_break),
        boundary: true,
    },
    RuleEntry {
        rule: Rule::KatakanaKatakana,
        applies: |w| is(w.cur, WordCategory::Katakana) && is(w.next, WordCategory::Katakana),
        boundary: false,
    },
    RuleEntry {
        rule: Rule::ExtendNumLetAfter,
        applies: |w| {
            is(w.next, WordCategory::ExtendNumLet)
                && (has(w.cur, WordCategory::is_extendable) || is(w.cur, WordCategory::ExtendNumLet))
        },
        boundary: false,
    },
    RuleEntry {
        rule: Rule::ExtendNumLetBefore,
        applies: |w| is(w.cur, WordCategory::ExtendNumLet) && has(w.next, WordCategory::is_extendable),
        boundary: false,
    },
    RuleEntry {
        rule: Rule::AtSign,
        applies: |w| is(w.cur, WordCategory::At),
        boundary: false,
    },
    RuleEntry {
        rule: Rule::Fallthrough,
        applies: |_| true,
        boundary: false,
    },
];

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// The outcome for one gap and the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub rule: Rule,
    pub boundary: bool,
}

const FALLTHROUGH: Decision = Decision {
    rule: Rule::Fallthrough,
    boundary: false,
};

/// Run the rule chain for the gap after `index`.
#[must_use]
pub fn evaluate(map: &CharacterMap, index: usize) -> Decision {
    let window = Window::at(map, index);
    RULES
        .iter()
        .find(|entry| (entry.applies)(&window))
        .map_or(FALLTHROUGH, |entry| Decision {
            rule: entry.rule,
            boundary: entry.boundary,
        })
}

/// Is there a word boundary between `map[index]` and `map[index + 1]`?
///
/// Total: every `index` gets an answer. Past the end it is `false`; at the
/// last position it is `true`.
///
/// ```
/// use n_segment::is_word_boundary;
/// use n_unicode::{CharacterMap, WordCategory::{Cr, Lf}};
///
/// let map = CharacterMap::from(vec![Cr, Lf]);
/// assert!(!is_word_boundary(&map, 0)); // CRLF stays together
/// assert!(is_word_boundary(&map, 1));  // end of text
/// assert!(!is_word_boundary(&map, 9)); // out of range
/// ```
#[inline]
#[must_use]
pub fn is_word_boundary(map: &CharacterMap, index: usize) -> bool {
    evaluate(map, index).boundary
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
