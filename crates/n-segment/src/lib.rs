//! n-segment — word segmentation over a classified buffer.
//!
//! Input is a [`CharacterMap`](n_unicode::CharacterMap) from `n-unicode`.
//! From it this crate answers three questions:
//!
//! - **Is there a boundary after offset `i`?** [`is_word_boundary`] runs the
//!   ordered rule chain in [`boundary`].
//! - **What are the units?** [`segment`] partitions the buffer into
//!   inclusive [`Unit`]s, and [`words`] keeps only the kinds you ask for.
//! - **Which unit covers offset `n`?** [`PositionIndex`] is built from the
//!   units once and answers lookups.
//!
//! Everything here is a pure function of the map. Nothing is cached between
//! calls, so a map (or an index built from it) can be shared freely across
//! threads.

pub mod boundary;
pub mod index;
pub mod segment;
pub mod unit;
pub mod words;

pub use boundary::{Decision, RULES, Rule, RuleEntry, Window, evaluate, is_word_boundary};
pub use index::PositionIndex;
pub use segment::{Segments, segment};
pub use unit::{Spanned, Unit};
pub use words::{UnitKind, WordOptions, unit_kind, words};
