// SPDX-License-Identifier: MIT
//
// n-unicode — Word_Break character classification for n-words.
//
// Turns a buffer of chars into a `CharacterMap`: one `WordCategory` per
// position, looked up in an immutable `PropertyTable`. The table is an
// explicit value, built from the compiled-in data, from a builder, or from a
// WordBreakProperty.txt file, and handed to the classifier by reference.
// Nothing in this crate holds global state.
//
//   text ──▶ classify(&table, chars) ──▶ CharacterMap ──▶ n-segment
//
// This crate knows nothing about boundaries. The rule chain that reads the
// map lives in n-segment.

pub mod builtin;
pub mod category;
pub mod classify;
pub mod table;
pub mod ucd;

pub use builtin::BUILTIN_VERSION;
pub use category::{CategoryTraits, WordCategory};
pub use classify::{CharacterMap, classify, classify_rope, classify_str};
pub use table::{CategoryRange, DEFAULT_FALLBACK, PropertyTable, TableBuilder, TableError};
pub use ucd::ParseError;
