// SPDX-License-Identifier: MIT
//
// PropertyTable — the character → WordCategory lookup.
//
// A table is a sorted list of disjoint inclusive code point ranges, each
// tagged with one category, plus a fallback category for characters no range
// covers. ASCII is resolved through a 128-entry array so the common case is a
// single index; everything else is a binary search over the ranges.
//
// Tables are immutable once built. The classifier takes one by reference, so
// sharing across threads is just `Arc<PropertyTable>`; there is no global
// table and no interior mutability.
//
//   TableBuilder ──build()──▶ PropertyTable ◀── builtin() / parse_ucd()
//        │                          │
//        └─ validates order ────────┴─ category(ch) → WordCategory

use std::cmp::Ordering;
use std::fmt;

use crate::category::WordCategory;

/// The category given to characters that no range covers, unless the
/// builder picks another.
///
/// `ALetter` keeps unknown scripts attached to adjacent letters instead of
/// splitting them into one-character units.
pub const DEFAULT_FALLBACK: WordCategory = WordCategory::ALetter;

// ─── CategoryRange ───────────────────────────────────────────────────────────

/// An inclusive run of code points that share one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryRange {
    pub first: char,
    pub last: char,
    pub category: WordCategory,
}

impl CategoryRange {
    /// Create a range. `first > last` is accepted here and rejected by
    /// [`TableBuilder::build`].
    #[inline]
    #[must_use]
    pub const fn new(first: char, last: char, category: WordCategory) -> Self {
        Self {
            first,
            last,
            category,
        }
    }

    /// A range holding one code point.
    #[inline]
    #[must_use]
    pub const fn single(ch: char, category: WordCategory) -> Self {
        Self::new(ch, ch, category)
    }

    /// True if `ch` lies within this range.
    #[inline]
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.first <= ch && ch <= self.last
    }

    fn cmp_char(&self, ch: char) -> Ordering {
        if self.last < ch {
            Ordering::Less
        } else if self.first > ch {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl fmt::Display for CategoryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.first == self.last {
            write!(f, "U+{:04X} {}", u32::from(self.first), self.category)
        } else {
            write!(
                f,
                "U+{:04X}..U+{:04X} {}",
                u32::from(self.first),
                u32::from(self.last),
                self.category
            )
        }
    }
}

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Why a set of ranges could not become a [`PropertyTable`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum TableError {
    #[error("range U+{first:04X}..U+{last:04X} ends before it starts")]
    #[diagnostic(
        code(n_unicode::table::inverted_range),
        help("write the lower code point first")
    )]
    InvertedRange { first: u32, last: u32 },

    #[error("ranges `{first}` and `{second}` overlap")]
    #[diagnostic(
        code(n_unicode::table::overlapping_ranges),
        help("every code point may belong to at most one category")
    )]
    OverlappingRanges {
        first: CategoryRange,
        second: CategoryRange,
    },
}

// ─── PropertyTable ───────────────────────────────────────────────────────────

/// An immutable character classification table.
#[derive(Clone)]
pub struct PropertyTable {
    /// Sorted by `first`, pairwise disjoint, adjacent equal runs merged.
    ranges: Vec<CategoryRange>,
    ascii: [WordCategory; 128],
    fallback: WordCategory,
    version: Option<String>,
}

impl PropertyTable {
    /// Start building a table.
    #[must_use]
    pub fn builder() -> TableBuilder {
        TableBuilder::new()
    }

    /// Assemble a table from ranges that are already known to be valid.
    /// Sorting is still applied; overlap is not checked.
    pub(crate) fn from_trusted(
        mut ranges: Vec<CategoryRange>,
        fallback: WordCategory,
        version: Option<String>,
    ) -> Self {
        ranges.sort_unstable_by_key(|r| r.first);
        let ranges = merge_adjacent(ranges);

        let mut ascii = [fallback; 128];
        for (slot, ch) in ascii.iter_mut().zip((0u8..128).map(char::from)) {
            *slot = search(&ranges, ch).unwrap_or(fallback);
        }

        Self {
            ranges,
            ascii,
            fallback,
            version,
        }
    }

    /// The category of `ch`, or the fallback if no range covers it.
    #[inline]
    #[must_use]
    pub fn category(&self, ch: char) -> WordCategory {
        if ch.is_ascii() {
            return self.ascii[ch as usize];
        }
        search(&self.ranges, ch).unwrap_or(self.fallback)
    }

    /// The category of `ch` if a range covers it explicitly.
    #[must_use]
    pub fn lookup(&self, ch: char) -> Option<WordCategory> {
        search(&self.ranges, ch)
    }

    /// Category used for characters with no entry.
    #[inline]
    #[must_use]
    pub const fn fallback(&self) -> WordCategory {
        self.fallback
    }

    /// Data version label, e.g. `"15.1.0"`, when the source declared one.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// The normalized ranges, sorted by first code point.
    #[must_use]
    pub fn ranges(&self) -> &[CategoryRange] {
        &self.ranges
    }

    /// Number of (merged) ranges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// True if no character has an explicit entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl fmt::Debug for PropertyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyTable")
            .field("ranges", &self.ranges.len())
            .field("fallback", &self.fallback)
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

fn search(ranges: &[CategoryRange], ch: char) -> Option<WordCategory> {
    ranges
        .binary_search_by(|r| r.cmp_char(ch))
        .ok()
        .map(|i| ranges[i].category)
}

/// Join neighbours like `U+0041..U+004D` + `U+004E..U+005A` of the same
/// category. Input must be sorted and disjoint.
fn merge_adjacent(ranges: Vec<CategoryRange>) -> Vec<CategoryRange> {
    let mut merged: Vec<CategoryRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        if let Some(prev) = merged.last_mut() {
            if prev.category == range.category
                && u32::from(prev.last).checked_add(1) == Some(u32::from(range.first))
            {
                prev.last = range.last;
                continue;
            }
        }
        merged.push(range);
    }
    merged
}

// ─── TableBuilder ────────────────────────────────────────────────────────────

/// Collects ranges and settings, then validates them into a
/// [`PropertyTable`].
///
/// ```
/// use n_unicode::{PropertyTable, WordCategory};
///
/// let table = PropertyTable::builder()
///     .range('a', 'z', WordCategory::ALetter)
///     .single(' ', WordCategory::Whitespace)
///     .fallback(WordCategory::Punctuation)
///     .build()
///     .unwrap();
///
/// assert_eq!(table.category('q'), WordCategory::ALetter);
/// assert_eq!(table.category('Q'), WordCategory::Punctuation);
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct TableBuilder {
    ranges: Vec<CategoryRange>,
    fallback: WordCategory,
    version: Option<String>,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuilder {
    /// An empty builder with [`DEFAULT_FALLBACK`].
    pub const fn new() -> Self {
        Self {
            ranges: Vec::new(),
            fallback: DEFAULT_FALLBACK,
            version: None,
        }
    }

    /// Add an inclusive range.
    pub fn range(mut self, first: char, last: char, category: WordCategory) -> Self {
        self.ranges.push(CategoryRange::new(first, last, category));
        self
    }

    /// Add a single code point.
    pub fn single(self, ch: char, category: WordCategory) -> Self {
        self.range(ch, ch, category)
    }

    /// Add many ranges at once.
    pub fn extend(mut self, ranges: impl IntoIterator<Item = CategoryRange>) -> Self {
        self.ranges.extend(ranges);
        self
    }

    /// Category for characters with no entry.
    pub fn fallback(mut self, category: WordCategory) -> Self {
        self.fallback = category;
        self
    }

    /// Ranges collected so far, unvalidated and in insertion order.
    pub(crate) fn pending(&self) -> &[CategoryRange] {
        &self.ranges
    }

    /// Label the table with its data version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Validate and freeze the table.
    ///
    /// # Errors
    ///
    /// [`TableError::InvertedRange`] if a range ends before it starts,
    /// [`TableError::OverlappingRanges`] if two ranges share a code point.
    pub fn build(self) -> Result<PropertyTable, TableError> {
        let Self {
            mut ranges,
            fallback,
            version,
        } = self;

        if let Some(bad) = ranges.iter().find(|r| r.first > r.last) {
            return Err(TableError::InvertedRange {
                first: u32::from(bad.first),
                last: u32::from(bad.last),
            });
        }

        ranges.sort_unstable_by_key(|r| r.first);
        if let Some(pair) = ranges.windows(2).find(|w| w[0].last >= w[1].first) {
            return Err(TableError::OverlappingRanges {
                first: pair[0],
                second: pair[1],
            });
        }

        let table = PropertyTable::from_trusted(ranges, fallback, version);
        tracing::debug!(
            message = "built word-break property table",
            ranges = table.len(),
            fallback = %table.fallback(),
            version = ?table.version(),
        );
        Ok(table)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
