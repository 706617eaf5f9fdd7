//! Position index — find the span covering an offset.
//!
//! A [`PositionIndex`] is built once from a list of spans and then answers
//! "which span contains offset `n`?". When several spans contain the offset,
//! the one registered first wins. Offsets covered by no span answer `None`.
//!
//! Segmenter output is always sorted and disjoint, and for that shape lookup
//! is a binary search. Arbitrary input (overlapping or out of order) still
//! works; it falls back to a scan in registration order.

use crate::unit::{Spanned, Unit};

// ---------------------------------------------------------------------------
// PositionIndex
// ---------------------------------------------------------------------------

/// Immutable lookup from offset to covering span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionIndex<T = Unit> {
    spans: Vec<T>,
    /// Spans are well-formed, ascending, and pairwise non-overlapping.
    disjoint: bool,
}

impl<T> Default for PositionIndex<T> {
    fn default() -> Self {
        Self {
            spans: Vec::new(),
            disjoint: true,
        }
    }
}

impl<T: Spanned> PositionIndex<T> {
    /// Index `spans`, keeping their registration order.
    #[must_use]
    pub fn build<I>(spans: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let spans: Vec<T> = spans.into_iter().collect();
        let disjoint = is_sorted_disjoint(&spans);
        Self { spans, disjoint }
    }

    /// The first registered span containing `offset`.
    #[must_use]
    pub fn get(&self, offset: usize) -> Option<&T> {
        if self.disjoint {
            let at = self.spans.partition_point(|s| s.finish() < offset);
            self.spans.get(at).filter(|s| s.start() <= offset)
        } else {
            self.spans.iter().find(|s| s.contains_offset(offset))
        }
    }

    /// The first registered span satisfying `pred`.
    pub fn find<P>(&self, mut pred: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.spans.iter().find(|s| pred(*s))
    }

    /// Spans lying entirely within `[start, finish]`, in registration order.
    #[must_use]
    pub fn sublist(&self, start: usize, finish: usize) -> Vec<&T> {
        self.spans
            .iter()
            .filter(|s| s.start() >= start && s.finish() <= finish)
            .collect()
    }

    /// True when lookups take the binary-search path.
    #[inline]
    #[must_use]
    pub const fn is_sorted_disjoint(&self) -> bool {
        self.disjoint
    }
}

impl<T> PositionIndex<T> {
    /// Iterate over the spans in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.spans.iter()
    }

    /// Number of spans.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// True if nothing was registered.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.spans
    }
}

impl PositionIndex<Unit> {
    /// The same index with every unit moved `delta` offsets to the right.
    /// `None` if any unit would end past `usize::MAX`.
    #[must_use]
    pub fn translated(&self, delta: usize) -> Option<Self> {
        let spans = self
            .spans
            .iter()
            .map(|u| u.shifted(delta))
            .collect::<Option<Vec<Unit>>>()?;
        Some(Self::build(spans))
    }
}

impl<T: Spanned> FromIterator<T> for PositionIndex<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<'a, T> IntoIterator for &'a PositionIndex<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}

fn is_sorted_disjoint<T: Spanned>(spans: &[T]) -> bool {
    spans.iter().all(|s| s.start() <= s.finish())
        && spans.windows(2).all(|w| w[0].finish() < w[1].start())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn u(start: usize, finish: usize) -> Unit {
        Unit::new(start, finish)
    }

    fn cat_dog() -> PositionIndex {
        PositionIndex::build([u(0, 2), u(3, 3), u(4, 6)])
    }

    // -- Lookup -------------------------------------------------------------

    #[test]
    fn lookup_inside_units() {
        let index = cat_dog();
        assert!(index.is_sorted_disjoint());
        assert_eq!(index.get(0), Some(&u(0, 2)));
        assert_eq!(index.get(2), Some(&u(0, 2)));
        assert_eq!(index.get(3), Some(&u(3, 3)));
        assert_eq!(index.get(5), Some(&u(4, 6)));
        assert_eq!(index.get(6), Some(&u(4, 6)));
    }

    #[test]
    fn lookup_past_the_end() {
        let index = cat_dog();
        assert_eq!(index.get(7), None);
        assert_eq!(index.get(usize::MAX), None);
    }

    #[test]
    fn empty_index() {
        let index: PositionIndex = PositionIndex::default();
        assert!(index.is_empty());
        assert_eq!(index.get(0), None);
    }

    #[test]
    fn gaps_answer_none() {
        let index = PositionIndex::build([u(0, 1), u(5, 6)]);
        assert!(index.is_sorted_disjoint());
        assert_eq!(index.get(1), Some(&u(0, 1)));
        assert_eq!(index.get(3), None);
        assert_eq!(index.get(5), Some(&u(5, 6)));
    }

    #[test]
    fn overlapping_first_registered_wins() {
        let index = PositionIndex::build([u(0, 5), u(2, 8)]);
        assert!(!index.is_sorted_disjoint());
        assert_eq!(index.get(3), Some(&u(0, 5)));
        assert_eq!(index.get(7), Some(&u(2, 8)));
        assert_eq!(index.get(9), None);
    }

    #[test]
    fn unsorted_keeps_registration_order() {
        let index = PositionIndex::build([u(4, 6), u(0, 2)]);
        assert!(!index.is_sorted_disjoint());
        assert_eq!(index.get(1), Some(&u(0, 2)));
        assert_eq!(index.get(5), Some(&u(4, 6)));
        assert_eq!(index.as_slice(), &[u(4, 6), u(0, 2)]);
    }

    #[test]
    fn both_paths_agree_on_disjoint_input() {
        let spans = [u(0, 2), u(3, 3), u(4, 6), u(9, 12)];
        let fast = PositionIndex::build(spans);
        for offset in 0..15 {
            let slow = spans.iter().find(|s| s.contains(offset));
            assert_eq!(fast.get(offset), slow, "offset {offset}");
        }
    }

    // -- Queries ------------------------------------------------------------

    #[test]
    fn find_by_predicate() {
        let index = cat_dog();
        assert_eq!(index.find(|s| s.char_len() == 1), Some(&u(3, 3)));
        assert_eq!(index.find(|s| s.start > 10), None);
    }

    #[test]
    fn sublist_is_inclusive_and_whole_spans_only() {
        let index = cat_dog();
        assert_eq!(index.sublist(0, 3), vec![&u(0, 2), &u(3, 3)]);
        assert_eq!(index.sublist(1, 6), vec![&u(3, 3), &u(4, 6)]);
        assert_eq!(index.sublist(0, 1), Vec::<&Unit>::new());
    }

    #[test]
    fn translated_moves_every_unit() {
        let moved = cat_dog().translated(10).unwrap();
        assert!(moved.is_sorted_disjoint());
        assert_eq!(moved.as_slice(), &[u(10, 12), u(13, 13), u(14, 16)]);
        assert_eq!(moved.get(15), Some(&u(14, 16)));
        assert_eq!(moved.get(5), None);
    }

    #[test]
    fn translated_overflow_is_none() {
        assert_eq!(PositionIndex::build([u(0, 2)]).translated(usize::MAX), None);
        assert_eq!(cat_dog().translated(usize::MAX - 5), None);

        let edge = cat_dog().translated(usize::MAX - 6).unwrap();
        assert!(edge.is_sorted_disjoint());
        assert_eq!(edge.get(usize::MAX), Some(&u(usize::MAX - 2, usize::MAX)));
        assert_eq!(edge.get(usize::MAX - 3), Some(&u(usize::MAX - 3, usize::MAX - 3)));
    }

    #[test]
    fn translated_rechecks_ordering() {
        let overlapping = PositionIndex::build([u(0, 5), u(2, 8)]).translated(3).unwrap();
        assert!(!overlapping.is_sorted_disjoint());
        assert_eq!(overlapping.get(6), Some(&u(3, 8)));
    }

    #[test]
    fn custom_span_type() {
        #[derive(Debug, PartialEq)]
        struct Word {
            text: &'static str,
            at: usize,
        }

        impl Spanned for Word {
            fn start(&self) -> usize {
                self.at
            }
            fn finish(&self) -> usize {
                self.at + self.text.chars().count() - 1
            }
        }

        let index: PositionIndex<Word> = [Word { text: "cat", at: 0 }, Word { text: "dog", at: 4 }]
            .into_iter()
            .collect();
        assert_eq!(index.get(5).map(|w| w.text), Some("dog"));
        assert_eq!(index.get(3), None);
        assert_eq!(index.iter().count(), 2);
        assert_eq!((&index).into_iter().map(|w| w.at).collect::<Vec<_>>(), vec![0, 4]);
    }
}
