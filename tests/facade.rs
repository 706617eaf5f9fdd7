//! End-to-end behaviour of `WordIndex`: text in, units and words out.

use std::sync::Arc;

use n_words::{PropertyTable, Unit, WordCategory, WordIndex, WordOptions};
use pretty_assertions::assert_eq;
use ropey::Rope;

fn builtin() -> Arc<PropertyTable> {
    Arc::new(PropertyTable::builtin())
}

fn word_texts(idx: &WordIndex, options: &WordOptions) -> Vec<String> {
    idx.words(options)
        .into_iter()
        .filter_map(|u| idx.text_of(u))
        .collect()
}

// -- Lookup -----------------------------------------------------------------

#[test]
fn every_offset_maps_to_its_unit() {
    let idx = WordIndex::new(builtin(), "Don't pay $3.50, ok?");
    for offset in 0..idx.len() {
        let unit = idx.unit_at(offset).unwrap();
        assert!(unit.contains(offset), "{offset}");
    }
    assert_eq!(idx.unit_at(idx.len()), None);
}

#[test]
fn contraction_and_email_are_single_words() {
    let idx = WordIndex::new(builtin(), "don't mail me@host.org");
    assert_eq!(idx.word_at(3).as_deref(), Some("don't"));
    assert_eq!(idx.word_at(15).as_deref(), Some("me@host.org"));
}

#[test]
fn words_default_and_all() {
    let idx = WordIndex::new(builtin(), "one two\nthree!");
    assert_eq!(
        word_texts(&idx, &WordOptions::default()),
        vec!["one", "two", "three"]
    );
    assert_eq!(
        word_texts(&idx, &WordOptions::all()),
        vec!["one", " ", "two", "\n", "three", "!"]
    );
}

// -- Snapshots ----------------------------------------------------------------

#[test]
fn rope_and_str_build_the_same_index() {
    let text = "héllo wörld\r\n3,456.7 カタカナ";
    let from_str = WordIndex::new(builtin(), text);
    let from_rope = WordIndex::from_rope(builtin(), &Rope::from_str(text));
    assert_eq!(from_str.map(), from_rope.map());
    assert_eq!(from_str.units(), from_rope.units());
}

#[test]
fn rebuild_matches_fresh_build() {
    let table = builtin();
    let mut idx = WordIndex::new(Arc::clone(&table), "first text");
    idx.rebuild("second, longer text here");
    let fresh = WordIndex::new(table, "second, longer text here");
    assert_eq!(idx.units(), fresh.units());
    assert_eq!(idx.map(), fresh.map());
}

#[test]
fn table_is_shared_not_copied() {
    let table = builtin();
    let a = WordIndex::new(Arc::clone(&table), "a");
    let b = WordIndex::new(Arc::clone(&table), "b");
    assert!(Arc::ptr_eq(a.table(), b.table()));
}

// -- Custom tables ------------------------------------------------------------

#[test]
fn custom_table_changes_segmentation() {
    // Treat '-' as a letter so hyphenated words stay whole.
    let table = PropertyTable::builder()
        .extend(PropertyTable::builtin().ranges().iter().copied().filter(|r| !r.contains('-')))
        .single('-', WordCategory::ALetter)
        .build()
        .unwrap();
    let idx = WordIndex::new(Arc::new(table), "well-known fact");
    assert_eq!(idx.unit_at(0), Some(Unit::new(0, 9)));
    assert_eq!(idx.word_at(4).as_deref(), Some("well-known"));
}
