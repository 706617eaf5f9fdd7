//! Cross-module properties of segmentation: the units partition the buffer,
//! the index finds every offset, and nothing depends on call history.

use n_segment::{PositionIndex, Rule, Unit, evaluate, is_word_boundary, segment};
use n_unicode::{CharacterMap, PropertyTable, WordCategory, classify_str};
use pretty_assertions::assert_eq;
use strum::IntoEnumIterator;

const CORPUS: &[&str] = &[
    "",
    "a",
    " ",
    "cat dog",
    "Don't pay $3.50, ok?",
    "mail someone@example.com today",
    "one\r\ntwo\nthree\rfour",
    "1,000,000.25 and 3:30",
    "snake_case_name = 42;",
    "カタカナ and ひらがな",
    "naïve café — résumé",
    "e\u{301}t\u{e9} x\u{200d}y",
    "\u{5d0}\u{5d1}'\u{5d2} \u{644}\u{627}",
    "   \t\t  ",
    "!!??..,,;;",
    "@@@ a@ @b",
];

/// Assert the partition law and index totality for one map.
fn check(map: &CharacterMap, label: &str) {
    let units: Vec<Unit> = segment(map).collect();

    if map.is_empty() {
        assert!(units.is_empty(), "{label}: empty map produced units");
        return;
    }

    // Contiguous, ordered, non-overlapping, covering [0, len).
    assert_eq!(units.first().map(|u| u.start), Some(0), "{label}");
    assert_eq!(units.last().map(|u| u.finish), Some(map.len() - 1), "{label}");
    for pair in units.windows(2) {
        assert_eq!(pair[0].finish + 1, pair[1].start, "{label}: {pair:?}");
    }
    for unit in &units {
        assert!(unit.start <= unit.finish, "{label}: {unit:?}");
    }
    let covered: usize = units.iter().map(|u| u.char_len()).sum();
    assert_eq!(covered, map.len(), "{label}");

    // Every unit ends where the rule chain says a boundary is.
    for unit in &units {
        assert!(is_word_boundary(map, unit.finish), "{label}: {unit:?}");
        for inner in unit.start..unit.finish {
            assert!(!is_word_boundary(map, inner), "{label}: {unit:?} at {inner}");
        }
    }

    // Every offset is found, in the unit that covers it.
    let index = PositionIndex::build(units.iter().copied());
    assert!(index.is_sorted_disjoint(), "{label}");
    for offset in 0..map.len() {
        let found = index.get(offset).copied();
        assert!(found.is_some_and(|u| u.contains(offset)), "{label}: {offset}");
    }
    assert_eq!(index.get(map.len()), None, "{label}");
}

// -- Corpus -----------------------------------------------------------------

#[test]
fn corpus_partitions() {
    let table = PropertyTable::builtin();
    for text in CORPUS {
        check(&classify_str(&table, text), text);
    }
}

#[test]
fn corpus_is_deterministic() {
    let table = PropertyTable::builtin();
    for text in CORPUS {
        let map = classify_str(&table, text);
        let first: Vec<Unit> = segment(&map).collect();

        // Interleave unrelated queries; results must not change.
        let _ = is_word_boundary(&map, map.len() + 3);
        let _ = evaluate(&map, 0);
        let other = classify_str(&table, "unrelated buffer");
        let _ = segment(&other).count();

        let second: Vec<Unit> = segment(&map).collect();
        assert_eq!(first, second, "{text}");
    }
}

// -- Exhaustive small maps --------------------------------------------------

#[test]
fn every_pair_partitions() {
    for a in WordCategory::iter() {
        for b in WordCategory::iter() {
            check(&CharacterMap::from(vec![a, b]), &format!("[{a}, {b}]"));
        }
    }
}

#[test]
fn every_triple_partitions() {
    for a in WordCategory::iter() {
        for b in WordCategory::iter() {
            for c in WordCategory::iter() {
                check(&CharacterMap::from(vec![a, b, c]), &format!("[{a}, {b}, {c}]"));
            }
        }
    }
}

#[test]
fn last_position_always_breaks() {
    for a in WordCategory::iter() {
        for b in WordCategory::iter() {
            let map = CharacterMap::from(vec![a, b]);
            assert!(is_word_boundary(&map, 1), "[{a}, {b}]");
        }
    }
}

#[test]
fn out_of_range_never_breaks() {
    for a in WordCategory::iter() {
        let map = CharacterMap::from(vec![a]);
        for index in [1, 2, 100, usize::MAX] {
            assert_eq!(evaluate(&map, index).rule, Rule::OutOfRange, "[{a}] at {index}");
            assert!(!is_word_boundary(&map, index));
        }
    }
}

#[test]
fn empty_map_at_zero_is_end_of_text() {
    let map = CharacterMap::default();
    let decision = evaluate(&map, 0);
    assert_eq!(decision.rule, Rule::EndOfText);
    assert!(decision.boundary);
    assert!(!is_word_boundary(&map, 1));
}

// -- Scenarios --------------------------------------------------------------

#[test]
fn cat_dog_lookup() {
    let map = classify_str(&PropertyTable::builtin(), "cat dog");
    let index: PositionIndex = segment(&map).collect();
    assert_eq!(index.get(5), Some(&Unit::new(4, 6)));
    assert_eq!(index.get(3), Some(&Unit::new(3, 3)));
    assert_eq!(index.get(0), Some(&Unit::new(0, 2)));
    assert_eq!(index.get(7), None);
}

#[test]
fn stitched_buffers_translate() {
    let table = PropertyTable::builtin();
    let head = classify_str(&table, "cat ");
    let tail = classify_str(&table, "dog");
    let tail_index: PositionIndex = segment(&tail).collect();
    let moved = tail_index.translated(head.len()).unwrap();
    assert_eq!(moved.get(5), Some(&Unit::new(4, 6)));
}

// -- Tables parsed from property files --------------------------------------

/// The ASCII lines of WordBreakProperty-15.1.0.txt. TAB and most punctuation
/// are "Other" there and have no line.
const UCD_ASCII: &str = "\
# WordBreakProperty-15.1.0.txt
000A          ; LF # Cc       <control-000A>
000B..000C    ; Newline # Cc   [2] <control-000B>..<control-000C>
000D          ; CR # Cc       <control-000D>
0020          ; WSegSpace # Zs       SPACE
0022          ; Double_Quote # Po       QUOTATION MARK
0027          ; Single_Quote # Po       APOSTROPHE
002C          ; MidNum # Po       COMMA
002E          ; MidNumLet # Po       FULL STOP
0030..0039    ; Numeric # Nd  [10] DIGIT ZERO..DIGIT NINE
003A          ; MidLetter # Po       COLON
003B          ; MidNum # Po       SEMICOLON
0041..005A    ; ALetter # L&  [26] LATIN CAPITAL LETTER A..LATIN CAPITAL LETTER Z
005F          ; ExtendNumLet # Pc       LOW LINE
0061..007A    ; ALetter # L&  [26] LATIN SMALL LETTER A..LATIN SMALL LETTER Z
";

#[test]
fn parsed_table_splits_on_unlisted_punctuation() {
    let table = PropertyTable::parse_ucd(UCD_ASCII).unwrap();
    let units_of = |text: &str| segment(&classify_str(&table, text)).collect::<Vec<Unit>>();

    assert_eq!(
        units_of("stop!go"),
        vec![Unit::new(0, 3), Unit::new(4, 4), Unit::new(5, 6)]
    );
    assert_eq!(
        units_of("f(x)"),
        vec![Unit::single(0), Unit::single(1), Unit::single(2), Unit::single(3)]
    );
    assert_eq!(
        units_of("a\tb"),
        vec![Unit::single(0), Unit::single(1), Unit::single(2)]
    );
}

#[test]
fn parsed_and_builtin_tables_agree_on_ascii() {
    let parsed = PropertyTable::parse_ucd(UCD_ASCII).unwrap();
    let builtin = PropertyTable::builtin();
    let text = "Don't pay $3.50, ok? f(x) = a\tb; snake_case!\r\n";
    assert_eq!(
        segment(&classify_str(&parsed, text)).collect::<Vec<_>>(),
        segment(&classify_str(&builtin, text)).collect::<Vec<_>>()
    );
}
