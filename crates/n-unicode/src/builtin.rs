// SPDX-License-Identifier: MIT
//
// Built-in word-break data.
//
// A compact subset of WordBreakProperty.txt (UCD 15.1.0) covering the
// scripts an editor meets daily: Latin, Greek, Cyrillic, Armenian, Hebrew,
// Arabic, Devanagari, Georgian, Hangul, Kana and the fullwidth forms, plus
// the common punctuation, whitespace and line-break characters that UAX #29
// leaves as "Other" but the editor wants to break on.
//
// Anything not listed here falls back to the table's fallback category. For
// complete coverage, load the full property file with
// `PropertyTable::parse_ucd`. The property file leaves TAB, the controls and
// most punctuation as "Other", so a parsed table borrows the `Punctuation`
// and `Whitespace` ranges below for every code point the file does not list
// (see `TableBuilder::builtin_separators`).
//
// Ranges are grouped by category for review; `PropertyTable::from_trusted`
// sorts them. The `builtin_is_valid` test pushes them through the validating
// builder so an accidental overlap fails CI instead of shadowing a lookup.

use crate::category::WordCategory;
use crate::table::{CategoryRange, DEFAULT_FALLBACK, PropertyTable, TableBuilder};

/// Version of the UCD release the built-in ranges were taken from.
pub const BUILTIN_VERSION: &str = "15.1.0";

const PU: WordCategory = WordCategory::Punctuation;
const WS: WordCategory = WordCategory::Whitespace;
const AL: WordCategory = WordCategory::ALetter;
const ML: WordCategory = WordCategory::MidLetter;
const MNL: WordCategory = WordCategory::MidNumLet;
const MN: WordCategory = WordCategory::MidNum;
const AT: WordCategory = WordCategory::At;
const NU: WordCategory = WordCategory::Numeric;
const EX: WordCategory = WordCategory::Extend;
const FO: WordCategory = WordCategory::Format;
const NL: WordCategory = WordCategory::Newline;
const CR: WordCategory = WordCategory::Cr;
const LF: WordCategory = WordCategory::Lf;
const KA: WordCategory = WordCategory::Katakana;
const ENL: WordCategory = WordCategory::ExtendNumLet;

const fn r(first: char, last: char, category: WordCategory) -> CategoryRange {
    CategoryRange::new(first, last, category)
}

const fn s(ch: char, category: WordCategory) -> CategoryRange {
    CategoryRange::single(ch, category)
}

/// The built-in ranges, grouped by category.
pub static BUILTIN_RANGES: &[CategoryRange] = &[
    // ── Line breaks ──
    s('\n', LF),
    s('\r', CR),
    r('\u{000B}', '\u{000C}', NL),
    s('\u{0085}', NL),
    r('\u{2028}', '\u{2029}', NL),
    // ── Whitespace ──
    s('\t', WS),
    s(' ', WS),
    s('\u{00A0}', WS),
    s('\u{1680}', WS),
    r('\u{2000}', '\u{200A}', WS),
    s('\u{202F}', WS),
    s('\u{205F}', WS),
    s('\u{3000}', WS),
    // ── Controls ──
    r('\u{0000}', '\u{0008}', PU),
    r('\u{000E}', '\u{001F}', PU),
    s('\u{007F}', PU),
    r('\u{0080}', '\u{0084}', PU),
    r('\u{0086}', '\u{009F}', PU),
    // ── Punctuation and symbols ──
    r('!', '&', PU),
    r('(', '+', PU),
    s('-', PU),
    s('/', PU),
    r('<', '?', PU),
    r('[', '^', PU),
    s('`', PU),
    r('{', '~', PU),
    r('\u{00A1}', '\u{00A9}', PU),
    r('\u{00AB}', '\u{00AC}', PU),
    r('\u{00AE}', '\u{00B4}', PU),
    s('\u{00B6}', PU),
    r('\u{00B8}', '\u{00B9}', PU),
    r('\u{00BB}', '\u{00BF}', PU),
    s('\u{00D7}', PU),
    s('\u{00F7}', PU),
    s('\u{05BE}', PU),
    s('\u{061B}', PU),
    r('\u{061D}', '\u{061F}', PU),
    s('\u{066A}', PU),
    s('\u{06D4}', PU),
    r('\u{0964}', '\u{0965}', PU),
    r('\u{2010}', '\u{2017}', PU),
    r('\u{201A}', '\u{2023}', PU),
    r('\u{2025}', '\u{2026}', PU),
    r('\u{2030}', '\u{203E}', PU),
    r('\u{2041}', '\u{2043}', PU),
    r('\u{2045}', '\u{2053}', PU),
    r('\u{2055}', '\u{205E}', PU),
    r('\u{20A0}', '\u{20C0}', PU),
    r('\u{2190}', '\u{21FF}', PU),
    r('\u{2200}', '\u{22FF}', PU),
    r('\u{2500}', '\u{27BF}', PU),
    r('\u{3001}', '\u{3004}', PU),
    r('\u{3008}', '\u{3011}', PU),
    r('\u{3014}', '\u{301F}', PU),
    r('\u{FF01}', '\u{FF06}', PU),
    r('\u{FF08}', '\u{FF0B}', PU),
    s('\u{FF0D}', PU),
    s('\u{FF0F}', PU),
    r('\u{FF1C}', '\u{FF20}', PU),
    r('\u{FF3B}', '\u{FF3E}', PU),
    s('\u{FF40}', PU),
    r('\u{FF5B}', '\u{FF65}', PU),
    // ── At ──
    s('@', AT),
    // ── MidNumLet ──
    s('\'', MNL),
    s('.', MNL),
    r('\u{2018}', '\u{2019}', MNL),
    s('\u{2024}', MNL),
    s('\u{FE52}', MNL),
    s('\u{FF07}', MNL),
    s('\u{FF0E}', MNL),
    // ── MidLetter ──
    s(':', ML),
    s('\u{00B7}', ML),
    s('\u{0387}', ML),
    s('\u{05F4}', ML),
    s('\u{2027}', ML),
    s('\u{FE13}', ML),
    s('\u{FE55}', ML),
    s('\u{FF1A}', ML),
    // ── MidNum ──
    s(',', MN),
    s(';', MN),
    s('\u{037E}', MN),
    s('\u{0589}', MN),
    r('\u{060C}', '\u{060D}', MN),
    s('\u{066C}', MN),
    s('\u{07F8}', MN),
    s('\u{2044}', MN),
    s('\u{FE10}', MN),
    s('\u{FE14}', MN),
    s('\u{FE50}', MN),
    s('\u{FE54}', MN),
    s('\u{FF0C}', MN),
    s('\u{FF1B}', MN),
    // ── Numeric ──
    r('0', '9', NU),
    r('\u{0660}', '\u{0669}', NU),
    s('\u{066B}', NU),
    r('\u{06F0}', '\u{06F9}', NU),
    r('\u{07C0}', '\u{07C9}', NU),
    r('\u{0966}', '\u{096F}', NU),
    r('\u{09E6}', '\u{09EF}', NU),
    r('\u{0A66}', '\u{0A6F}', NU),
    r('\u{0AE6}', '\u{0AEF}', NU),
    r('\u{0B66}', '\u{0B6F}', NU),
    r('\u{0BE6}', '\u{0BEF}', NU),
    r('\u{0C66}', '\u{0C6F}', NU),
    r('\u{0CE6}', '\u{0CEF}', NU),
    r('\u{0D66}', '\u{0D6F}', NU),
    r('\u{0E50}', '\u{0E59}', NU),
    r('\u{0ED0}', '\u{0ED9}', NU),
    r('\u{0F20}', '\u{0F29}', NU),
    r('\u{1040}', '\u{1049}', NU),
    r('\u{17E0}', '\u{17E9}', NU),
    r('\u{1810}', '\u{1819}', NU),
    r('\u{FF10}', '\u{FF19}', NU),
    r('\u{1D7CE}', '\u{1D7FF}', NU),
    // ── ExtendNumLet ──
    s('_', ENL),
    r('\u{203F}', '\u{2040}', ENL),
    s('\u{2054}', ENL),
    r('\u{FE33}', '\u{FE34}', ENL),
    r('\u{FE4D}', '\u{FE4F}', ENL),
    s('\u{FF3F}', ENL),
    // ── Katakana ──
    r('\u{3031}', '\u{3035}', KA),
    r('\u{309B}', '\u{309C}', KA),
    r('\u{30A0}', '\u{30FA}', KA),
    r('\u{30FC}', '\u{30FF}', KA),
    r('\u{31F0}', '\u{31FF}', KA),
    r('\u{32D0}', '\u{32FE}', KA),
    r('\u{3300}', '\u{3357}', KA),
    r('\u{FF66}', '\u{FF9D}', KA),
    // ── Format ──
    s('\u{00AD}', FO),
    r('\u{0600}', '\u{0605}', FO),
    s('\u{061C}', FO),
    s('\u{06DD}', FO),
    s('\u{070F}', FO),
    s('\u{180E}', FO),
    r('\u{200E}', '\u{200F}', FO),
    r('\u{202A}', '\u{202E}', FO),
    r('\u{2060}', '\u{2064}', FO),
    r('\u{2066}', '\u{206F}', FO),
    s('\u{FEFF}', FO),
    r('\u{FFF9}', '\u{FFFB}', FO),
    // ── Extend ──
    r('\u{0300}', '\u{036F}', EX),
    r('\u{0483}', '\u{0489}', EX),
    r('\u{0591}', '\u{05BD}', EX),
    s('\u{05BF}', EX),
    r('\u{05C1}', '\u{05C2}', EX),
    r('\u{05C4}', '\u{05C5}', EX),
    s('\u{05C7}', EX),
    r('\u{0610}', '\u{061A}', EX),
    r('\u{064B}', '\u{065F}', EX),
    s('\u{0670}', EX),
    r('\u{06D6}', '\u{06DC}', EX),
    r('\u{06DF}', '\u{06E4}', EX),
    r('\u{0900}', '\u{0903}', EX),
    r('\u{093A}', '\u{093C}', EX),
    r('\u{093E}', '\u{094F}', EX),
    r('\u{0951}', '\u{0957}', EX),
    r('\u{0962}', '\u{0963}', EX),
    r('\u{200C}', '\u{200D}', EX),
    r('\u{20D0}', '\u{20F0}', EX),
    r('\u{302A}', '\u{302F}', EX),
    r('\u{3099}', '\u{309A}', EX),
    r('\u{FE00}', '\u{FE0F}', EX),
    r('\u{FE20}', '\u{FE2F}', EX),
    r('\u{FF9E}', '\u{FF9F}', EX),
    r('\u{1F3FB}', '\u{1F3FF}', EX),
    r('\u{E0020}', '\u{E007F}', EX),
    r('\u{E0100}', '\u{E01EF}', EX),
    // ── ALetter ──
    r('A', 'Z', AL),
    r('a', 'z', AL),
    s('\u{00AA}', AL),
    s('\u{00B5}', AL),
    s('\u{00BA}', AL),
    r('\u{00C0}', '\u{00D6}', AL),
    r('\u{00D8}', '\u{00F6}', AL),
    r('\u{00F8}', '\u{02D7}', AL),
    r('\u{02DE}', '\u{02FF}', AL),
    r('\u{0370}', '\u{0374}', AL),
    r('\u{0376}', '\u{0377}', AL),
    r('\u{037A}', '\u{037D}', AL),
    s('\u{037F}', AL),
    s('\u{0386}', AL),
    r('\u{0388}', '\u{038A}', AL),
    s('\u{038C}', AL),
    r('\u{038E}', '\u{03A1}', AL),
    r('\u{03A3}', '\u{03F5}', AL),
    r('\u{03F7}', '\u{0481}', AL),
    r('\u{048A}', '\u{052F}', AL),
    r('\u{0531}', '\u{0556}', AL),
    r('\u{0559}', '\u{055C}', AL),
    r('\u{0560}', '\u{0588}', AL),
    r('\u{05D0}', '\u{05EA}', AL),
    r('\u{05EF}', '\u{05F3}', AL),
    r('\u{0620}', '\u{064A}', AL),
    r('\u{066E}', '\u{066F}', AL),
    r('\u{0671}', '\u{06D3}', AL),
    s('\u{06D5}', AL),
    r('\u{06E5}', '\u{06E6}', AL),
    r('\u{0904}', '\u{0939}', AL),
    s('\u{093D}', AL),
    s('\u{0950}', AL),
    r('\u{0958}', '\u{0961}', AL),
    r('\u{0971}', '\u{0980}', AL),
    r('\u{10A0}', '\u{10C5}', AL),
    r('\u{10D0}', '\u{10FA}', AL),
    r('\u{10FC}', '\u{10FF}', AL),
    r('\u{1100}', '\u{11FF}', AL),
    r('\u{1E00}', '\u{1F15}', AL),
    r('\u{1F18}', '\u{1F1D}', AL),
    r('\u{1F20}', '\u{1F45}', AL),
    r('\u{1F48}', '\u{1F4D}', AL),
    r('\u{1F50}', '\u{1F57}', AL),
    r('\u{1F60}', '\u{1F7D}', AL),
    r('\u{1F80}', '\u{1FB4}', AL),
    r('\u{1FB6}', '\u{1FBC}', AL),
    s('\u{2071}', AL),
    s('\u{207F}', AL),
    r('\u{2090}', '\u{209C}', AL),
    s('\u{2102}', AL),
    s('\u{2107}', AL),
    r('\u{210A}', '\u{2113}', AL),
    s('\u{2115}', AL),
    r('\u{2119}', '\u{211D}', AL),
    s('\u{2124}', AL),
    s('\u{2126}', AL),
    s('\u{2128}', AL),
    r('\u{212A}', '\u{212D}', AL),
    r('\u{212F}', '\u{2139}', AL),
    r('\u{2C00}', '\u{2CE4}', AL),
    r('\u{2D00}', '\u{2D25}', AL),
    r('\u{A640}', '\u{A66E}', AL),
    r('\u{A722}', '\u{A788}', AL),
    r('\u{AC00}', '\u{D7A3}', AL),
    r('\u{FB00}', '\u{FB06}', AL),
    s('\u{FB1D}', AL),
    r('\u{FB1F}', '\u{FB28}', AL),
    r('\u{FF21}', '\u{FF3A}', AL),
    r('\u{FF41}', '\u{FF5A}', AL),
    r('\u{FFA0}', '\u{FFBE}', AL),
    r('\u{10400}', '\u{1044F}', AL),
    r('\u{1D400}', '\u{1D6A5}', AL),
];

impl PropertyTable {
    /// The built-in table with the default fallback.
    ///
    /// Cheap enough to build per document, but callers that classify many
    /// buffers should build it once and share it behind an `Arc`.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_trusted(
            BUILTIN_RANGES.to_vec(),
            DEFAULT_FALLBACK,
            Some(BUILTIN_VERSION.to_owned()),
        )
    }
}

impl TableBuilder {
    /// Add the built-in `Punctuation` and `Whitespace` ranges for every code
    /// point no range in this builder covers yet. Ranges already present
    /// always win.
    pub fn builtin_separators(self) -> Self {
        let mut covered = self.pending().to_vec();
        covered.sort_unstable_by_key(|r| r.first);

        let seeds: Vec<CategoryRange> = BUILTIN_RANGES
            .iter()
            .filter(|r| r.category.is_separator())
            .flat_map(|r| uncovered(*r, &covered))
            .collect();

        tracing::debug!(
            message = "seeded built-in separators",
            ranges = seeds.len(),
        );
        self.extend(seeds)
    }
}

/// The parts of `range` that no entry of `covered` (sorted by `first`)
/// touches.
fn uncovered(range: CategoryRange, covered: &[CategoryRange]) -> Vec<CategoryRange> {
    let end = u32::from(range.last);
    let mut next = u32::from(range.first);
    let mut parts = Vec::new();

    for c in covered
        .iter()
        .filter(|c| c.last >= range.first && c.first <= range.last)
    {
        let (first, last) = (u32::from(c.first), u32::from(c.last));
        if first > next {
            parts.extend(piece(next, first - 1, range.category));
        }
        next = next.max(last + 1);
        if next > end {
            return parts;
        }
    }
    if next <= end {
        parts.extend(piece(next, end, range.category));
    }
    parts
}

fn piece(first: u32, last: u32, category: WordCategory) -> Option<CategoryRange> {
    Some(CategoryRange::new(
        char::from_u32(first)?,
        char::from_u32(last)?,
        category,
    ))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
