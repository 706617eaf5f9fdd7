// SPDX-License-Identifier: MIT
//
// WordBreakProperty.txt reader.
//
// The Unicode Character Database ships Word_Break assignments as plain text:
//
//   # WordBreakProperty-15.1.0.txt
//   0041..005A    ; ALetter # L&  [26] LATIN CAPITAL LETTER A..Z
//   0027          ; Single_Quote # Po       APOSTROPHE
//
// Each data line is a code point or `first..last` range, a `;`, and a
// property value; everything after `#` is a comment. Values fold into the
// closed `WordCategory` set through its aliases. Values the boundary rules do
// not model (emoji modifiers, regional indicators) are skipped, so those
// characters take the table's fallback.

use crate::category::WordCategory;
use crate::table::{CategoryRange, PropertyTable, TableBuilder, TableError};

/// Word_Break values that are recognised but not modelled.
const SKIPPED_VALUES: &[&str] = &[
    "Other",
    "Regional_Indicator",
    "E_Base",
    "E_Modifier",
    "E_Base_GAZ",
    "Glue_After_Zwj",
];

const VERSION_PREFIX: &str = "WordBreakProperty-";

/// Why a property file could not be read. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ParseError {
    #[error("line {line}: expected `<code points> ; <value>`")]
    #[diagnostic(code(n_unicode::ucd::missing_separator))]
    MissingSeparator { line: usize },

    #[error("line {line}: `{text}` is not a valid code point")]
    #[diagnostic(
        code(n_unicode::ucd::invalid_code_point),
        help("code points are hexadecimal scalar values, e.g. `00E9`")
    )]
    InvalidCodePoint { line: usize, text: String },

    #[error("line {line}: range `{text}` ends before it starts")]
    #[diagnostic(code(n_unicode::ucd::invalid_range))]
    InvalidRange { line: usize, text: String },

    #[error("line {line}: unknown Word_Break value `{value}`")]
    #[diagnostic(code(n_unicode::ucd::unknown_property))]
    UnknownProperty { line: usize, value: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Table(#[from] TableError),
}

impl PropertyTable {
    /// Build a table from `WordBreakProperty.txt`-formatted text with the
    /// default fallback.
    ///
    /// ```
    /// use n_unicode::{PropertyTable, WordCategory};
    ///
    /// let table = PropertyTable::parse_ucd(
    ///     "# WordBreakProperty-15.1.0.txt\n\
    ///      0041..005A ; ALetter # LATIN CAPITAL LETTER A..Z\n\
    ///      0030..0039 ; Numeric\n",
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(table.version(), Some("15.1.0"));
    /// assert_eq!(table.category('Q'), WordCategory::ALetter);
    /// assert_eq!(table.category('4'), WordCategory::Numeric);
    /// ```
    ///
    /// # Errors
    ///
    /// A [`ParseError`] naming the first malformed line, or wrapping the
    /// [`TableError`] if the ranges overlap.
    ///
    /// Code points the file does not list, which includes TAB and most
    /// punctuation, take the built-in `Punctuation` and `Whitespace` classes
    /// (see [`TableBuilder::builtin_separators`]). Use [`TableBuilder::ucd`]
    /// directly for the file's assignments alone.
    pub fn parse_ucd(text: &str) -> Result<Self, ParseError> {
        Ok(TableBuilder::new().ucd(text)?.builtin_separators().build()?)
    }
}

impl TableBuilder {
    /// Add every assignment in `text` to this builder. A version header, if
    /// present, labels the table.
    ///
    /// # Errors
    ///
    /// A [`ParseError`] naming the first malformed line.
    pub fn ucd(self, text: &str) -> Result<Self, ParseError> {
        let mut ranges = Vec::new();
        let mut version = None;
        let mut skipped = 0usize;
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let (data, comment) = match raw.split_once('#') {
                Some((data, comment)) => (data.trim(), Some(comment.trim())),
                None => (raw.trim(), None),
            };

            if data.is_empty() {
                if version.is_none() {
                    version = comment.and_then(version_from_header);
                }
                continue;
            }

            let (points, value) = data
                .split_once(';')
                .ok_or(ParseError::MissingSeparator { line })?;
            let (points, value) = (points.trim(), value.trim());

            let category = match value.parse::<WordCategory>() {
                Ok(category) => category,
                Err(_) if SKIPPED_VALUES.contains(&value) => {
                    skipped += 1;
                    continue;
                }
                Err(_) => {
                    return Err(ParseError::UnknownProperty {
                        line,
                        value: value.to_owned(),
                    });
                }
            };

            let (first, last) = parse_points(points, line)?;
            ranges.push(CategoryRange::new(first, last, category));
        }

        tracing::debug!(
            message = "parsed word-break property data",
            entries = ranges.len(),
            skipped,
            version = ?version,
        );

        let builder = self.extend(ranges);
        Ok(match version {
            Some(v) => builder.version(v),
            None => builder,
        })
    }
}

fn version_from_header(comment: &str) -> Option<String> {
    comment
        .strip_prefix(VERSION_PREFIX)
        .and_then(|rest| rest.strip_suffix(".txt"))
        .map(str::to_owned)
}

fn parse_points(points: &str, line: usize) -> Result<(char, char), ParseError> {
    let (first, last) = match points.split_once("..") {
        Some((first, last)) => (parse_code_point(first, line)?, parse_code_point(last, line)?),
        None => {
            let ch = parse_code_point(points, line)?;
            (ch, ch)
        }
    };
    if first > last {
        return Err(ParseError::InvalidRange {
            line,
            text: points.to_owned(),
        });
    }
    Ok((first, last))
}

fn parse_code_point(text: &str, line: usize) -> Result<char, ParseError> {
    let text = text.trim();
    u32::from_str_radix(text, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| ParseError::InvalidCodePoint {
            line,
            text: text.to_owned(),
        })
}

// ─── Tests ───────────────────────────────────────────────────────────────────
