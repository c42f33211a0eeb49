//! Column type tags and their comparators.
//!
//! Every column declares how its cells are compared. Each type has exactly
//! one pure comparator over trimmed cell text, looked up through
//! [`ColumnType::comparator`].

use std::cmp::Ordering;
use std::fmt;
use std::iter::Peekable;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::error::ParseColumnTypeError;

/// Compares two trimmed cell texts in ascending order.
pub type Comparator = fn(&str, &str) -> Ordering;

/// Declared classification of a column's cell values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColumnType {
    /// Locale-aware text with numeric substrings compared as numbers.
    #[default]
    String,
    /// Floating-point numbers; unparsable text counts as `0`.
    Number,
    /// Calendar dates or date-times; unparsable text sorts first.
    Date,
}

impl ColumnType {
    pub fn comparator(self) -> Comparator {
        match self {
            ColumnType::String => compare_text,
            ColumnType::Number => compare_number,
            ColumnType::Date => compare_date,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColumnType::String => "string",
            ColumnType::Number => "number",
            ColumnType::Date => "date",
        }
    }
}

impl FromStr for ColumnType {
    type Err = ParseColumnTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "string" => Ok(ColumnType::String),
            "number" => Ok(ColumnType::Number),
            "date" => Ok(ColumnType::Date),
            _ => Err(ParseColumnTypeError(s.to_string())),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// Numbers
// -----------------------------------------------------------------------------

/// Parse cell text as a number.
///
/// Only finite values count. Empty and unparsable text yield `0`, and so do
/// `inf`, `infinity`, `NaN` and literals too large for an `f64`.
pub fn parse_number(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

pub fn compare_number(a: &str, b: &str) -> Ordering {
    parse_number(a)
        .partial_cmp(&parse_number(b))
        .unwrap_or(Ordering::Equal)
}

// -----------------------------------------------------------------------------
// Dates
// -----------------------------------------------------------------------------

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%Y.%m.%d."];

/// Parse cell text as a date-time. Dates without a time are taken at midnight.
///
/// Returns `None` for text that is not a recognised date, which orders before
/// every valid date.
pub fn parse_date(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

pub fn compare_date(a: &str, b: &str) -> Ordering {
    parse_date(a).cmp(&parse_date(b))
}

// -----------------------------------------------------------------------------
// Text
// -----------------------------------------------------------------------------

/// Natural, case- and accent-insensitive text ordering.
///
/// Runs of ASCII digits compare by numeric value, so `"Row 2"` sorts before
/// `"Row 10"`. Letters compare on their base form first: `"Ádám"` sorts with
/// the `a`s and `"Éva"` before `"Ferenc"`. Texts that are still equal fall
/// back to unaccented-before-accented, then lowercase-before-uppercase, and
/// finally a plain byte comparison, which keeps the order total.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    natural_cmp(base_letters(a), base_letters(b))
        .then_with(|| natural_cmp(accented_letters(a), accented_letters(b)))
        .then_with(|| case_cmp(a, b))
        .then_with(|| a.cmp(b))
}

/// Lowercase letters with diacritics stripped.
fn base_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Lowercase letters with diacritics kept as trailing combining marks.
fn accented_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd().flat_map(char::to_lowercase)
}

fn natural_cmp(a: impl Iterator<Item = char>, b: impl Iterator<Item = char>) -> Ordering {
    let mut left = a.peekable();
    let mut right = b.peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let ord = cmp_digit_runs(&take_digits(&mut left), &take_digits(&mut right));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(l), Some(r)) => {
                if l != r {
                    return l.cmp(&r);
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_digits(chars: &mut Peekable<impl Iterator<Item = char>>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        digits.push(c);
    }
    digits
}

/// Compare two digit runs by value without overflowing on long runs.
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn case_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(char::is_uppercase)
        .cmp(b.chars().map(char::is_uppercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(ty: ColumnType, values: &[&str]) -> Vec<String> {
        let mut values: Vec<&str> = values.to_vec();
        values.sort_by(|a, b| ty.comparator()(a, b));
        values.into_iter().map(String::from).collect()
    }

    #[test]
    fn test_parse_type_tags() {
        assert_eq!("number".parse::<ColumnType>(), Ok(ColumnType::Number));
        assert_eq!(" Date ".parse::<ColumnType>(), Ok(ColumnType::Date));
        assert_eq!("".parse::<ColumnType>(), Ok(ColumnType::String));
        assert_eq!(
            "currency".parse::<ColumnType>(),
            Err(ParseColumnTypeError("currency".to_string()))
        );
    }

    #[test]
    fn test_parse_number_fallbacks() {
        assert_eq!(parse_number(" 2.5 "), 2.5);
        assert_eq!(parse_number("-3"), -3.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("NaN"), 0.0);
        assert_eq!(parse_number("inf"), 0.0);
        assert_eq!(parse_number("-Infinity"), 0.0);
        assert_eq!(parse_number("1e400"), 0.0);
        assert_eq!(parse_number("1e3"), 1000.0);
    }

    #[test]
    fn test_number_ordering_infinity_counts_as_zero() {
        assert_eq!(
            sorted(ColumnType::Number, &["1", "5", "inf"]),
            vec!["inf", "1", "5"]
        );
    }

    #[test]
    fn test_number_ordering() {
        assert_eq!(
            sorted(ColumnType::Number, &["10", "2", "abc", "1"]),
            vec!["abc", "1", "2", "10"]
        );
    }

    #[test]
    fn test_parse_date_formats() {
        let midnight = NaiveDate::from_ymd_opt(2023, 1, 5)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(parse_date("2023-01-05"), Some(midnight));
        assert_eq!(parse_date("2023.01.05."), Some(midnight));
        assert_eq!(parse_date("2023/01/05"), Some(midnight));
        assert!(parse_date("2023-01-05 13:45").is_some());
        assert!(parse_date("2023-01-05T13:45:00Z").is_some());
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn test_parse_date_fractional_seconds() {
        let expected = NaiveDate::from_ymd_opt(2023, 1, 5)
            .unwrap()
            .and_hms_milli_opt(10, 0, 0, 500)
            .unwrap();
        assert_eq!(parse_date("2023-01-05T10:00:00.500"), Some(expected));
        assert_eq!(parse_date("2023-01-05 10:00:00.5"), Some(expected));
        assert_eq!(
            sorted(ColumnType::Date, &["2023-01-05T10:00:00.500", "2021-01-01"]),
            vec!["2021-01-01", "2023-01-05T10:00:00.500"]
        );
    }

    #[test]
    fn test_date_ordering() {
        assert_eq!(
            sorted(
                ColumnType::Date,
                &["2023-01-05", "2021-07-01", "2022-03-10"]
            ),
            vec!["2021-07-01", "2022-03-10", "2023-01-05"]
        );
    }

    #[test]
    fn test_invalid_date_sorts_first() {
        assert_eq!(
            sorted(ColumnType::Date, &["2020-01-01", "soon", "1999-12-31"]),
            vec!["soon", "1999-12-31", "2020-01-01"]
        );
    }

    #[test]
    fn test_text_numeric_aware() {
        assert_eq!(
            sorted(ColumnType::String, &["Row 10", "Row 2", "Row 1"]),
            vec!["Row 1", "Row 2", "Row 10"]
        );
    }

    #[test]
    fn test_text_case_insensitive_primary() {
        assert_eq!(
            sorted(ColumnType::String, &["beta", "Alpha", "alpha", "Gamma"]),
            vec!["alpha", "Alpha", "beta", "Gamma"]
        );
    }

    #[test]
    fn test_text_accents_sort_with_base_letter() {
        assert_eq!(
            sorted(
                ColumnType::String,
                &["Zoltán", "Ádám", "Béla", "Éva", "Ferenc"]
            ),
            vec!["Ádám", "Béla", "Éva", "Ferenc", "Zoltán"]
        );
    }

    #[test]
    fn test_text_unaccented_before_accented_on_tie() {
        assert_eq!(compare_text("Eva", "Éva"), Ordering::Less);
        assert_eq!(compare_text("eva", "Éva"), Ordering::Less);
        assert_eq!(compare_text("Éva", "Evb"), Ordering::Less);
        // Precomposed and decomposed forms only differ in the byte fallback.
        assert_ne!(compare_text("\u{e9}", "e\u{301}"), Ordering::Equal);
    }

    #[test]
    fn test_text_long_digit_runs() {
        assert_eq!(
            compare_text("id 99999999999999999999999", "id 100000000000000000000000"),
            Ordering::Less
        );
        assert_eq!(compare_text("v007", "v7"), Ordering::Greater);
    }
}
