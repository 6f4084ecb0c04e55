//! Cell values
//!
//! A [`CellValue`] is one cell of a [`Table`](super::Table). Missing cells are
//! represented by [`CellValue::Null`]; a NaN number is also treated as missing
//! so that values read from spreadsheets behave the same as explicit nulls.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// Formats used when parsing timestamp text from files and databases
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// A single cell of a table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Free text
    String(String),
    /// Floating point number
    Number(f64),
    /// Whole number
    Integer(i64),
    /// Boolean flag
    Boolean(bool),
    /// Date and time without timezone
    Timestamp(NaiveDateTime),
    /// Missing value
    Null,
}

impl CellValue {
    /// Returns true for missing cells (`Null` or a NaN number)
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Number(n) => n.is_nan(),
            _ => false,
        }
    }

    /// Canonical string representation of the value
    ///
    /// This is the text that gets digested by the `Hash` method and written
    /// to CSV exports. Missing values render as the empty string.
    ///
    /// ```
    /// use anonymo::domain::CellValue;
    ///
    /// assert_eq!(CellValue::Integer(42).canonical_string(), "42");
    /// assert_eq!(CellValue::Number(3.0).canonical_string(), "3.0");
    /// assert_eq!(CellValue::Boolean(true).canonical_string(), "True");
    /// assert_eq!(CellValue::Null.canonical_string(), "");
    /// ```
    pub fn canonical_string(&self) -> String {
        match self {
            CellValue::String(s) => s.clone(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Integer(i) => i.to_string(),
            CellValue::Boolean(true) => "True".to_string(),
            CellValue::Boolean(false) => "False".to_string(),
            CellValue::Timestamp(ts) => format_timestamp(ts),
            CellValue::Null => String::new(),
        }
    }

    /// Short type name used in logs and reports
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::String(_) => "string",
            CellValue::Number(_) => "number",
            CellValue::Integer(_) => "integer",
            CellValue::Boolean(_) => "boolean",
            CellValue::Timestamp(_) => "timestamp",
            CellValue::Null => "null",
        }
    }

    /// Infer a typed value from raw text
    ///
    /// Empty text and missing markers such as `NaN`, `NA` or `NULL` are
    /// missing; booleans, integers and floats are recognized; anything else,
    /// dates included, stays a string.
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Null;
        }

        match trimmed {
            "nan" | "NaN" | "NA" | "N/A" | "null" | "NULL" => return CellValue::Null,
            "true" | "True" | "TRUE" => return CellValue::Boolean(true),
            "false" | "False" | "FALSE" => return CellValue::Boolean(false),
            _ => {}
        }

        if let Ok(i) = trimmed.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if looks_numeric(trimmed) {
            if let Ok(f) = trimmed.parse::<f64>() {
                return CellValue::Number(f);
            }
        }

        CellValue::String(raw.to_string())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_string())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Integer(i)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(ts: NaiveDateTime) -> Self {
        CellValue::Timestamp(ts)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Null)
    }
}

/// Parse timestamp text in one of the accepted layouts, or a bare date
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            chrono::NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

// Integral floats keep a trailing ".0" so 3.0 and 3 hash differently.
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e16 {
        format!("{n:.1}")
    } else {
        n.to_string()
    }
}

fn format_timestamp(ts: &NaiveDateTime) -> String {
    if ts.and_utc().timestamp_subsec_nanos() == 0 {
        ts.format("%Y-%m-%d %H:%M:%S").to_string()
    } else {
        ts.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
    }
}

// Rejects words like "inf" or "infinity" that f64::from_str accepts.
fn looks_numeric(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        && text.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use test_case::test_case;

    #[test_case("", CellValue::Null ; "empty")]
    #[test_case("NaN", CellValue::Null ; "nan")]
    #[test_case("True", CellValue::Boolean(true) ; "python true")]
    #[test_case("false", CellValue::Boolean(false) ; "lower false")]
    #[test_case("42", CellValue::Integer(42) ; "integer")]
    #[test_case("-7", CellValue::Integer(-7) ; "negative integer")]
    #[test_case("2.5", CellValue::Number(2.5) ; "float")]
    #[test_case("1e3", CellValue::Number(1000.0) ; "exponent")]
    #[test_case("Alice", CellValue::String("Alice".to_string()) ; "text")]
    #[test_case("inf", CellValue::String("inf".to_string()) ; "inf stays text")]
    fn test_infer(raw: &str, expected: CellValue) {
        assert_eq!(CellValue::infer(raw), expected);
    }

    #[test_case("2024-01-15" ; "date")]
    #[test_case("2024-01-15 10:30:00" ; "datetime")]
    #[test_case("2024-01-15T10:30:00" ; "iso datetime")]
    fn test_infer_keeps_date_text(raw: &str) {
        assert_eq!(CellValue::infer(raw), CellValue::String(raw.to_string()));
    }

    #[test]
    fn test_parse_timestamp() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(parse_timestamp("2024-01-15 10:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-15T10:30:00"), Some(expected));
        assert!(parse_timestamp("Alice").is_none());
    }

    #[test]
    fn test_infer_keeps_untrimmed_text() {
        assert_eq!(
            CellValue::infer(" a@x.com "),
            CellValue::String(" a@x.com ".to_string())
        );
    }

    #[test]
    fn test_canonical_string() {
        assert_eq!(CellValue::from("a@x.com").canonical_string(), "a@x.com");
        assert_eq!(CellValue::Number(2.5).canonical_string(), "2.5");
        assert_eq!(CellValue::Number(3.0).canonical_string(), "3.0");
        assert_eq!(CellValue::Integer(3).canonical_string(), "3");
        assert_eq!(CellValue::Boolean(false).canonical_string(), "False");

        let ts = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(
            CellValue::Timestamp(ts).canonical_string(),
            "2024-01-15 10:30:00"
        );
    }

    #[test]
    fn test_missing() {
        assert!(CellValue::Null.is_missing());
        assert!(CellValue::Number(f64::NAN).is_missing());
        assert!(!CellValue::Number(0.0).is_missing());
        assert!(!CellValue::from("").is_missing());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(CellValue::from(None::<i64>), CellValue::Null);
        assert_eq!(CellValue::from(Some(5i64)), CellValue::Integer(5));
    }
}
