//! PostgreSQL value mapping
//!
//! Rows are read over the simple query protocol, so every non-NULL value
//! arrives as text. The declared `information_schema` data type decides
//! how that text becomes a [`CellValue`].

use crate::domain::value::parse_timestamp;
use crate::domain::CellValue;
use chrono::DateTime;

/// Column type families Anonymo distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PgColumnType {
    /// `boolean`
    Boolean,
    /// `smallint`, `integer`, `bigint`
    Integer,
    /// `real`, `double precision`, `numeric`
    Float,
    /// `timestamp`, `date`
    Timestamp,
    /// `timestamp with time zone`
    TimestampTz,
    /// Anything else, kept as text
    Text,
}

impl PgColumnType {
    /// Classify an `information_schema.columns.data_type` value
    pub fn from_data_type(data_type: &str) -> Self {
        match data_type {
            "boolean" => Self::Boolean,
            "smallint" | "integer" | "bigint" => Self::Integer,
            "real" | "double precision" | "numeric" => Self::Float,
            "timestamp without time zone" | "date" => Self::Timestamp,
            "timestamp with time zone" => Self::TimestampTz,
            _ => Self::Text,
        }
    }

    /// Convert the text form of a value of this type
    ///
    /// Text that does not parse as the declared type is kept as a string.
    pub fn to_cell(self, text: Option<&str>) -> CellValue {
        let Some(text) = text else {
            return CellValue::Null;
        };

        let parsed = match self {
            Self::Boolean => match text {
                "t" | "true" => Some(CellValue::Boolean(true)),
                "f" | "false" => Some(CellValue::Boolean(false)),
                _ => None,
            },
            Self::Integer => text.parse::<i64>().ok().map(CellValue::Integer),
            Self::Float => text.parse::<f64>().ok().map(CellValue::Number),
            Self::Timestamp => parse_timestamp(text).map(CellValue::Timestamp),
            Self::TimestampTz => DateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f%#z")
                .ok()
                .map(|dt| CellValue::Timestamp(dt.naive_utc())),
            Self::Text => None,
        };

        parsed.unwrap_or_else(|| CellValue::String(text.to_string()))
    }
}

/// Quote an identifier for interpolation into SQL
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Quote a table name together with its schema
pub fn qualified_name(schema: &str, table: &str) -> String {
    format!("{}.{}", quote_identifier(schema), quote_identifier(table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use test_case::test_case;

    #[test_case("boolean", Some("t"), CellValue::Boolean(true))]
    #[test_case("boolean", Some("f"), CellValue::Boolean(false))]
    #[test_case("integer", Some("42"), CellValue::Integer(42))]
    #[test_case("bigint", Some("-7"), CellValue::Integer(-7))]
    #[test_case("numeric", Some("10.50"), CellValue::Number(10.5))]
    #[test_case("double precision", Some("2.5"), CellValue::Number(2.5))]
    #[test_case("text", Some("hello"), CellValue::String("hello".to_string()))]
    #[test_case("uuid", Some("9b2c"), CellValue::String("9b2c".to_string()))]
    #[test_case("integer", None, CellValue::Null)]
    fn test_to_cell(data_type: &str, text: Option<&str>, expected: CellValue) {
        assert_eq!(PgColumnType::from_data_type(data_type).to_cell(text), expected);
    }

    #[test]
    fn test_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();

        let plain = PgColumnType::from_data_type("timestamp without time zone")
            .to_cell(Some("2024-03-01 12:30:00"));
        assert_eq!(plain, CellValue::Timestamp(expected));

        let tz = PgColumnType::from_data_type("timestamp with time zone")
            .to_cell(Some("2024-03-01 14:30:00+02"));
        assert_eq!(tz, CellValue::Timestamp(expected));
    }

    #[test]
    fn test_unparseable_text_kept() {
        let cell = PgColumnType::Integer.to_cell(Some("99999999999999999999999"));
        assert_eq!(cell, CellValue::String("99999999999999999999999".to_string()));
    }

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("users"), "\"users\"");
        assert_eq!(quote_identifier("we\"ird"), "\"we\"\"ird\"");
    }

    #[test]
    fn test_qualified_name() {
        assert_eq!(qualified_name("public", "users"), "\"public\".\"users\"");
    }
}
