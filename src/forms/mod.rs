use chrono::{NaiveDate, NaiveTime};

use crate::domain::types::TypeConstraintError;

pub mod cameras;
pub mod occurrences;
pub mod reports;

/// Parses an ISO `YYYY-MM-DD` date.
fn parse_date(value: &str, field: &str) -> Result<NaiveDate, TypeConstraintError> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| TypeConstraintError::InvalidValue(format!("{field}: {value}")))
}

/// Parses a time of day given as `HH:MM` or `HH:MM:SS`.
fn parse_time(value: &str, field: &str) -> Result<NaiveTime, TypeConstraintError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| TypeConstraintError::InvalidValue(format!("{field}: {value}")))
}

/// Treats blank query parameters as absent.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_accepts_optional_seconds() {
        let expected = NaiveTime::from_hms_opt(22, 15, 0).unwrap();
        assert_eq!(parse_time("22:15", "startTime").unwrap(), expected);
        assert_eq!(parse_time(" 22:15:00 ", "startTime").unwrap(), expected);
        assert!(parse_time("25:00", "startTime").is_err());
    }

    #[test]
    fn date_must_be_iso() {
        assert!(parse_date("2026-10-15", "occurrenceDate").is_ok());
        assert!(parse_date("15/10/2026", "occurrenceDate").is_err());
    }
}
