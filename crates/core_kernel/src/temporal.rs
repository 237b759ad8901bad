//! Business-date handling
//!
//! Time entries are keyed by a calendar date (`YYYY-MM-DD`) rather than an
//! instant. Which calendar day counts as "today" depends on the timezone the
//! back office runs in, so the timezone is configuration, defaulting to UTC.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use std::str::FromStr;

/// Timezone wrapper for the business calendar
///
/// Wraps chrono_tz::Tz with custom serialization support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Timezone::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Parses an IANA timezone name such as `America/Chicago`
    pub fn parse(name: &str) -> Result<Self, TemporalError> {
        Tz::from_str(name)
            .map(Timezone)
            .map_err(|_| TemporalError::InvalidTimezone(name.to_string()))
    }

    /// Returns the calendar date of the given instant in this timezone
    pub fn date_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.0).date_naive()
    }

    /// Returns today's calendar date in this timezone
    pub fn today(&self) -> NaiveDate {
        self.date_of(Utc::now())
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::UTC)
    }
}

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),
}

/// Parses an ISO calendar date (`YYYY-MM-DD`)
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, TemporalError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| TemporalError::InvalidDate(value.to_string()))
}

/// Whole days from `start` to `end`, negative when `end` precedes `start`
pub fn days_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    (end - start).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_iso_date() {
        let date = parse_iso_date("2024-02-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());
    }

    #[test]
    fn test_parse_iso_date_rejects_other_formats() {
        assert!(matches!(parse_iso_date("02/15/2024"), Err(TemporalError::InvalidDate(_))));
        assert!(parse_iso_date("2024-13-01").is_err());
    }

    #[test]
    fn test_date_of_respects_timezone() {
        // 03:00 UTC is still the previous evening in Chicago
        let instant = Utc.with_ymd_and_hms(2024, 3, 1, 3, 0, 0).unwrap();
        let chicago = Timezone::parse("America/Chicago").unwrap();

        assert_eq!(Timezone::default().date_of(instant), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(chicago.date_of(instant), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_unknown_timezone() {
        assert!(matches!(Timezone::parse("Mars/Olympus"), Err(TemporalError::InvalidTimezone(_))));
    }

    #[test]
    fn test_days_between() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 8, 13, 0, 0).unwrap();
        assert_eq!(days_between(start, end), 7);
        assert_eq!(days_between(end, start), -7);
    }
}
