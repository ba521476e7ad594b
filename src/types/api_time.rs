//! Codecs for the two timestamp shapes found in Open-Meteo responses.
//!
//! Hourly arrays carry local date-times without an offset (`2023-05-01T13:00`),
//! daily arrays carry plain dates (`2023-05-01`). Both are interpreted as UTC.
//! A JSON `null` or an empty string decodes to the *not set* state rather than
//! an error, and the not-set state encodes back to `null`.

use crate::series::error::DecodeError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const DATETIME_MINUTES: &str = "%Y-%m-%dT%H:%M";
const DATETIME_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";
const DATE_ONLY: &str = "%Y-%m-%d";

fn parse_datetime_family(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, DATETIME_MINUTES)
        .or_else(|_| NaiveDateTime::parse_from_str(value, DATETIME_SECONDS))
        .ok()
        .map(|naive| naive.and_utc())
}

fn parse_date_family(value: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(value, DATE_ONLY)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn encode<S: Serializer>(value: Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(dt) => serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Secs, true)),
        None => serializer.serialize_none(),
    }
}

/// A date-time as reported by the API (`YYYY-MM-DDTHH:MM`, implicitly UTC).
///
/// `ApiTime::default()` is the not-set value. A real instant, including
/// `0001-01-01T00:00:00Z`, is always set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiTime(Option<DateTime<Utc>>);

impl ApiTime {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(Some(instant))
    }

    pub fn unset() -> Self {
        Self(None)
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    pub fn instant(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    /// Parses a single value. Empty input is the not-set value.
    ///
    /// Accepts `YYYY-MM-DDTHH:MM`, the same with seconds, RFC 3339 and a
    /// plain date (read as midnight UTC).
    pub fn parse(value: &str) -> Result<Self, DecodeError> {
        if value.is_empty() {
            return Ok(Self::unset());
        }
        parse_datetime_family(value)
            .or_else(|| parse_date_family(value))
            .map(Self::new)
            .ok_or_else(|| DecodeError::MalformedTimestamp {
                value: value.to_string(),
            })
    }
}

impl From<DateTime<Utc>> for ApiTime {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::new(instant)
    }
}

impl fmt::Display for ApiTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(dt) => write!(f, "{}", dt.to_rfc3339_opts(SecondsFormat::Secs, true)),
            None => write!(f, "unset"),
        }
    }
}

impl Serialize for ApiTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        encode(self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for ApiTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => ApiTime::parse(&raw).map_err(serde::de::Error::custom),
            None => Ok(ApiTime::unset()),
        }
    }
}

/// A calendar date as reported by the API (`YYYY-MM-DD`), held as midnight UTC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiDate(Option<DateTime<Utc>>);

impl ApiDate {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(Some(instant))
    }

    pub fn unset() -> Self {
        Self(None)
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    pub fn instant(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    /// Parses a single value. Empty input is the not-set value.
    ///
    /// The plain date form is tried first, then the date-time forms so that
    /// an encoded value (`2023-05-01T00:00:00Z`) decodes back unchanged.
    pub fn parse(value: &str) -> Result<Self, DecodeError> {
        if value.is_empty() {
            return Ok(Self::unset());
        }
        parse_date_family(value)
            .or_else(|| parse_datetime_family(value))
            .map(Self::new)
            .ok_or_else(|| DecodeError::MalformedTimestamp {
                value: value.to_string(),
            })
    }
}

impl From<NaiveDate> for ApiDate {
    fn from(date: NaiveDate) -> Self {
        Self(date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc()))
    }
}

impl From<ApiDate> for ApiTime {
    fn from(date: ApiDate) -> Self {
        ApiTime(date.0)
    }
}

impl Serialize for ApiDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        encode(self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for ApiDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => ApiDate::parse(&raw).map_err(serde::de::Error::custom),
            None => Ok(ApiDate::unset()),
        }
    }
}
