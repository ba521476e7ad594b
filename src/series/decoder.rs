//! Two-phase decoding of the `hourly` and `daily` groups.
//!
//! The API puts timestamp strings and numeric arrays under sibling keys of a
//! single object, so a group is first read as `key -> raw JSON` and each key is
//! then decoded on its own: the reserved `time` key through the timestamp
//! codecs, everything else as numbers.

use crate::series::error::DecodeError;
use crate::types::api_time::{ApiDate, ApiTime};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::value::RawValue;
use serde_json::Value;
use std::collections::HashMap;

/// Key holding the time axis in every group.
pub const TIME_KEY: &str = "time";

/// A group as read in the first phase: metric name to undecoded array.
pub type RawGroup = HashMap<String, Box<RawValue>>;

/// Which codec reads the time axis of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeAxisKind {
    DateTime,
    Date,
}

/// Describes how one response group is decoded.
#[derive(Debug, Clone, Copy)]
pub struct GroupSchema {
    /// Name used in error messages (`hourly`, `daily`).
    pub name: &'static str,
    pub time_kind: TimeAxisKind,
    /// Metrics whose values are timestamps rather than numbers.
    pub instant_keys: &'static [&'static str],
}

pub const HOURLY: GroupSchema = GroupSchema {
    name: "hourly",
    time_kind: TimeAxisKind::DateTime,
    instant_keys: &[],
};

pub const DAILY: GroupSchema = GroupSchema {
    name: "daily",
    time_kind: TimeAxisKind::Date,
    instant_keys: &["sunrise", "sunset"],
};

/// Index-aligned series of one group.
///
/// Every decoded vector in `metrics` and `instants` has the same length as
/// `time`. Metrics that were requested but not returned are present and empty.
/// Missing samples (`null` in the response) are stored as `f64::NAN`; a
/// missing entry on the time axis is an unset [`ApiTime`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeriesCollection {
    pub time: Vec<ApiTime>,
    pub metrics: HashMap<String, Vec<f64>>,
    pub instants: HashMap<String, Vec<ApiTime>>,
}

impl SeriesCollection {
    /// Number of samples on the time axis.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Values of a metric, or an empty slice when the response did not contain it.
    pub fn metric(&self, name: &str) -> &[f64] {
        self.metrics.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Timestamp-valued metric such as `sunrise`, or an empty slice.
    pub fn instants(&self, name: &str) -> &[ApiTime] {
        self.instants.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The time axis as instants, `None` where the response left an entry unset.
    pub fn instants_on_axis(&self) -> impl Iterator<Item = Option<DateTime<Utc>>> + '_ {
        self.time.iter().map(ApiTime::instant)
    }

    /// Value of `name` at the sample taken at `time`, if both exist.
    pub fn value_at(&self, name: &str, time: DateTime<Utc>) -> Option<f64> {
        let index = self.instants_on_axis().position(|t| t == Some(time))?;
        self.metric(name).get(index).copied()
    }

    /// Adds an empty entry for each requested metric the response left out,
    /// under `instants` for the schema's timestamp-valued keys.
    pub(crate) fn ensure_metrics(&mut self, schema: &GroupSchema, requested: &[String]) {
        for name in requested {
            if schema.instant_keys.contains(&name.as_str()) {
                self.instants.entry(name.clone()).or_default();
            } else {
                self.metrics.entry(name.clone()).or_default();
            }
        }
    }
}

/// Decodes a group that has already been split into raw fragments.
pub fn decode_group(schema: &GroupSchema, raw: &RawGroup) -> Result<SeriesCollection, DecodeError> {
    let time = match raw.get(TIME_KEY) {
        Some(fragment) => decode_time_axis(schema, fragment)?,
        None => Vec::new(),
    };

    let mut collection = SeriesCollection {
        time,
        ..Default::default()
    };

    for (key, fragment) in raw {
        if key == TIME_KEY {
            continue;
        }
        if schema.instant_keys.contains(&key.as_str()) {
            let values = decode_instants(schema, key, fragment)?;
            check_length(schema, key, collection.time.len(), values.len())?;
            collection.instants.insert(key.clone(), values);
        } else {
            let values = decode_numbers(schema, key, fragment)?;
            check_length(schema, key, collection.time.len(), values.len())?;
            collection.metrics.insert(key.clone(), values);
        }
    }

    Ok(collection)
}

/// Convenience wrapper that runs both phases on a group's JSON text.
pub fn decode_group_str(schema: &GroupSchema, json: &str) -> Result<SeriesCollection, DecodeError> {
    let raw: RawGroup = serde_json::from_str(json)?;
    decode_group(schema, &raw)
}

fn check_length(
    schema: &GroupSchema,
    key: &str,
    expected: usize,
    found: usize,
) -> Result<(), DecodeError> {
    if expected != found {
        return Err(DecodeError::LengthMismatch {
            group: schema.name,
            key: key.to_string(),
            expected,
            found,
        });
    }
    Ok(())
}

fn decode_strings(
    schema: &GroupSchema,
    key: &str,
    fragment: &RawValue,
) -> Result<Vec<Option<String>>, DecodeError> {
    serde_json::from_str(fragment.get()).map_err(|source| DecodeError::Field {
        group: schema.name,
        key: key.to_string(),
        source,
    })
}

fn decode_time_axis(schema: &GroupSchema, fragment: &RawValue) -> Result<Vec<ApiTime>, DecodeError> {
    let raw = decode_strings(schema, TIME_KEY, fragment)?;
    raw.iter()
        .enumerate()
        .map(|(index, value)| {
            let value = value.as_deref().unwrap_or_default();
            match schema.time_kind {
                TimeAxisKind::DateTime => ApiTime::parse(value),
                TimeAxisKind::Date => ApiDate::parse(value).map(ApiTime::from),
            }
            .map_err(|source| DecodeError::MalformedTimestampAt {
                group: schema.name,
                key: TIME_KEY.to_string(),
                index,
                source: Box::new(source),
            })
        })
        .collect()
}

fn decode_instants(
    schema: &GroupSchema,
    key: &str,
    fragment: &RawValue,
) -> Result<Vec<ApiTime>, DecodeError> {
    let raw = decode_strings(schema, key, fragment)?;
    raw.iter()
        .enumerate()
        .map(|(index, value)| {
            ApiTime::parse(value.as_deref().unwrap_or_default()).map_err(|source| {
                DecodeError::MalformedTimestampAt {
                    group: schema.name,
                    key: key.to_string(),
                    index,
                    source: Box::new(source),
                }
            })
        })
        .collect()
}

fn decode_numbers(
    schema: &GroupSchema,
    key: &str,
    fragment: &RawValue,
) -> Result<Vec<f64>, DecodeError> {
    let raw: Vec<Value> =
        serde_json::from_str(fragment.get()).map_err(|source| DecodeError::Field {
            group: schema.name,
            key: key.to_string(),
            source,
        })?;

    raw.iter()
        .enumerate()
        .map(|(index, value)| match value {
            Value::Null => Ok(f64::NAN),
            Value::Number(n) => n.as_f64().ok_or_else(|| DecodeError::NotNumeric {
                group: schema.name,
                key: key.to_string(),
                index,
            }),
            _ => Err(DecodeError::NotNumeric {
                group: schema.name,
                key: key.to_string(),
                index,
            }),
        })
        .collect()
}
