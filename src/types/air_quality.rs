use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Metrics requested when the caller does not name any.
pub const DEFAULT_AIR_QUALITY_METRICS: [&str; 4] = ["pm10", "pm2_5", "o3", "no2"];

/// Air-quality readings from the `air_quality` object of a response.
///
/// The common pollutants have their own fields; every other key the server
/// sent ends up in `other` as raw JSON, whatever its type. A pollutant the
/// server did not report is `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AirQualityData {
    #[serde(default)]
    pub pm10: Option<f64>,
    #[serde(default)]
    pub pm2_5: Option<f64>,
    #[serde(default)]
    pub o3: Option<f64>,
    #[serde(default)]
    pub no2: Option<f64>,
    #[serde(flatten)]
    pub other: HashMap<String, Value>,
}

impl AirQualityData {
    /// Numeric reading for `name`, looked up in the named fields first.
    /// Non-numeric and `null` values yield `None`.
    pub fn metric(&self, name: &str) -> Option<f64> {
        match name {
            "pm10" => self.pm10,
            "pm2_5" => self.pm2_5,
            "o3" => self.o3,
            "no2" => self.no2,
            _ => self.other.get(name).and_then(Value::as_f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_numeric_siblings_are_kept_raw() -> Result<(), serde_json::Error> {
        let data: AirQualityData = serde_json::from_str(
            r#"{"time":"2023-05-01T12:00","pm10":12.5,"co":201.0,"dust":null}"#,
        )?;
        assert_eq!(data.pm10, Some(12.5));
        assert_eq!(data.metric("pm10"), Some(12.5));
        assert_eq!(data.metric("co"), Some(201.0));
        assert_eq!(data.metric("dust"), None);
        assert_eq!(data.metric("time"), None);
        assert_eq!(
            data.other.get("time").and_then(Value::as_str),
            Some("2023-05-01T12:00")
        );
        Ok(())
    }
}
