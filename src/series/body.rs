//! Decoding of whole response bodies.

use crate::series::decoder::{decode_group, RawGroup, DAILY, HOURLY, TIME_KEY};
use crate::series::error::DecodeError;
use crate::types::air_quality::AirQualityData;
use crate::types::api_time::ApiTime;
use crate::types::forecast::{CurrentWeather, Forecast};
use crate::types::satellite::SatelliteData;
use serde::Deserialize;
use std::collections::HashMap;

/// First-phase shape of a response: scalars are typed, groups stay raw.
#[derive(Debug, Deserialize)]
struct ForecastJson {
    #[serde(default)]
    latitude: f64,
    #[serde(default)]
    longitude: f64,
    #[serde(default)]
    elevation: f64,
    #[serde(default, rename = "generationtime_ms")]
    generation_time_ms: f64,
    #[serde(default)]
    utc_offset_seconds: i64,
    #[serde(default)]
    timezone: Option<String>,
    #[serde(default)]
    timezone_abbreviation: Option<String>,
    #[serde(default)]
    current_weather: Option<CurrentWeatherJson>,
    #[serde(default)]
    hourly_units: HashMap<String, String>,
    #[serde(default)]
    hourly: Option<RawGroup>,
    #[serde(default)]
    daily_units: HashMap<String, String>,
    #[serde(default)]
    daily: Option<RawGroup>,
}

/// `current_weather` as sent, with its timestamp still a string.
#[derive(Debug, Deserialize)]
struct CurrentWeatherJson {
    #[serde(default)]
    temperature: f64,
    #[serde(default)]
    time: Option<String>,
    #[serde(default, alias = "weather_code")]
    weathercode: f64,
    #[serde(default, alias = "wind_direction")]
    winddirection: f64,
    #[serde(default, alias = "wind_speed")]
    windspeed: f64,
}

impl CurrentWeatherJson {
    fn decode(self) -> Result<CurrentWeather, DecodeError> {
        let time = ApiTime::parse(self.time.as_deref().unwrap_or_default()).map_err(|source| {
            DecodeError::MalformedTimestampAt {
                group: "current_weather",
                key: TIME_KEY.to_string(),
                index: 0,
                source: Box::new(source),
            }
        })?;
        Ok(CurrentWeather {
            temperature: self.temperature,
            time,
            weathercode: self.weathercode,
            winddirection: self.winddirection,
            windspeed: self.windspeed,
        })
    }
}

/// Decodes a forecast-shaped body. Archive and seasonal responses share the shape.
pub fn parse_forecast_body(body: &[u8]) -> Result<Forecast, DecodeError> {
    let raw: ForecastJson = serde_json::from_slice(body)?;

    let hourly = match &raw.hourly {
        Some(group) => decode_group(&HOURLY, group)?,
        None => Default::default(),
    };
    let daily = match &raw.daily {
        Some(group) => decode_group(&DAILY, group)?,
        None => Default::default(),
    };

    Ok(Forecast {
        latitude: raw.latitude,
        longitude: raw.longitude,
        elevation: raw.elevation,
        generation_time_ms: raw.generation_time_ms,
        utc_offset_seconds: raw.utc_offset_seconds,
        timezone: raw.timezone,
        timezone_abbreviation: raw.timezone_abbreviation,
        current_weather: raw
            .current_weather
            .map(CurrentWeatherJson::decode)
            .transpose()?,
        hourly_units: raw.hourly_units,
        hourly,
        daily_units: raw.daily_units,
        daily,
    })
}

#[derive(Debug, Deserialize)]
struct AirQualityJson {
    #[serde(default)]
    air_quality: AirQualityData,
}

pub fn parse_air_quality_body(body: &[u8]) -> Result<AirQualityData, DecodeError> {
    let raw: AirQualityJson = serde_json::from_slice(body)?;
    Ok(raw.air_quality)
}

#[derive(Debug, Deserialize)]
struct SatelliteJson {
    #[serde(default)]
    satellite: SatelliteData,
}

pub fn parse_satellite_body(body: &[u8]) -> Result<SatelliteData, DecodeError> {
    let raw: SatelliteJson = serde_json::from_slice(body)?;
    Ok(raw.satellite)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const FORECAST_BODY: &str = r#"{
        "latitude": 52.52,
        "longitude": 13.419998,
        "generationtime_ms": 0.3819465637207031,
        "utc_offset_seconds": 0,
        "timezone": "GMT",
        "timezone_abbreviation": "GMT",
        "elevation": 38.0,
        "current_weather": {
            "temperature": 14.2,
            "windspeed": 9.8,
            "winddirection": 250.0,
            "weathercode": 3,
            "time": "2023-05-01T12:00"
        },
        "hourly_units": {"time": "iso8601", "temperature_2m": "°C"},
        "hourly": {
            "time": ["2023-05-01T00:00", "2023-05-01T01:00", "2023-05-01T02:00"],
            "temperature_2m": [10.5, 10.1, 9.8]
        },
        "daily_units": {"time": "iso8601", "precipitation_sum": "mm"},
        "daily": {
            "time": ["2023-05-01"],
            "precipitation_sum": [1.2]
        }
    }"#;

    #[test]
    fn test_minimal_hourly_body() -> Result<(), DecodeError> {
        let forecast = parse_forecast_body(
            br#"{"hourly":{"time":["2023-05-01T00:00"],"temperature_2m":[10.5]}}"#,
        )?;
        assert_eq!(
            forecast.hourly.time,
            vec![ApiTime::new(Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap())]
        );
        assert_eq!(forecast.hourly.metrics.len(), 1);
        assert_eq!(forecast.hourly.metric("temperature_2m"), &[10.5]);
        assert!(forecast.daily.is_empty());
        assert!(forecast.current_weather.is_none());
        Ok(())
    }

    #[test]
    fn test_full_forecast_body() -> Result<(), DecodeError> {
        let forecast = parse_forecast_body(FORECAST_BODY.as_bytes())?;
        assert_eq!(forecast.latitude, 52.52);
        assert_eq!(forecast.elevation, 38.0);
        assert_eq!(forecast.timezone.as_deref(), Some("GMT"));
        assert_eq!(forecast.hourly.len(), 3);
        assert_eq!(forecast.hourly_units["temperature_2m"], "°C");
        assert_eq!(forecast.daily.metric("precipitation_sum"), &[1.2]);
        assert_eq!(
            forecast.daily.time[0].instant(),
            Some(Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap())
        );

        let current = forecast.current_weather.expect("current weather");
        assert_eq!(current.temperature, 14.2);
        assert_eq!(
            current.time.instant(),
            Some(Utc.with_ymd_and_hms(2023, 5, 1, 12, 0, 0).unwrap())
        );
        assert_eq!(current.condition(), Some(crate::WeatherCode::Overcast));
        Ok(())
    }

    #[test]
    fn test_groups_are_decoded_independently() -> Result<(), DecodeError> {
        let forecast = parse_forecast_body(
            br#"{"hourly":{"time":["2023-05-01T00:00","2023-05-01T01:00"],"a":[1,2]},
                 "daily":{"time":["2023-05-01"],"a":[7]}}"#,
        )?;
        assert_eq!(forecast.hourly.metric("a"), &[1.0, 2.0]);
        assert_eq!(forecast.daily.metric("a"), &[7.0]);
        Ok(())
    }

    #[test]
    fn test_malformed_current_weather_time_is_a_timestamp_error() {
        let err = parse_forecast_body(br#"{"current_weather":{"time":"soon"}}"#)
            .expect_err("time should not decode");
        assert!(matches!(
            err,
            DecodeError::MalformedTimestampAt {
                group: "current_weather",
                ..
            }
        ));
        assert!(err.is_malformed_timestamp());
    }

    #[test]
    fn test_body_that_is_not_json() {
        assert!(matches!(
            parse_forecast_body(b"<html>oops</html>"),
            Err(DecodeError::Json(_))
        ));
    }

    #[test]
    fn test_air_quality_body() -> Result<(), DecodeError> {
        let data = parse_air_quality_body(
            br#"{"air_quality":{"pm10":12.5,"pm2_5":8.1,"o3":null,"no2":20.0,"co":201.0}}"#,
        )?;
        assert_eq!(data.pm10, Some(12.5));
        assert_eq!(data.pm2_5, Some(8.1));
        assert_eq!(data.o3, None);
        assert_eq!(data.metric("co"), Some(201.0));

        let empty = parse_air_quality_body(br#"{"latitude":1.0}"#)?;
        assert_eq!(empty, AirQualityData::default());
        Ok(())
    }

    #[test]
    fn test_air_quality_time_sibling_is_ignored() -> Result<(), DecodeError> {
        let data =
            parse_air_quality_body(br#"{"air_quality":{"time":"2023-05-01T12:00","pm10":12.5}}"#)?;
        assert_eq!(data.pm10, Some(12.5));
        assert_eq!(data.metric("time"), None);
        Ok(())
    }

    #[test]
    fn test_empty_time_entry_does_not_fail_the_group() -> Result<(), DecodeError> {
        let forecast =
            parse_forecast_body(br#"{"hourly":{"time":["2023-05-01T00:00",""],"t":[1,2]}}"#)?;
        assert_eq!(forecast.hourly.len(), 2);
        assert!(!forecast.hourly.time[1].is_set());
        assert_eq!(forecast.hourly.metric("t"), &[1.0, 2.0]);
        Ok(())
    }

    #[test]
    fn test_current_weather_without_time_is_unset() -> Result<(), DecodeError> {
        let forecast = parse_forecast_body(br#"{"current_weather":{"temperature":3.5}}"#)?;
        let current = forecast.current_weather.expect("current weather");
        assert_eq!(current.temperature, 3.5);
        assert!(!current.time.is_set());
        Ok(())
    }

    #[test]
    fn test_satellite_body() -> Result<(), DecodeError> {
        let data = parse_satellite_body(
            br#"{"satellite":{"cloud_cover":40.0,"infrared":1.5,"visible_light":0.7}}"#,
        )?;
        assert_eq!(data.cloud_cover, Some(40.0));
        assert_eq!(data.water_vapor, None);
        assert!(matches!(
            parse_satellite_body(b"not json"),
            Err(DecodeError::Json(_))
        ));
        Ok(())
    }
}
