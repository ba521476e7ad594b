use crate::series::decoder::SeriesCollection;
use crate::types::api_time::ApiTime;
use crate::types::weather_code::WeatherCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The single "current" reading included in every response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    #[serde(default)]
    pub temperature: f64,
    #[serde(default)]
    pub time: ApiTime,
    #[serde(default, alias = "weather_code")]
    pub weathercode: f64,
    #[serde(default, alias = "wind_direction")]
    pub winddirection: f64,
    #[serde(default, alias = "wind_speed")]
    pub windspeed: f64,
}

impl CurrentWeather {
    pub fn condition(&self) -> Option<WeatherCode> {
        WeatherCode::from_code(self.weathercode)
    }
}

/// A decoded forecast (or archive/seasonal) response.
///
/// `hourly` and `daily` are decoded independently; each has its own time axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Forecast {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
    /// Server-side generation time in milliseconds.
    pub generation_time_ms: f64,
    pub utc_offset_seconds: i64,
    pub timezone: Option<String>,
    pub timezone_abbreviation: Option<String>,
    pub current_weather: Option<CurrentWeather>,
    pub hourly_units: HashMap<String, String>,
    pub hourly: SeriesCollection,
    pub daily_units: HashMap<String, String>,
    pub daily: SeriesCollection,
}
