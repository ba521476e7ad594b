//! Typed views over archive responses.
//!
//! Each field is read from the decoded series by its API name; a metric the
//! response does not contain is an empty vector.

use crate::series::decoder::SeriesCollection;
use crate::types::api_time::ApiTime;
use crate::types::forecast::Forecast;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalData {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// The generic decoding of the same response.
    pub forecast: Forecast,
    pub hourly: HourlyData,
    pub daily: DailyData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HourlyData {
    pub time: Vec<ApiTime>,
    pub temperature_2m: Vec<f64>,
    pub relative_humidity_2m: Vec<f64>,
    pub dew_point_2m: Vec<f64>,
    pub apparent_temperature: Vec<f64>,
    pub precipitation: Vec<f64>,
    pub rain: Vec<f64>,
    pub snowfall: Vec<f64>,
    pub wind_speed_10m: Vec<f64>,
    pub wind_direction_10m: Vec<f64>,
    pub wind_gusts_10m: Vec<f64>,
    pub shortwave_radiation: Vec<f64>,
    pub direct_normal_irradiance: Vec<f64>,
    pub diffuse_radiation: Vec<f64>,
    pub cloud_cover: Vec<f64>,
    pub visibility: Vec<f64>,
    pub weather_code: Vec<Option<i32>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailyData {
    pub time: Vec<ApiTime>,
    pub weather_code: Vec<Option<i32>>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub apparent_temperature_max: Vec<f64>,
    pub apparent_temperature_min: Vec<f64>,
    pub sunrise: Vec<ApiTime>,
    pub sunset: Vec<ApiTime>,
    pub precipitation_sum: Vec<f64>,
    pub rain_sum: Vec<f64>,
    pub snowfall_sum: Vec<f64>,
    pub precipitation_hours: Vec<f64>,
    pub wind_speed_10m_max: Vec<f64>,
    pub wind_gusts_10m_max: Vec<f64>,
    pub wind_direction_10m_dominant: Vec<f64>,
    pub shortwave_radiation_sum: Vec<f64>,
}

fn codes(values: &[f64]) -> Vec<Option<i32>> {
    values
        .iter()
        .map(|v| (v.is_finite() && v.fract() == 0.0).then_some(*v as i32))
        .collect()
}

impl HourlyData {
    pub fn from_series(series: &SeriesCollection) -> Self {
        let metric = |name: &str| series.metric(name).to_vec();
        Self {
            time: series.time.clone(),
            temperature_2m: metric("temperature_2m"),
            relative_humidity_2m: metric("relative_humidity_2m"),
            dew_point_2m: metric("dew_point_2m"),
            apparent_temperature: metric("apparent_temperature"),
            precipitation: metric("precipitation"),
            rain: metric("rain"),
            snowfall: metric("snowfall"),
            wind_speed_10m: metric("wind_speed_10m"),
            wind_direction_10m: metric("wind_direction_10m"),
            wind_gusts_10m: metric("wind_gusts_10m"),
            shortwave_radiation: metric("shortwave_radiation"),
            direct_normal_irradiance: metric("direct_normal_irradiance"),
            diffuse_radiation: metric("diffuse_radiation"),
            cloud_cover: metric("cloud_cover"),
            visibility: metric("visibility"),
            weather_code: codes(series.metric("weather_code")),
        }
    }
}

impl DailyData {
    pub fn from_series(series: &SeriesCollection) -> Self {
        let metric = |name: &str| series.metric(name).to_vec();
        Self {
            time: series.time.clone(),
            weather_code: codes(series.metric("weather_code")),
            temperature_2m_max: metric("temperature_2m_max"),
            temperature_2m_min: metric("temperature_2m_min"),
            apparent_temperature_max: metric("apparent_temperature_max"),
            apparent_temperature_min: metric("apparent_temperature_min"),
            sunrise: series.instants("sunrise").to_vec(),
            sunset: series.instants("sunset").to_vec(),
            precipitation_sum: metric("precipitation_sum"),
            rain_sum: metric("rain_sum"),
            snowfall_sum: metric("snowfall_sum"),
            precipitation_hours: metric("precipitation_hours"),
            wind_speed_10m_max: metric("wind_speed_10m_max"),
            wind_gusts_10m_max: metric("wind_gusts_10m_max"),
            wind_direction_10m_dominant: metric("wind_direction_10m_dominant"),
            shortwave_radiation_sum: metric("shortwave_radiation_sum"),
        }
    }
}
