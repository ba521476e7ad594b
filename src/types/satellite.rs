use serde::{Deserialize, Serialize};

/// Metrics requested when the caller does not name any.
pub const DEFAULT_SATELLITE_METRICS: [&str; 4] =
    ["cloud_cover", "infrared", "visible_light", "water_vapor"];

/// Satellite-derived readings from the `satellite` object of a response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SatelliteData {
    #[serde(default)]
    pub cloud_cover: Option<f64>,
    #[serde(default)]
    pub infrared: Option<f64>,
    #[serde(default)]
    pub visible_light: Option<f64>,
    #[serde(default)]
    pub water_vapor: Option<f64>,
}
