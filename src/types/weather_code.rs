//! Defines the `WeatherCode` enum, mapping the WMO weather interpretation codes
//! reported by Open-Meteo (`weathercode` / `weather_code`) to descriptive variants.

/// WMO weather interpretation code.
///
/// See the "WMO Weather interpretation codes" table at
/// <https://open-meteo.com/en/docs> for the official definitions.
///
/// ```rust
/// use open_meteo::WeatherCode;
///
/// assert_eq!(WeatherCode::from_code(61.0), Some(WeatherCode::SlightRain));
/// assert_eq!(WeatherCode::from_code(4.0), None);
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum WeatherCode {
    /// Code 0: Clear sky.
    ClearSky = 0,
    /// Code 1: Mainly clear.
    MainlyClear = 1,
    /// Code 2: Partly cloudy.
    PartlyCloudy = 2,
    /// Code 3: Overcast.
    Overcast = 3,
    /// Code 45: Fog.
    Fog = 45,
    /// Code 48: Fog depositing rime.
    DepositingRimeFog = 48,
    /// Code 51: Light drizzle.
    LightDrizzle = 51,
    /// Code 53: Moderate drizzle.
    ModerateDrizzle = 53,
    /// Code 55: Dense drizzle.
    DenseDrizzle = 55,
    /// Code 56: Light freezing drizzle.
    LightFreezingDrizzle = 56,
    /// Code 57: Dense freezing drizzle.
    DenseFreezingDrizzle = 57,
    /// Code 61: Slight rain.
    SlightRain = 61,
    /// Code 63: Moderate rain.
    ModerateRain = 63,
    /// Code 65: Heavy rain.
    HeavyRain = 65,
    /// Code 66: Light freezing rain.
    LightFreezingRain = 66,
    /// Code 67: Heavy freezing rain.
    HeavyFreezingRain = 67,
    /// Code 71: Slight snowfall.
    SlightSnowfall = 71,
    /// Code 73: Moderate snowfall.
    ModerateSnowfall = 73,
    /// Code 75: Heavy snowfall.
    HeavySnowfall = 75,
    /// Code 77: Snow grains.
    SnowGrains = 77,
    /// Code 80: Slight rain showers.
    SlightRainShowers = 80,
    /// Code 81: Moderate rain showers.
    ModerateRainShowers = 81,
    /// Code 82: Violent rain showers.
    ViolentRainShowers = 82,
    /// Code 85: Slight snow showers.
    SlightSnowShowers = 85,
    /// Code 86: Heavy snow showers.
    HeavySnowShowers = 86,
    /// Code 95: Slight or moderate thunderstorm.
    Thunderstorm = 95,
    /// Code 96: Thunderstorm with slight hail.
    ThunderstormWithSlightHail = 96,
    /// Code 99: Thunderstorm with heavy hail.
    ThunderstormWithHeavyHail = 99,
}

impl WeatherCode {
    /// Converts a code as it appears in a response. The API sends codes as JSON
    /// numbers, so they arrive here as floats; fractional, negative and unknown
    /// values yield `None`.
    pub fn from_code(value: f64) -> Option<Self> {
        if !value.is_finite() || value.fract() != 0.0 || value < 0.0 {
            return None;
        }
        let code = match value as u32 {
            0 => WeatherCode::ClearSky,
            1 => WeatherCode::MainlyClear,
            2 => WeatherCode::PartlyCloudy,
            3 => WeatherCode::Overcast,
            45 => WeatherCode::Fog,
            48 => WeatherCode::DepositingRimeFog,
            51 => WeatherCode::LightDrizzle,
            53 => WeatherCode::ModerateDrizzle,
            55 => WeatherCode::DenseDrizzle,
            56 => WeatherCode::LightFreezingDrizzle,
            57 => WeatherCode::DenseFreezingDrizzle,
            61 => WeatherCode::SlightRain,
            63 => WeatherCode::ModerateRain,
            65 => WeatherCode::HeavyRain,
            66 => WeatherCode::LightFreezingRain,
            67 => WeatherCode::HeavyFreezingRain,
            71 => WeatherCode::SlightSnowfall,
            73 => WeatherCode::ModerateSnowfall,
            75 => WeatherCode::HeavySnowfall,
            77 => WeatherCode::SnowGrains,
            80 => WeatherCode::SlightRainShowers,
            81 => WeatherCode::ModerateRainShowers,
            82 => WeatherCode::ViolentRainShowers,
            85 => WeatherCode::SlightSnowShowers,
            86 => WeatherCode::HeavySnowShowers,
            95 => WeatherCode::Thunderstorm,
            96 => WeatherCode::ThunderstormWithSlightHail,
            99 => WeatherCode::ThunderstormWithHeavyHail,
            _ => return None,
        };
        Some(code)
    }

    /// True for every code that reports falling water or ice.
    pub fn is_precipitation(&self) -> bool {
        (*self as u8) >= 51
    }
}
