mod clients;
mod error;
mod open_meteo;
mod request;
pub mod series;
mod types;
mod utils;

pub use error::{ErrorKind, OpenMeteoError};
pub use open_meteo::*;

pub use request::cache::ResponseCache;
pub use request::error::RequestError;
pub use request::rate_limiter::{RateLimiter, DEFAULT_REQUESTS_PER_SECOND};

pub use series::decoder::SeriesCollection;
pub use series::error::DecodeError;

pub use types::air_quality::{AirQualityData, DEFAULT_AIR_QUALITY_METRICS};
pub use types::api_time::{ApiDate, ApiTime};
pub use types::forecast::{CurrentWeather, Forecast};
pub use types::historical::{DailyData, HistoricalData, HourlyData};
pub use types::location::Location;
pub use types::options::{Options, MAX_FORECAST_MONTHS};
pub use types::satellite::{SatelliteData, DEFAULT_SATELLITE_METRICS};
pub use types::seasonal::SeasonalForecast;
pub use types::units::{PrecipitationUnit, TemperatureUnit, WindspeedUnit};
pub use types::weather_code::WeatherCode;

pub use tokio_util::sync::CancellationToken;
