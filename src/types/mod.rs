pub mod air_quality;
pub mod api_time;
pub mod forecast;
pub mod historical;
pub mod location;
pub mod options;
pub mod satellite;
pub mod seasonal;
pub mod units;
pub mod weather_code;
