use crate::types::forecast::Forecast;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A seasonal forecast together with the window it was requested for.
///
/// `start_date` is the moment the response was received and `end_date` lies
/// the requested number of calendar months after it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalForecast {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub forecast: Forecast,
}
