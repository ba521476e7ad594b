//! Request options and their translation into query parameters.

use crate::types::units::{PrecipitationUnit, TemperatureUnit, WindspeedUnit};
use bon::Builder;
use reqwest::Url;

/// Largest number of months a seasonal forecast may cover.
pub const MAX_FORECAST_MONTHS: u8 = 6;

/// Optional settings for a request. Every field left at its default is
/// omitted from the query and the server default applies.
///
/// Options can be built either as a struct literal with `..Default::default()`
/// or through the builder:
///
/// ```
/// use open_meteo::{Options, TemperatureUnit};
///
/// let options = Options::builder()
///     .temperature_unit(TemperatureUnit::Fahrenheit)
///     .timezone("Europe/Amsterdam")
///     .hourly_metrics(vec!["temperature_2m".to_string()])
///     .build();
/// assert_eq!(options.timezone.as_deref(), Some("Europe/Amsterdam"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Builder)]
pub struct Options {
    pub temperature_unit: Option<TemperatureUnit>,
    pub windspeed_unit: Option<WindspeedUnit>,
    pub precipitation_unit: Option<PrecipitationUnit>,
    #[builder(into)]
    pub timezone: Option<String>,
    pub past_days: Option<u32>,
    /// Hourly metrics to request, see <https://open-meteo.com/en/docs>.
    #[builder(default)]
    pub hourly_metrics: Vec<String>,
    #[builder(default)]
    pub daily_metrics: Vec<String>,
    #[builder(default)]
    pub air_quality_metrics: Vec<String>,
    #[builder(default)]
    pub satellite_metrics: Vec<String>,
    /// First day of a historical range, `YYYY-MM-DD`.
    #[builder(into)]
    pub start_date: Option<String>,
    /// Last day of a historical range, `YYYY-MM-DD`.
    #[builder(into)]
    pub end_date: Option<String>,
    #[builder(default)]
    pub seasonal_forecast: bool,
    /// Months covered by a seasonal forecast, 1 to 6.
    pub forecast_months: Option<u8>,
}

impl Options {
    /// Appends every set option to `url` as query parameters.
    pub(crate) fn append_to(&self, url: &mut Url) {
        let mut query = url.query_pairs_mut();

        if let Some(unit) = self.temperature_unit {
            query.append_pair("temperature_unit", unit.as_query_value());
        }
        if let Some(unit) = self.windspeed_unit {
            query.append_pair("windspeed_unit", unit.as_query_value());
        }
        if let Some(unit) = self.precipitation_unit {
            query.append_pair("precipitation_unit", unit.as_query_value());
        }
        if let Some(timezone) = self.timezone.as_deref().filter(|tz| !tz.is_empty()) {
            query.append_pair("timezone", timezone);
        }
        if let Some(days) = self.past_days.filter(|d| *d > 0) {
            query.append_pair("past_days", &days.to_string());
        }

        for (name, metrics) in [
            ("hourly", &self.hourly_metrics),
            ("daily", &self.daily_metrics),
            ("air_quality", &self.air_quality_metrics),
            ("satellite", &self.satellite_metrics),
        ] {
            if !metrics.is_empty() {
                query.append_pair(name, &metrics.join(","));
            }
        }

        if let Some(start) = self.start_date.as_deref().filter(|d| !d.is_empty()) {
            query.append_pair("start_date", start);
        }
        if let Some(end) = self.end_date.as_deref().filter(|d| !d.is_empty()) {
            query.append_pair("end_date", end);
        }

        if self.seasonal_forecast {
            query.append_pair("seasonal", "true");
            if let Some(months) = self
                .forecast_months
                .filter(|m| (1..=MAX_FORECAST_MONTHS).contains(m))
            {
                query.append_pair("forecast_months", &months.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_of(options: &Options) -> String {
        let mut url = Url::parse("https://example.test/v1/forecast").unwrap();
        options.append_to(&mut url);
        url.query().unwrap_or_default().to_string()
    }

    #[test]
    fn test_default_options_add_nothing() {
        assert_eq!(query_of(&Options::default()), "");
    }

    #[test]
    fn test_units_timezone_and_metrics() {
        let options = Options {
            temperature_unit: Some(TemperatureUnit::Fahrenheit),
            windspeed_unit: Some(WindspeedUnit::Mph),
            precipitation_unit: Some(PrecipitationUnit::Inch),
            timezone: Some("UTC".to_string()),
            past_days: Some(2),
            hourly_metrics: vec!["temperature_2m".into(), "cloud_cover".into()],
            daily_metrics: vec!["precipitation_sum".into()],
            ..Default::default()
        };
        assert_eq!(
            query_of(&options),
            "temperature_unit=fahrenheit&windspeed_unit=mph&precipitation_unit=inch\
             &timezone=UTC&past_days=2&hourly=temperature_2m%2Ccloud_cover\
             &daily=precipitation_sum"
        );
    }

    #[test]
    fn test_seasonal_months_only_sent_when_in_range() {
        let mut options = Options {
            seasonal_forecast: true,
            forecast_months: Some(3),
            ..Default::default()
        };
        assert_eq!(query_of(&options), "seasonal=true&forecast_months=3");

        options.forecast_months = Some(9);
        assert_eq!(query_of(&options), "seasonal=true");

        options.seasonal_forecast = false;
        assert_eq!(query_of(&options), "");
    }

    #[test]
    fn test_date_range_and_extra_metric_groups() {
        let options = Options::builder()
            .start_date("2023-04-01")
            .end_date("2023-04-30")
            .air_quality_metrics(vec!["pm10".into()])
            .satellite_metrics(vec!["infrared".into()])
            .build();
        assert_eq!(
            query_of(&options),
            "air_quality=pm10&satellite=infrared&start_date=2023-04-01&end_date=2023-04-30"
        );
    }
}
