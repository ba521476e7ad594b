use crate::clients::require_options;
use crate::series::body::parse_forecast_body;
use crate::series::decoder::{DAILY, HOURLY};
use crate::types::historical::{DailyData, HistoricalData, HourlyData};
use crate::types::location::Location;
use crate::types::options::Options;
use crate::utils::parse_date;
use crate::{OpenMeteo, OpenMeteoError};
use bon::bon;
use chrono::NaiveDate;
use tokio_util::sync::CancellationToken;

/// Checks the date range of a historical request.
fn validate_range(options: &Options) -> Result<(NaiveDate, NaiveDate), OpenMeteoError> {
    let start = options.start_date.as_deref().unwrap_or_default();
    let end = options.end_date.as_deref().unwrap_or_default();
    if start.is_empty() || end.is_empty() {
        return Err(OpenMeteoError::invalid_input("start_date or end_date", "empty"));
    }

    let start_date =
        parse_date(start).ok_or_else(|| OpenMeteoError::invalid_input("start_date", start))?;
    let end_date = parse_date(end).ok_or_else(|| OpenMeteoError::invalid_input("end_date", end))?;
    if end_date < start_date {
        return Err(OpenMeteoError::invalid_input(
            "end_date",
            format!("{end} is before start_date {start}"),
        ));
    }
    Ok((start_date, end_date))
}

#[bon]
impl OpenMeteo {
    /// Fetches archived weather for a date range.
    ///
    /// The base URL should point at an archive endpoint, e.g.
    /// `https://archive-api.open-meteo.com/v1/archive`.
    ///
    /// # Arguments
    ///
    /// * `.location(Location)`: **Required.**
    /// * `.options(&Options)`: **Required** in practice: `start_date` and
    ///   `end_date` must be set as `YYYY-MM-DD`.
    /// * `.cancel(&CancellationToken)`: Optional.
    ///
    /// # Errors
    ///
    /// [`OpenMeteoError::InvalidInput`] before any network call when the
    /// options or dates are missing, do not parse, or describe an inverted
    /// range. Otherwise the same errors as [`OpenMeteo::forecast`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use open_meteo::{Location, OpenMeteo, OpenMeteoError, Options};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), OpenMeteoError> {
    /// let client = OpenMeteo::builder()
    ///     .base_url("https://archive-api.open-meteo.com/v1/archive")
    ///     .build()?;
    /// let options = Options::builder()
    ///     .start_date("2023-04-01")
    ///     .end_date("2023-04-30")
    ///     .daily_metrics(vec!["temperature_2m_max".to_string()])
    ///     .build();
    /// let history = client
    ///     .historical()
    ///     .location(Location::new(52.37, 4.89))
    ///     .options(&options)
    ///     .call()
    ///     .await?;
    /// println!("{:?}", history.daily.temperature_2m_max);
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn historical(
        &self,
        location: Location,
        options: Option<&Options>,
        cancel: Option<&CancellationToken>,
    ) -> Result<HistoricalData, OpenMeteoError> {
        let options = require_options(options)?;
        let (start_date, end_date) = validate_range(options)?;

        let body = self.fetch(location, Some(options), cancel).await?;
        let mut forecast = parse_forecast_body(&body)?;
        forecast.hourly.ensure_metrics(&HOURLY, &options.hourly_metrics);
        forecast.daily.ensure_metrics(&DAILY, &options.daily_metrics);

        Ok(HistoricalData {
            start_date,
            end_date,
            hourly: HourlyData::from_series(&forecast.hourly),
            daily: DailyData::from_series(&forecast.daily),
            forecast,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    // Nothing listens here, so reaching the network would surface as Transport.
    fn offline_client() -> Result<OpenMeteo, OpenMeteoError> {
        OpenMeteo::builder()
            .base_url("http://127.0.0.1:9/v1/archive")
            .build()
    }

    async fn historical_error(options: Option<&Options>) -> Result<OpenMeteoError, OpenMeteoError> {
        let client = offline_client()?;
        let result = client
            .historical()
            .location(Location::new(52.37, 4.89))
            .maybe_options(options)
            .call()
            .await;
        Ok(result.expect_err("request should be rejected"))
    }

    #[tokio::test]
    async fn test_missing_options() -> Result<(), OpenMeteoError> {
        let err = historical_error(None).await?;
        assert_eq!(err.to_string(), "invalid input: options = none");
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_dates() -> Result<(), OpenMeteoError> {
        let options = Options::builder().start_date("2023-04-01").build();
        let err = historical_error(Some(&options)).await?;
        assert_eq!(err.to_string(), "invalid input: start_date or end_date = empty");
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_start_date_fails_before_network() -> Result<(), OpenMeteoError> {
        let options = Options::builder()
            .start_date("invalid")
            .end_date("2023-04-30")
            .build();
        let err = historical_error(Some(&options)).await?;
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.to_string(), "invalid input: start_date = invalid");
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_end_date() -> Result<(), OpenMeteoError> {
        let options = Options::builder()
            .start_date("2023-04-01")
            .end_date("30/04/2023")
            .build();
        let err = historical_error(Some(&options)).await?;
        assert_eq!(err.to_string(), "invalid input: end_date = 30/04/2023");
        Ok(())
    }

    #[tokio::test]
    async fn test_inverted_range() -> Result<(), OpenMeteoError> {
        let options = Options::builder()
            .start_date("2023-04-30")
            .end_date("2023-04-01")
            .build();
        let err = historical_error(Some(&options)).await?;
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        Ok(())
    }

    #[test]
    fn test_valid_range() -> Result<(), OpenMeteoError> {
        let options = Options::builder()
            .start_date("2023-04-01")
            .end_date("2023-04-01")
            .build();
        let (start, end) = validate_range(&options)?;
        assert_eq!(start, end);
        Ok(())
    }
}
