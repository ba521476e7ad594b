use crate::clients::require_options;
use crate::series::body::parse_forecast_body;
use crate::types::location::Location;
use crate::types::options::{Options, MAX_FORECAST_MONTHS};
use crate::types::seasonal::SeasonalForecast;
use crate::{OpenMeteo, OpenMeteoError};
use bon::bon;
use chrono::{DateTime, Months, Utc};
use tokio_util::sync::CancellationToken;

fn validate_seasonal(options: &Options) -> Result<u8, OpenMeteoError> {
    if !options.seasonal_forecast {
        return Err(OpenMeteoError::invalid_input("seasonal_forecast", false));
    }
    match options.forecast_months {
        Some(months) if (1..=MAX_FORECAST_MONTHS).contains(&months) => Ok(months),
        Some(months) => Err(OpenMeteoError::invalid_input("forecast_months", months)),
        None => Err(OpenMeteoError::invalid_input("forecast_months", "none")),
    }
}

fn window_end(start: DateTime<Utc>, months: u8) -> Result<DateTime<Utc>, OpenMeteoError> {
    start
        .checked_add_months(Months::new(u32::from(months)))
        .ok_or_else(|| OpenMeteoError::invalid_input("forecast_months", months))
}

#[bon]
impl OpenMeteo {
    /// Fetches a seasonal forecast covering the next `forecast_months` months.
    ///
    /// Requires options with `seasonal_forecast` set and `forecast_months`
    /// between 1 and 6. The returned window starts when the response arrives.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use open_meteo::{Location, OpenMeteo, OpenMeteoError, Options};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), OpenMeteoError> {
    /// let client = OpenMeteo::builder()
    ///     .base_url("https://seasonal-api.open-meteo.com/v1/seasonal")
    ///     .build()?;
    /// let options = Options::builder().seasonal_forecast(true).forecast_months(3).build();
    /// let seasonal = client
    ///     .seasonal()
    ///     .location(Location::new(40.71, -74.01))
    ///     .options(&options)
    ///     .call()
    ///     .await?;
    /// println!("{} .. {}", seasonal.start_date, seasonal.end_date);
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn seasonal(
        &self,
        location: Location,
        options: Option<&Options>,
        cancel: Option<&CancellationToken>,
    ) -> Result<SeasonalForecast, OpenMeteoError> {
        let options = require_options(options)?;
        let months = validate_seasonal(options)?;

        let body = self.fetch(location, Some(options), cancel).await?;
        let forecast = parse_forecast_body(&body)?;

        let start_date = Utc::now();
        Ok(SeasonalForecast {
            start_date,
            end_date: window_end(start_date, months)?,
            forecast,
        })
    }
}
