use crate::series::body::parse_forecast_body;
use crate::series::decoder::{DAILY, HOURLY};
use crate::types::forecast::Forecast;
use crate::types::location::Location;
use crate::types::options::Options;
use crate::{OpenMeteo, OpenMeteoError};
use bon::bon;
use tokio_util::sync::CancellationToken;

#[bon]
impl OpenMeteo {
    /// Fetches and decodes a weather forecast.
    ///
    /// Every metric named in `hourly_metrics` / `daily_metrics` is present in
    /// the returned series, empty when the server did not report it.
    ///
    /// # Arguments
    ///
    /// * `.location(Location)`: **Required.**
    /// * `.options(&Options)`: Optional. Units, timezone and metrics.
    /// * `.cancel(&CancellationToken)`: Optional.
    ///
    /// # Errors
    ///
    /// Any request error, or [`OpenMeteoError::Decode`] when the body is not a
    /// valid forecast (including malformed timestamps).
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use open_meteo::{Location, OpenMeteo, OpenMeteoError, Options};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), OpenMeteoError> {
    /// let client = OpenMeteo::new()?;
    /// let options = Options::builder()
    ///     .hourly_metrics(vec!["temperature_2m".to_string()])
    ///     .build();
    /// let forecast = client
    ///     .forecast()
    ///     .location(Location::new(52.52, 13.41))
    ///     .options(&options)
    ///     .call()
    ///     .await?;
    /// println!("{:?}", forecast.hourly.metric("temperature_2m").first());
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn forecast(
        &self,
        location: Location,
        options: Option<&Options>,
        cancel: Option<&CancellationToken>,
    ) -> Result<Forecast, OpenMeteoError> {
        let body = self.fetch(location, options, cancel).await?;
        let mut forecast = parse_forecast_body(&body)?;
        if let Some(options) = options {
            forecast.hourly.ensure_metrics(&HOURLY, &options.hourly_metrics);
            forecast.daily.ensure_metrics(&DAILY, &options.daily_metrics);
        }
        Ok(forecast)
    }
}
