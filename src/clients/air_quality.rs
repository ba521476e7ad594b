use crate::clients::with_default_metrics;
use crate::series::body::parse_air_quality_body;
use crate::types::air_quality::{AirQualityData, DEFAULT_AIR_QUALITY_METRICS};
use crate::types::location::Location;
use crate::types::options::Options;
use crate::{OpenMeteo, OpenMeteoError};
use bon::bon;
use tokio_util::sync::CancellationToken;

#[bon]
impl OpenMeteo {
    /// Fetches air-quality readings.
    ///
    /// When `air_quality_metrics` is empty, `pm10`, `pm2_5`, `o3` and `no2` are
    /// requested. The caller's options are not modified.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use open_meteo::{Location, OpenMeteo, OpenMeteoError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), OpenMeteoError> {
    /// let client = OpenMeteo::new()?;
    /// let air = client.air_quality().location(Location::new(48.85, 2.35)).call().await?;
    /// println!("PM10: {:?}", air.pm10);
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn air_quality(
        &self,
        location: Location,
        options: Option<&Options>,
        cancel: Option<&CancellationToken>,
    ) -> Result<AirQualityData, OpenMeteoError> {
        let options = with_default_metrics(
            options,
            |o| &mut o.air_quality_metrics,
            &DEFAULT_AIR_QUALITY_METRICS,
        );
        let body = self.fetch(location, Some(&options), cancel).await?;
        Ok(parse_air_quality_body(&body)?)
    }
}
