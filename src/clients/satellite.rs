use crate::clients::with_default_metrics;
use crate::series::body::parse_satellite_body;
use crate::types::location::Location;
use crate::types::options::Options;
use crate::types::satellite::{SatelliteData, DEFAULT_SATELLITE_METRICS};
use crate::{OpenMeteo, OpenMeteoError};
use bon::bon;
use tokio_util::sync::CancellationToken;

#[bon]
impl OpenMeteo {
    /// Fetches satellite-derived readings. Requests `cloud_cover`, `infrared`,
    /// `visible_light` and `water_vapor` unless `satellite_metrics` names others.
    #[builder]
    pub async fn satellite(
        &self,
        location: Location,
        options: Option<&Options>,
        cancel: Option<&CancellationToken>,
    ) -> Result<SatelliteData, OpenMeteoError> {
        let options =
            with_default_metrics(options, |o| &mut o.satellite_metrics, &DEFAULT_SATELLITE_METRICS);
        let body = self.fetch(location, Some(&options), cancel).await?;
        Ok(parse_satellite_body(&body)?)
    }
}
