/// A geographical coordinate in degrees.
///
/// No range checking is done here. Coordinates the API cannot serve are
/// reported by the server and surface as an API response error.
///
/// # Examples
///
/// ```
/// use open_meteo::Location;
///
/// let amsterdam = Location::new(52.3738, 4.8910);
/// assert_eq!(amsterdam.latitude(), 52.3738);
/// assert_eq!(amsterdam.longitude(), 4.8910);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    latitude: f64,
    longitude: f64,
}

impl Location {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl From<(f64, f64)> for Location {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}
