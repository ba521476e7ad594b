//! Unit choices accepted by the API. Leaving a unit unset keeps the server default
//! (celsius, km/h, millimetres).

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub(crate) fn as_query_value(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindspeedUnit {
    /// Kilometres per hour.
    Kmh,
    /// Metres per second.
    Ms,
    /// Miles per hour.
    Mph,
    /// Knots.
    Kn,
}

impl WindspeedUnit {
    pub(crate) fn as_query_value(&self) -> &'static str {
        match self {
            WindspeedUnit::Kmh => "kmh",
            WindspeedUnit::Ms => "ms",
            WindspeedUnit::Mph => "mph",
            WindspeedUnit::Kn => "kn",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrecipitationUnit {
    Mm,
    Inch,
}

impl PrecipitationUnit {
    pub(crate) fn as_query_value(&self) -> &'static str {
        match self {
            PrecipitationUnit::Mm => "mm",
            PrecipitationUnit::Inch => "inch",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}

impl fmt::Display for WindspeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}

impl fmt::Display for PrecipitationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}
