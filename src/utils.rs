use crate::types::location::Location;
use crate::types::options::Options;
use chrono::NaiveDate;
use reqwest::Url;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Builds the query URL for a request, without credentials.
pub(crate) fn request_url(base: &Url, location: Location, options: Option<&Options>) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair("latitude", &format!("{:.6}", location.latitude()))
        .append_pair("longitude", &format!("{:.6}", location.longitude()))
        .append_pair("current_weather", "true");
    if let Some(options) = options {
        options.append_to(&mut url);
    }
    url
}

pub(crate) fn with_api_key(url: &Url, api_key: Option<&str>) -> Url {
    let mut url = url.clone();
    if let Some(key) = api_key.filter(|k| !k.is_empty()) {
        url.query_pairs_mut().append_pair("apikey", key);
    }
    url
}

pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}
