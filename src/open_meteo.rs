//! This module provides the main entry point of the crate, the [`OpenMeteo`] client.
//! A client owns its own response cache and rate limiter, so two clients in the
//! same process never share throttling state or cached data.

use crate::error::OpenMeteoError;
use crate::request::cache::ResponseCache;
use crate::request::executor::RequestExecutor;
use crate::request::rate_limiter::{RateLimiter, DEFAULT_REQUESTS_PER_SECOND};
use crate::types::location::Location;
use crate::types::options::Options;
use crate::utils::{request_url, with_api_key};
use bon::bon;
use log::debug;
use reqwest::{Client, Url};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Forecast endpoint used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";
/// Value of the `User-Agent` header when none is configured.
pub const DEFAULT_USER_AGENT: &str = "Open-Meteo_Rust_Client";
/// How long a successful response is served from the cache.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);
/// Timeout applied to the HTTP client the crate builds itself.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The client for the Open-Meteo API.
///
/// Every request goes through the same pipeline: the response cache is
/// consulted first, then a token is taken from the client's rate limiter
/// (10 requests per second by default), then the HTTP call is made and a
/// successful body is cached.
///
/// Create an instance with [`OpenMeteo::new()`] for the defaults or with
/// [`OpenMeteo::builder()`] to change them.
///
/// # Examples
///
/// ```rust
/// # use open_meteo::{OpenMeteo, OpenMeteoError};
/// # fn run() -> Result<(), OpenMeteoError> {
/// let client = OpenMeteo::new()?;
/// assert_eq!(client.base_url().as_str(), "https://api.open-meteo.com/v1/forecast");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct OpenMeteo {
    base_url: Url,
    api_key: Option<String>,
    executor: RequestExecutor,
}

#[bon]
impl OpenMeteo {
    /// Creates a client with the default endpoint, user agent, cache lifetime
    /// and rate.
    ///
    /// # Errors
    ///
    /// Returns [`OpenMeteoError::HttpClient`] if the underlying HTTP client
    /// cannot be initialised (for example when no TLS backend is available).
    pub fn new() -> Result<Self, OpenMeteoError> {
        Self::builder().build()
    }

    /// Creates a client with custom settings.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.base_url(&str)`: endpoint queried by every request. Defaults to [`DEFAULT_BASE_URL`].
    /// * `.user_agent(&str)`: `User-Agent` header. Defaults to [`DEFAULT_USER_AGENT`].
    /// * `.api_key(&str)`: sent as the `apikey` query parameter of commercial endpoints.
    /// * `.cache_ttl(Duration)`: lifetime of cached responses. Defaults to
    ///   [`DEFAULT_CACHE_TTL`]; `Duration::ZERO` disables caching.
    /// * `.requests_per_second(u32)`: client-side rate. Defaults to 10.
    /// * `.timeout(Duration)`: per-request timeout of the built-in HTTP client.
    ///   Defaults to [`DEFAULT_TIMEOUT`]; ignored when `.http_client()` is given.
    /// * `.http_client(reqwest::Client)`: bring your own transport.
    ///
    /// # Errors
    ///
    /// Returns [`OpenMeteoError::InvalidInput`] if the base URL does not parse and
    /// [`OpenMeteoError::HttpClient`] if the HTTP client cannot be built.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use open_meteo::{OpenMeteo, OpenMeteoError};
    /// # use std::time::Duration;
    /// # fn run() -> Result<(), OpenMeteoError> {
    /// let client = OpenMeteo::builder()
    ///     .base_url("https://archive-api.open-meteo.com/v1/archive")
    ///     .user_agent("weather-dashboard/1.0")
    ///     .cache_ttl(Duration::from_secs(3600))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = builder, finish_fn = build)]
    pub fn with_config(
        #[builder(into)] base_url: Option<String>,
        #[builder(into)] user_agent: Option<String>,
        #[builder(into)] api_key: Option<String>,
        cache_ttl: Option<Duration>,
        requests_per_second: Option<u32>,
        timeout: Option<Duration>,
        http_client: Option<Client>,
    ) -> Result<Self, OpenMeteoError> {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let parsed = Url::parse(&base_url)
            .map_err(|_| OpenMeteoError::invalid_input("base_url", &base_url))?;

        let http = match http_client {
            Some(client) => client,
            None => Client::builder()
                .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
                .build()
                .map_err(OpenMeteoError::HttpClient)?,
        };

        let executor = RequestExecutor::new(
            http,
            user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            cache_ttl.unwrap_or(DEFAULT_CACHE_TTL),
            RateLimiter::new(requests_per_second.unwrap_or(DEFAULT_REQUESTS_PER_SECOND)),
        );
        debug!("Created Open-Meteo client for {}", parsed);

        Ok(Self {
            base_url: parsed,
            api_key,
            executor,
        })
    }

    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.api_key = Some(key.into());
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The client's response cache.
    pub fn cache(&self) -> &ResponseCache {
        self.executor.cache()
    }

    /// Fetches the raw response body for a location.
    ///
    /// This is the request pipeline every typed method uses; call it directly
    /// to decode the body yourself.
    ///
    /// # Arguments
    ///
    /// * `.location(Location)`: **Required.**
    /// * `.options(&Options)`: Optional. Units, metrics, date range, ...
    /// * `.cancel(&CancellationToken)`: Optional. Aborts the rate-limit wait or
    ///   the HTTP call.
    ///
    /// # Errors
    ///
    /// See [`crate::ErrorKind`]: status errors, rate limiting (server side or a
    /// cancelled local wait), transport failures and cancellation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use open_meteo::{Location, OpenMeteo, OpenMeteoError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), OpenMeteoError> {
    /// let client = OpenMeteo::new()?;
    /// let body = client
    ///     .get()
    ///     .location(Location::new(52.52, 13.41))
    ///     .call()
    ///     .await?;
    /// println!("{}", String::from_utf8_lossy(&body));
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn get(
        &self,
        location: Location,
        options: Option<&Options>,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<u8>, OpenMeteoError> {
        self.fetch(location, options, cancel).await
    }

    pub(crate) async fn fetch(
        &self,
        location: Location,
        options: Option<&Options>,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<u8>, OpenMeteoError> {
        let url = request_url(&self.base_url, location, options);
        // Credentials stay out of the cache key and the logs.
        let cache_key = url.to_string();
        let url = with_api_key(&url, self.api_key.as_deref());
        Ok(self.executor.execute(url, &cache_key, cancel).await?)
    }
}
