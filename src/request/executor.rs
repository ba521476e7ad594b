//! Runs a single request: cache lookup, rate-limit wait, HTTP call, status
//! classification and cache population.

use crate::request::cache::ResponseCache;
use crate::request::error::RequestError;
use crate::request::rate_limiter::RateLimiter;
use log::{debug, info, warn};
use reqwest::header::USER_AGENT;
use reqwest::{Client, StatusCode, Url};
use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Longest body excerpt kept in an API response error.
const BODY_SNIPPET_LIMIT: usize = 512;

#[derive(Debug)]
pub struct RequestExecutor {
    http: Client,
    user_agent: String,
    cache: ResponseCache,
    cache_ttl: Duration,
    limiter: RateLimiter,
}

/// Runs `fut` unless `cancel` fires first, in which case `None` is returned.
async fn cancellable<F: Future>(cancel: Option<&CancellationToken>, fut: F) -> Option<F::Output> {
    match cancel {
        Some(token) => tokio::select! {
            _ = token.cancelled() => None,
            output = fut => Some(output),
        },
        None => Some(fut.await),
    }
}

fn body_snippet(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.len() <= BODY_SNIPPET_LIMIT {
        return text.to_string();
    }
    let mut end = BODY_SNIPPET_LIMIT;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

impl RequestExecutor {
    pub fn new(
        http: Client,
        user_agent: String,
        cache_ttl: Duration,
        limiter: RateLimiter,
    ) -> Self {
        Self {
            http,
            user_agent,
            cache: ResponseCache::new(),
            cache_ttl,
            limiter,
        }
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    fn caching_enabled(&self) -> bool {
        !self.cache_ttl.is_zero()
    }

    /// Returns the body for `url`, from the cache when a fresh copy exists.
    ///
    /// `cache_key` identifies the request in the cache; it is also the form of
    /// the URL that is logged, so it should not contain credentials.
    pub async fn execute(
        &self,
        url: Url,
        cache_key: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<u8>, RequestError> {
        if self.caching_enabled() {
            if let Some(payload) = self.cache.get(cache_key) {
                debug!("Cache hit for {}", cache_key);
                return Ok(payload);
            }
            debug!("Cache miss for {}", cache_key);
        }

        self.limiter.acquire(cancel).await?;

        info!("Requesting {}", cache_key);
        let payload = cancellable(cancel, self.fetch(url, cache_key))
            .await
            .ok_or_else(|| RequestError::Cancelled {
                url: cache_key.to_string(),
            })??;

        if self.caching_enabled() {
            self.cache.put(cache_key, payload.clone(), self.cache_ttl);
        }
        Ok(payload)
    }

    async fn fetch(&self, url: Url, display_url: &str) -> Result<Vec<u8>, RequestError> {
        let transport = |source| RequestError::Transport {
            url: display_url.to_string(),
            source,
        };

        let response = self
            .http
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("Server rate limited request to {}", display_url);
            return Err(RequestError::RateLimitExceeded {
                message: format!("server responded {}", status_line(status)),
            });
        }

        let body = response.bytes().await.map_err(transport)?;

        if status != StatusCode::OK {
            warn!("HTTP {} for {}", status, display_url);
            return Err(RequestError::ApiResponse {
                status: status.as_u16(),
                message: format!("{} - {}", status_line(status), body_snippet(&body)),
            });
        }

        debug!("Received {} bytes for {}", body.len(), display_url);
        Ok(body.to_vec())
    }
}
