//! HTTP client for the upstream bookings API
//!
//! Forwards a `QueryParams` value as the URL query and decodes the reply. No
//! filtering or pagination happens here. Replies are cached per query string
//! for the configured TTL.

use dashmap::DashMap;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::time::{Duration, Instant};

use crate::config::{self, ServerConfig};
use crate::domain::models::{Booking, BookingPage, QueryParams};
use crate::shared::errors::{AppError, Result};
use crate::shared::logging;

static SHARED: OnceCell<BookingsApi> = OnceCell::new();

/// Upper bound on cached pages within one TTL window
const MAX_CACHED_PAGES: usize = 512;

/// Cached page with timestamp for TTL
struct CachedPage {
    page: BookingPage,
    cached_at: Instant,
}

/// Upstream replies either with a page object or with a bare list
#[derive(Deserialize)]
#[serde(untagged)]
enum UpstreamBody {
    List(Vec<Booking>),
    Page(BookingPage),
}

impl From<UpstreamBody> for BookingPage {
    fn from(body: UpstreamBody) -> Self {
        match body {
            UpstreamBody::Page(page) => page,
            UpstreamBody::List(bookings) => BookingPage {
                total: Some(bookings.len() as u64),
                bookings,
                page: None,
                limit: None,
            },
        }
    }
}

pub struct BookingsApi {
    client: reqwest::Client,
    url: String,
    token: Option<String>,
    cache_ttl: Option<Duration>,
    cache: DashMap<String, CachedPage>,
}

impl BookingsApi {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        Self::with_settings(
            config.bookings_url(),
            config.api_token.clone(),
            config.cache_ttl(),
            config.timeout(),
        )
    }

    pub fn with_settings(
        url: String,
        token: Option<String>,
        cache_ttl: Option<Duration>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url,
            token,
            cache_ttl,
            cache: DashMap::new(),
        })
    }

    /// Process-wide client built from the global configuration
    pub fn shared() -> Result<&'static BookingsApi> {
        SHARED.get_or_try_init(|| BookingsApi::new(config::get()?))
    }

    pub async fn fetch(&self, query: &QueryParams) -> Result<BookingPage> {
        let key = query.to_query_string();

        if let Some(page) = self.get_cached(&key) {
            logging::log_cache_hit(&key);
            return Ok(page);
        }

        let url = format!("{}?{}", self.url, key);
        logging::log_upstream_request(&url);

        let page = self.request(&url).await.inspect_err(|e| {
            logging::log_upstream_error(&url, &e.to_string());
        })?;

        logging::log_upstream_result(&url, page.bookings.len());
        self.set_cached(key, page.clone());
        Ok(page)
    }

    async fn request(&self, url: &str) -> Result<BookingPage> {
        let mut request = self.client.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AppError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let body: UpstreamBody =
            serde_json::from_str(&body).map_err(|e| AppError::Decode(e.to_string()))?;
        Ok(body.into())
    }

    fn get_cached(&self, key: &str) -> Option<BookingPage> {
        let ttl = self.cache_ttl?;
        if let Some(entry) = self.cache.get(key) {
            if entry.cached_at.elapsed() < ttl {
                return Some(entry.page.clone());
            }
            // Expired
            drop(entry);
            self.cache.remove(key);
        }
        None
    }

    fn set_cached(&self, key: String, page: BookingPage) {
        let Some(ttl) = self.cache_ttl else {
            return;
        };

        // Every distinct query string is a new key, so sweep on write
        self.cache.retain(|_, entry| entry.cached_at.elapsed() < ttl);
        if self.cache.len() >= MAX_CACHED_PAGES {
            let oldest = self
                .cache
                .iter()
                .min_by_key(|entry| entry.cached_at)
                .map(|entry| entry.key().clone());
            if let Some(oldest) = oldest {
                self.cache.remove(&oldest);
            }
        }

        self.cache.insert(
            key,
            CachedPage {
                page,
                cached_at: Instant::now(),
            },
        );
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}
