//! # Fun-Fact Infrastructure
//!
//! This crate provides a unified interface for fetching short text facts about
//! numbers from an external numeric-trivia service, with a process-wide cache
//! in front of the network.
//!
//! ## Key Features
//! - **Lookup-or-fetch**: cache hits never touch the network; misses perform a
//!   single outbound request and store the body verbatim.
//! - **Builder Pattern**: fluent API for configuring the base URL, timeout, and
//!   cache capacity.
//! - **Thread-Safe**: the client clones cheaply and may be shared across request
//!   handlers; the cache supports concurrent reads and writes.
//!
//! Concurrent misses for the same key are *not* deduplicated: two in-flight
//! requests may both fetch and both write. Values for a given key are stable
//! across fetches, so last-write-wins is harmless.
//!
//! ## Example
//!
//! ```rust,no_run
//! use numclass_facts::{FactsClient, FactsError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), FactsError> {
//!     let facts = FactsClient::builder()
//!         .base_url("http://numbersapi.com")
//!         .init()?;
//!
//!     let fact = facts.fun_fact(42).await?;
//!     println!("{fact}");
//!     Ok(())
//! }
//! ```

mod error;

pub use error::FactsError;

use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};
use url::Url;

/// Topic segment appended to every outbound request path.
const FACT_TOPIC: &str = "math";
/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Default upper bound on cached facts.
const DEFAULT_CACHE_CAPACITY: u64 = 100_000;

/// Inner state of the [`FactsClient`] wrapper.
#[derive(Debug)]
struct FactsClientInner {
    http: reqwest::Client,
    cache: Cache<i64, String>,
    base_url: String,
}

/// Cached HTTP client for the numeric-trivia service.
///
/// Cloning is cheap (a single `Arc` bump); all clones share one cache.
#[derive(Debug, Clone)]
pub struct FactsClient {
    inner: Arc<FactsClientInner>,
}

impl FactsClient {
    /// Creates a new [`FactsClientBuilder`].
    pub fn builder() -> FactsClientBuilder {
        FactsClientBuilder::default()
    }

    /// Returns a fun fact about `number`, fetching it on first use.
    ///
    /// On a cache hit the stored value is returned with no external call.
    /// On a miss, performs `GET {base_url}/{number}/math`, caches the
    /// plain-text body keyed by `number`, and returns it. Failed fetches are
    /// never cached.
    ///
    /// # Errors
    /// * [`FactsError::Request`] if the outbound call fails at the transport
    ///   level (connection refused, timeout, body read).
    /// * [`FactsError::Status`] if the service answers with a non-2xx status.
    pub async fn fun_fact(&self, number: i64) -> Result<String, FactsError> {
        if let Some(fact) = self.inner.cache.get(&number).await {
            trace!(number, "fun fact served from cache");
            return Ok(fact);
        }

        let url = format!("{}/{number}/{FACT_TOPIC}", self.inner.base_url);
        debug!(number, %url, "fetching fun fact");

        let response = self.inner.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FactsError::Status { status: status.as_u16(), number });
        }

        let fact = response.text().await?;
        self.inner.cache.insert(number, fact.clone()).await;
        Ok(fact)
    }

    /// Number of facts currently cached (approximate until pending tasks drain).
    #[must_use]
    pub fn cached_facts(&self) -> u64 {
        self.inner.cache.entry_count()
    }
}

/// A fluent builder for configuring a [`FactsClient`].
///
/// The base URL is mandatory; timeout and cache capacity fall back to
/// sensible defaults.
#[must_use = "builders do nothing unless you call .init()"]
#[derive(Debug, Default)]
pub struct FactsClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    cache_capacity: Option<u64>,
}

impl FactsClientBuilder {
    /// Sets the base URL of the fact service (e.g. `http://numbersapi.com`).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the per-request timeout.
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the maximum number of cached facts.
    pub const fn cache_capacity(mut self, capacity: u64) -> Self {
        self.cache_capacity = Some(capacity);
        self
    }

    /// Consumes the builder and constructs the client.
    ///
    /// # Errors
    /// * [`FactsError::Validation`] if the base URL is missing or does not
    ///   parse as an absolute URL.
    /// * [`FactsError::Request`] if the underlying HTTP client cannot be
    ///   constructed.
    pub fn init(self) -> Result<FactsClient, FactsError> {
        let base_url = self
            .base_url
            .ok_or(FactsError::Validation { message: "Fact service base URL not provided".into() })?;

        Url::parse(&base_url).map_err(|e| FactsError::Validation {
            message: format!("Invalid fact service base URL `{base_url}`: {e}").into(),
        })?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()?;

        let cache = Cache::new(self.cache_capacity.unwrap_or(DEFAULT_CACHE_CAPACITY));

        Ok(FactsClient {
            inner: Arc::new(FactsClientInner {
                http,
                cache,
                base_url: base_url.trim_end_matches('/').to_owned(),
            }),
        })
    }
}
