//! HTTP client for the endoflife.date API.
//!
//! One attempt at the v1 product endpoint, then one at the legacy
//! `{slug}.json` endpoint. No caching and no further retries.

use super::mapping::ProductSlug;
use super::response::{ProductMetadata, ReleaseFeed};
use crate::error::{ApiErrorKind, EolError, ErrorContext, Result};
use std::time::Duration;

// ============================================================================
// Configuration
// ============================================================================

/// Default API root, without a trailing slash.
pub const DEFAULT_BASE_URL: &str = "https://endoflife.date/api";

/// Per-request timeout ceiling.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the lifecycle client.
#[derive(Debug, Clone)]
pub struct LifecycleClientConfig {
    /// API root; endpoints are built beneath it
    pub base_url: String,
    /// HTTP request timeout
    pub timeout: Duration,
    /// User-Agent header sent with each request
    pub user_agent: String,
}

impl Default for LifecycleClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }
}

/// `eol-lookup/<version>`
#[must_use]
pub fn default_user_agent() -> String {
    concat!("eol-lookup/", env!("CARGO_PKG_VERSION")).to_string()
}

// ============================================================================
// Transport
// ============================================================================

/// Blocking GET returning the response body of a 2xx reply.
///
/// Anything else (non-2xx status, timeout, connection failure) is an error.
pub trait HttpTransport {
    fn get(&self, url: &str) -> std::result::Result<String, ApiErrorKind>;
}

/// `reqwest` blocking transport.
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl ReqwestTransport {
    /// Build a transport with the configured timeout and User-Agent.
    pub fn new(config: &LifecycleClientConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                EolError::api("building HTTP client", ApiErrorKind::Network(e.to_string()))
            })?;
        Ok(Self {
            client,
            timeout_secs: config.timeout.as_secs(),
        })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &str) -> std::result::Result<String, ApiErrorKind> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| self.classify(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiErrorKind::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().map_err(|e| self.classify(&e))
    }
}

impl ReqwestTransport {
    fn classify(&self, err: &reqwest::Error) -> ApiErrorKind {
        if err.is_timeout() {
            ApiErrorKind::Timeout(self.timeout_secs)
        } else {
            ApiErrorKind::Network(err.to_string())
        }
    }
}

// ============================================================================
// Client
// ============================================================================

/// Which endpoint generation served a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET {base}/v1/products/{slug}/`
    Primary,
    /// `GET {base}/{slug}.json`
    Legacy,
}

/// A decoded product response and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductResponse {
    pub feed: ReleaseFeed,
    pub endpoint: Endpoint,
}

/// Client for the lifecycle API over any [`HttpTransport`].
pub struct LifecycleClient<T = ReqwestTransport> {
    config: LifecycleClientConfig,
    transport: T,
}

impl LifecycleClient<ReqwestTransport> {
    /// Create a client backed by `reqwest`.
    pub fn new(config: LifecycleClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: HttpTransport> LifecycleClient<T> {
    /// Create a client over a custom transport.
    pub fn with_transport(config: LifecycleClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// The client configuration.
    pub fn config(&self) -> &LifecycleClientConfig {
        &self.config
    }

    /// URL of the v1 product endpoint.
    #[must_use]
    pub fn primary_url(&self, slug: &ProductSlug) -> String {
        format!("{}/v1/products/{slug}/", self.base())
    }

    /// URL of the legacy product endpoint.
    #[must_use]
    pub fn legacy_url(&self, slug: &ProductSlug) -> String {
        format!("{}/{slug}.json", self.base())
    }

    fn base(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    /// Fetch a product's releases, falling back to the legacy endpoint once.
    pub fn fetch_product(&self, slug: &ProductSlug) -> Result<ProductResponse> {
        match self.fetch_feed(&self.primary_url(slug)) {
            Ok(feed) => {
                return Ok(ProductResponse {
                    feed,
                    endpoint: Endpoint::Primary,
                })
            }
            Err(e) => {
                tracing::debug!("Primary endpoint failed for '{slug}': {e}, trying legacy");
            }
        }

        let feed = self
            .fetch_feed(&self.legacy_url(slug))
            .with_context(|| format!("product '{slug}'"))?;
        Ok(ProductResponse {
            feed,
            endpoint: Endpoint::Legacy,
        })
    }

    /// Fetch the metadata the v1 endpoint publishes for a product.
    ///
    /// A failed request yields empty metadata; the row formatter then falls
    /// back to the raw product name and the `"null"` category.
    pub fn fetch_label(&self, slug: &ProductSlug) -> ProductMetadata {
        match self.fetch_feed(&self.primary_url(slug)) {
            Ok(feed) => feed.metadata(),
            Err(e) => {
                tracing::debug!("No metadata for '{slug}': {e}");
                ProductMetadata::default()
            }
        }
    }

    fn fetch_feed(&self, url: &str) -> Result<ReleaseFeed> {
        tracing::debug!("GET {url}");
        self.transport
            .get(url)
            .and_then(|body| ReleaseFeed::parse(&body))
            .map_err(|e| EolError::api(url, e))
    }
}
