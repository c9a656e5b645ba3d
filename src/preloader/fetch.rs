//! Fetch seam and its reqwest implementation.

use std::future::Future;

use reqwest::Client;
use tracing::debug;

use crate::error::{PreloadError, Result};

/// Header marking a request as speculative.
pub const PRELOAD_HEADER: &str = "X-Requested-With";

/// Fetches one URL as text.
///
/// Implementations report non-success statuses as [`PreloadError::Status`].
/// Timeouts are applied by the caller, which drops the returned future when
/// the budget runs out.
pub trait Fetch: Send + Sync + 'static {
    fn fetch_text(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// HTTP fetcher backed by a shared reqwest client.
///
/// Absolute `http(s)://` URLs are used as given; anything else is treated as
/// a path relative to `base_url`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    /// Create a fetcher resolving relative paths against `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("textbook_preload/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PreloadError::Internal(e.to_string()))?;

        Ok(Self::with_client(client, base_url))
    }

    /// Create a fetcher around an existing client
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a preload target to an absolute URL
    pub fn resolve(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            return url.to_string();
        }

        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            url.trim_start_matches('/')
        )
    }
}

impl Fetch for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let target = self.resolve(url);
        debug!("Preloading: {}", target);

        let response = self
            .client
            .get(&target)
            .header(PRELOAD_HEADER, "preload")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PreloadError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}
