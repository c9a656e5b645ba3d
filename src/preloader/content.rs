//! Content Preloader
//!
//! Owns the preload cache and runs every preload operation against it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::cache::{PreloadCache, PreloadStats};
use crate::error::PreloadError;
use crate::preloader::{
    Fetch, HttpFetcher, PreloadFailure, PreloadOptions, PreloadOutcome, PreloadReport,
    PreloaderConfig, SettledPreload,
};

/// Speculatively fetches resources and serves them from a short-lived cache.
///
/// Cloning is cheap: clones share the same cache and fetcher. The process
/// is expected to build one instance at startup and hand clones to whatever
/// needs it.
pub struct ContentPreloader<F = HttpFetcher> {
    fetcher: Arc<F>,
    cache: Arc<RwLock<PreloadCache>>,
    config: Arc<PreloaderConfig>,
}

impl<F> Clone for ContentPreloader<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            cache: Arc::clone(&self.cache),
            config: Arc::clone(&self.config),
        }
    }
}

impl<F: Fetch> ContentPreloader<F> {
    /// Creates a preloader with an empty cache.
    pub fn new(fetcher: F, config: PreloaderConfig) -> Self {
        let window_ms = config.freshness_window.as_millis() as u64;
        Self {
            fetcher: Arc::new(fetcher),
            cache: Arc::new(RwLock::new(PreloadCache::new(window_ms))),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &PreloaderConfig {
        &self.config
    }

    /// Options used when a caller does not pick its own.
    pub fn default_options(&self) -> PreloadOptions {
        PreloadOptions::with_timeout(self.config.default_timeout)
    }

    // == Preload Content ==
    /// Fetches `url` within `options.timeout`, caching the text on success
    /// when `options.cache` is set.
    ///
    /// A fresh cached entry is returned without issuing a request. Every
    /// failure (invalid input, non-success status, transport error,
    /// timeout) is logged and returned as [`PreloadOutcome::Failed`].
    pub async fn preload_content(&self, url: &str, options: PreloadOptions) -> PreloadOutcome {
        if let Err(e) = options.validate(url) {
            warn!("Rejected preload of '{}': {}", url, e);
            return PreloadOutcome::Failed(e.into());
        }

        let cached = {
            let mut cache = self.cache.write().await;
            cache.get(url)
        };
        if let Some(data) = cached {
            debug!("Preload of {} served from cache", url);
            return PreloadOutcome::Cached(data);
        }

        // Dropping the fetch future on expiry cancels the request
        let fetched = tokio::time::timeout(options.timeout, self.fetcher.fetch_text(url)).await;
        let result = match fetched {
            Ok(result) => result,
            Err(_) => Err(PreloadError::Timeout(options.timeout.as_millis() as u64)),
        };

        match result {
            Ok(data) => {
                if options.cache {
                    let mut cache = self.cache.write().await;
                    cache.insert(url.to_string(), data.clone());
                }
                debug!("Preloaded {} ({} bytes)", url, data.len());
                PreloadOutcome::Fetched(data)
            }
            Err(e) => {
                warn!("Failed to preload content from {}: {}", url, e);
                PreloadOutcome::Failed(e.into())
            }
        }
    }

    // == Preload Chapters ==
    /// Preloads the first few candidate next-chapter URLs concurrently.
    ///
    /// Only the first `max_chapter_preloads` URLs are requested; the rest
    /// are ignored. Each uses the chapter timeout.
    pub async fn preload_chapters<I, S>(&self, urls: I) -> PreloadReport
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let selected: Vec<String> = urls
            .into_iter()
            .take(self.config.max_chapter_preloads)
            .map(Into::into)
            .collect();

        self.settle_all(selected, self.config.chapter_timeout).await
    }

    // == Preload Search Index ==
    /// Warms the search index endpoint.
    pub async fn preload_search_index(&self) -> PreloadOutcome {
        let options = PreloadOptions::with_timeout(self.config.search_index_timeout);
        let outcome = self
            .preload_content(&self.config.search_index_path, options)
            .await;

        if let Some(failure) = outcome.failure() {
            warn!("Could not preload search index: {}", failure);
        }
        outcome
    }

    // == Preload API Endpoints ==
    /// Warms the commonly used API endpoints concurrently.
    ///
    /// Always completes, even when every endpoint fails.
    pub async fn preload_api_endpoints(&self) -> PreloadReport {
        let endpoints = self.config.api_endpoints.clone();
        let report = self.settle_all(endpoints, self.config.endpoint_timeout).await;

        if report.failed() > 0 {
            warn!(
                "API endpoint preload: {} of {} endpoints failed",
                report.failed(),
                report.len()
            );
        } else {
            debug!("API endpoint preload: {} endpoints warmed", report.len());
        }
        report
    }

    // == Clear ==
    /// Drops every cached entry. In-flight preloads are unaffected and may
    /// repopulate the cache when they settle.
    pub async fn clear_preloaded_content(&self) -> usize {
        let cleared = self.cache.write().await.clear();
        info!("Cleared {} preloaded entries", cleared);
        cleared
    }

    // == Get ==
    /// Returns cached data for `url` if present and fresh.
    ///
    /// A stale entry is evicted and `None` returned. Never issues a request.
    pub async fn get_preloaded_content(&self, url: &str) -> Option<String> {
        let mut cache = self.cache.write().await;
        cache.get(url)
    }

    /// Drops every stale entry. Returns how many were removed.
    pub async fn sweep_stale(&self) -> usize {
        self.cache.write().await.sweep_stale()
    }

    pub async fn stats(&self) -> PreloadStats {
        self.cache.read().await.stats()
    }

    /// Runs one preload per URL concurrently and waits for all of them.
    ///
    /// No preload cancels or delays another; results keep input order.
    async fn settle_all(&self, urls: Vec<String>, timeout: Duration) -> PreloadReport {
        let mut join_set = JoinSet::new();

        for (index, url) in urls.iter().cloned().enumerate() {
            let preloader = self.clone();
            join_set.spawn(async move {
                let outcome = preloader
                    .preload_content(&url, PreloadOptions::with_timeout(timeout))
                    .await;
                (index, outcome)
            });
        }

        let mut outcomes: Vec<Option<PreloadOutcome>> = vec![None; urls.len()];
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, outcome)) => outcomes[index] = Some(outcome),
                Err(e) => warn!("Preload task did not complete: {}", e),
            }
        }

        urls.into_iter()
            .zip(outcomes)
            .map(|(url, outcome)| SettledPreload {
                url,
                outcome: outcome.unwrap_or(PreloadOutcome::Failed(PreloadFailure::Aborted)),
            })
            .collect()
    }
}
