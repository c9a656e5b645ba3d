//! Per-call preload options and preloader-wide settings.

use std::time::Duration;

use crate::cache::FRESHNESS_WINDOW_MS;
use crate::error::{PreloadError, Result};

/// Search index endpoint warmed at startup.
pub const SEARCH_INDEX_PATH: &str = "/api/v1/search/";

/// Commonly used endpoints warmed at startup.
pub const API_ENDPOINTS: [&str; 3] = ["/api/v1/health", "/api/v1/chapters/", "/api/v1/chat/"];

/// Options for a single preload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreloadOptions {
    /// Budget after which the request is cancelled
    pub timeout: Duration,
    /// Whether a successful result is stored in the cache
    pub cache: bool,
}

impl PreloadOptions {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }

    /// Fetch without storing the result.
    pub fn uncached(mut self) -> Self {
        self.cache = false;
        self
    }

    /// Rejects an empty URL or a zero timeout.
    pub fn validate(&self, url: &str) -> Result<()> {
        if url.trim().is_empty() {
            return Err(PreloadError::InvalidRequest("URL cannot be empty".to_string()));
        }
        if self.timeout.is_zero() {
            return Err(PreloadError::InvalidRequest(
                "Timeout must be a positive number of milliseconds".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for PreloadOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(5000),
            cache: true,
        }
    }
}

/// Settings shared by every operation of a [`ContentPreloader`](super::ContentPreloader).
#[derive(Debug, Clone)]
pub struct PreloaderConfig {
    pub freshness_window: Duration,
    pub default_timeout: Duration,
    pub chapter_timeout: Duration,
    pub endpoint_timeout: Duration,
    pub search_index_timeout: Duration,
    /// Candidate chapters beyond this count are ignored
    pub max_chapter_preloads: usize,
    pub search_index_path: String,
    pub api_endpoints: Vec<String>,
}

impl Default for PreloaderConfig {
    fn default() -> Self {
        Self {
            freshness_window: Duration::from_millis(FRESHNESS_WINDOW_MS),
            default_timeout: Duration::from_millis(5000),
            chapter_timeout: Duration::from_millis(3000),
            endpoint_timeout: Duration::from_millis(2000),
            search_index_timeout: Duration::from_millis(5000),
            max_chapter_preloads: 3,
            search_index_path: SEARCH_INDEX_PATH.to_string(),
            api_endpoints: API_ENDPOINTS.iter().map(|e| e.to_string()).collect(),
        }
    }
}
