//! Configuration Module
//!
//! Handles loading and managing preloader configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::preloader::PreloaderConfig;

/// Default backend base URL when none is configured.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Process configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend API base URL used by the API client
    pub api_url: String,
    /// Base URL that relative preload paths are resolved against
    pub preload_base_url: String,
    /// Freshness window in milliseconds
    pub freshness_window_ms: u64,
    /// Default preload timeout in milliseconds
    pub preload_timeout_ms: u64,
    /// Per-chapter preload timeout in milliseconds
    pub chapter_timeout_ms: u64,
    /// Per-endpoint preload timeout in milliseconds
    pub endpoint_timeout_ms: u64,
    /// Search index preload timeout in milliseconds
    pub search_index_timeout_ms: u64,
    /// Number of chapters preloaded per call
    pub max_chapter_preloads: usize,
    /// Local HTTP server port
    pub server_port: u16,
    /// Stale sweep interval in seconds, 0 disables the sweeper
    pub sweep_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `REACT_APP_API_URL` / `API_URL` - Backend base URL (default: http://127.0.0.1:8000)
    /// - `PRELOAD_BASE_URL` - Base for relative preload paths (default: the API URL)
    /// - `FRESHNESS_WINDOW_MS` - Freshness window (default: 300000)
    /// - `PRELOAD_TIMEOUT_MS` - Default preload timeout (default: 5000)
    /// - `CHAPTER_TIMEOUT_MS` - Chapter preload timeout (default: 3000)
    /// - `ENDPOINT_TIMEOUT_MS` - API endpoint preload timeout (default: 2000)
    /// - `SEARCH_INDEX_TIMEOUT_MS` - Search index timeout (default: 5000)
    /// - `MAX_CHAPTER_PRELOADS` - Chapters preloaded per call (default: 3)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SWEEP_INTERVAL` - Stale sweep frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_url = env::var("REACT_APP_API_URL")
            .or_else(|_| env::var("API_URL"))
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.api_url);
        let preload_base_url = env::var("PRELOAD_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| api_url.clone());

        Self {
            api_url,
            preload_base_url,
            freshness_window_ms: parse_env("FRESHNESS_WINDOW_MS", defaults.freshness_window_ms),
            preload_timeout_ms: parse_env("PRELOAD_TIMEOUT_MS", defaults.preload_timeout_ms),
            chapter_timeout_ms: parse_env("CHAPTER_TIMEOUT_MS", defaults.chapter_timeout_ms),
            endpoint_timeout_ms: parse_env("ENDPOINT_TIMEOUT_MS", defaults.endpoint_timeout_ms),
            search_index_timeout_ms: parse_env(
                "SEARCH_INDEX_TIMEOUT_MS",
                defaults.search_index_timeout_ms,
            ),
            max_chapter_preloads: parse_env("MAX_CHAPTER_PRELOADS", defaults.max_chapter_preloads),
            server_port: parse_env("SERVER_PORT", defaults.server_port),
            sweep_interval: parse_env("SWEEP_INTERVAL", defaults.sweep_interval),
        }
    }

    /// Builds the preloader settings from this configuration.
    pub fn preloader_config(&self) -> PreloaderConfig {
        PreloaderConfig {
            freshness_window: Duration::from_millis(self.freshness_window_ms),
            default_timeout: Duration::from_millis(self.preload_timeout_ms),
            chapter_timeout: Duration::from_millis(self.chapter_timeout_ms),
            endpoint_timeout: Duration::from_millis(self.endpoint_timeout_ms),
            search_index_timeout: Duration::from_millis(self.search_index_timeout_ms),
            max_chapter_preloads: self.max_chapter_preloads,
            ..PreloaderConfig::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            preload_base_url: DEFAULT_API_URL.to_string(),
            freshness_window_ms: 300_000,
            preload_timeout_ms: 5000,
            chapter_timeout_ms: 3000,
            endpoint_timeout_ms: 2000,
            search_index_timeout_ms: 5000,
            max_chapter_preloads: 3,
            server_port: 3000,
            sweep_interval: 60,
        }
    }
}

/// Reads and parses an env var, falling back on absence or parse failure.
fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
