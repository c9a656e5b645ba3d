//! Request DTOs for the local HTTP surface
//!
//! Defines the structure of incoming HTTP request bodies and queries.

use std::time::Duration;

use serde::Deserialize;

use crate::preloader::PreloadOptions;

/// Request body for `POST /preload`
///
/// # Fields
/// - `url`: Resource to preload
/// - `timeout_ms`: Optional budget in milliseconds (uses the configured default if absent)
/// - `cache`: Optional flag, defaults to caching the result
#[derive(Debug, Clone, Deserialize)]
pub struct PreloadRequest {
    pub url: String,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    #[serde(default)]
    pub cache: Option<bool>,
}

impl PreloadRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.url.trim().is_empty() {
            return Some("URL cannot be empty".to_string());
        }
        if self.timeout_ms == Some(0) {
            return Some("Timeout must be a positive number of milliseconds".to_string());
        }
        None
    }

    /// Merges the request over `defaults`.
    pub fn options(&self, defaults: PreloadOptions) -> PreloadOptions {
        PreloadOptions {
            timeout: self
                .timeout_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.timeout),
            cache: self.cache.unwrap_or(defaults.cache),
        }
    }
}

/// Request body for `POST /preload/chapters`
#[derive(Debug, Clone, Deserialize)]
pub struct ChaptersRequest {
    /// Candidate next-chapter URLs, most likely first
    pub urls: Vec<String>,
}

/// Query string of `GET /content`
#[derive(Debug, Clone, Deserialize)]
pub struct ContentQuery {
    pub url: String,
}
