//! Response DTOs for the local HTTP surface
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::PreloadStats;
use crate::preloader::{PreloadFailure, PreloadOutcome, PreloadReport};

/// Response body for `GET /content`
#[derive(Debug, Clone, Serialize)]
pub struct ContentResponse {
    pub url: String,
    pub data: String,
}

impl ContentResponse {
    pub fn new(url: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            data: data.into(),
        }
    }
}

/// Outcome of one preload, as returned by `POST /preload`
#[derive(Debug, Clone, Serialize)]
pub struct PreloadResponse {
    pub url: String,
    /// `fetched`, `cached` or `failed`
    pub status: &'static str,
    /// Payload size in bytes, 0 on failure
    pub bytes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<PreloadFailure>,
}

impl PreloadResponse {
    pub fn from_outcome(url: impl Into<String>, outcome: &PreloadOutcome) -> Self {
        Self {
            url: url.into(),
            status: outcome.label(),
            bytes: outcome.data().map(str::len).unwrap_or(0),
            error: outcome.failure().cloned(),
        }
    }
}

/// Response body for `POST /preload/chapters`
#[derive(Debug, Clone, Serialize)]
pub struct ChaptersResponse {
    pub results: Vec<PreloadResponse>,
    pub succeeded: usize,
    pub failed: usize,
}

impl From<&PreloadReport> for ChaptersResponse {
    fn from(report: &PreloadReport) -> Self {
        Self {
            results: report
                .results
                .iter()
                .map(|r| PreloadResponse::from_outcome(r.url.clone(), &r.outcome))
                .collect(),
            succeeded: report.succeeded(),
            failed: report.failed(),
        }
    }
}

/// Response body for `DELETE /content`
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub message: String,
    pub cleared: usize,
}

impl ClearResponse {
    pub fn new(cleared: usize) -> Self {
        Self {
            message: format!("Cleared {} preloaded entries", cleared),
            cleared,
        }
    }
}

/// Response body for the stats endpoint (`GET /stats`)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub stale_evictions: u64,
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<PreloadStats> for StatsResponse {
    fn from(stats: PreloadStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            stale_evictions: stats.stale_evictions,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the health endpoint (`GET /health`)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
