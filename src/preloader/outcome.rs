//! Outcomes of best-effort preloads.

use serde::Serialize;

use crate::error::PreloadError;

/// Why a preload produced nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreloadFailure {
    /// Empty URL or zero timeout
    InvalidRequest { message: String },
    /// No settlement within the budget; the request was cancelled
    Timeout { timeout_ms: u64 },
    /// Non-success HTTP status
    Status { status: u16 },
    /// Transport, decode or other failure
    Network { message: String },
    /// The preload task itself did not complete
    Aborted,
}

impl From<PreloadError> for PreloadFailure {
    fn from(e: PreloadError) -> Self {
        match e {
            PreloadError::InvalidRequest(message) => PreloadFailure::InvalidRequest { message },
            PreloadError::Timeout(timeout_ms) => PreloadFailure::Timeout { timeout_ms },
            PreloadError::Status(status) => PreloadFailure::Status { status },
            other => PreloadFailure::Network {
                message: other.to_string(),
            },
        }
    }
}

impl std::fmt::Display for PreloadFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreloadFailure::InvalidRequest { message } => write!(f, "invalid request: {}", message),
            PreloadFailure::Timeout { timeout_ms } => write!(f, "timed out after {}ms", timeout_ms),
            PreloadFailure::Status { status } => write!(f, "Preload failed: {}", status),
            PreloadFailure::Network { message } => write!(f, "{}", message),
            PreloadFailure::Aborted => write!(f, "preload task aborted"),
        }
    }
}

/// Result of one preload. Failures are values, never errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreloadOutcome {
    /// Fetched over the network
    Fetched(String),
    /// Served from a fresh cache entry without a request
    Cached(String),
    Failed(PreloadFailure),
}

impl PreloadOutcome {
    /// The payload, or `None` for a failed preload.
    pub fn data(&self) -> Option<&str> {
        match self {
            PreloadOutcome::Fetched(data) | PreloadOutcome::Cached(data) => Some(data),
            PreloadOutcome::Failed(_) => None,
        }
    }

    pub fn into_data(self) -> Option<String> {
        match self {
            PreloadOutcome::Fetched(data) | PreloadOutcome::Cached(data) => Some(data),
            PreloadOutcome::Failed(_) => None,
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, PreloadOutcome::Failed(_))
    }

    pub fn failure(&self) -> Option<&PreloadFailure> {
        match self {
            PreloadOutcome::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Short status label: `fetched`, `cached` or `failed`.
    pub fn label(&self) -> &'static str {
        match self {
            PreloadOutcome::Fetched(_) => "fetched",
            PreloadOutcome::Cached(_) => "cached",
            PreloadOutcome::Failed(_) => "failed",
        }
    }
}

/// Settlement of one preload within a fan-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettledPreload {
    pub url: String,
    pub outcome: PreloadOutcome,
}

/// Settled results of a concurrent fan-out, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreloadReport {
    pub results: Vec<SettledPreload>,
}

impl PreloadReport {
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|r| r.url.as_str())
    }
}

impl FromIterator<SettledPreload> for PreloadReport {
    fn from_iter<I: IntoIterator<Item = SettledPreload>>(iter: I) -> Self {
        Self {
            results: iter.into_iter().collect(),
        }
    }
}
