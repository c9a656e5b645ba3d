//! Preload Entry Module
//!
//! Defines a single preloaded payload and its freshness check.

use std::time::{SystemTime, UNIX_EPOCH};

// == Preload Entry ==
/// A fetched payload together with the time the fetch completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreloadEntry {
    /// The fetched text payload
    pub data: String,
    /// Fetch completion timestamp (Unix milliseconds)
    pub fetched_at: u64,
}

impl PreloadEntry {
    // == Constructor ==
    /// Creates an entry stamped with the current time.
    pub fn new(data: String) -> Self {
        Self::with_timestamp(data, current_timestamp_ms())
    }

    /// Creates an entry with an explicit fetch timestamp.
    pub fn with_timestamp(data: String, fetched_at: u64) -> Self {
        Self { data, fetched_at }
    }

    // == Age ==
    /// Milliseconds elapsed between the fetch and `now_ms`.
    ///
    /// A timestamp in the future counts as age zero.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.fetched_at)
    }

    // == Is Fresh ==
    /// Checks whether the entry may still be served at `now_ms`.
    ///
    /// Boundary condition: an entry whose age equals the window is stale,
    /// so freshness holds strictly while `age < window`.
    pub fn is_fresh_at(&self, now_ms: u64, window_ms: u64) -> bool {
        self.age_ms(now_ms) < window_ms
    }

    /// Checks freshness against the current wall clock.
    pub fn is_fresh(&self, window_ms: u64) -> bool {
        self.is_fresh_at(current_timestamp_ms(), window_ms)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
///
/// A clock set before the epoch reads as zero.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
