//! Cache Statistics Module
//!
//! Tracks preload cache reads: hits, misses and stale evictions.

use serde::Serialize;

// == Preload Stats ==
/// Tracks preload cache performance metrics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PreloadStats {
    /// Reads served from a fresh entry
    pub hits: u64,
    /// Reads that found nothing servable (absent or stale)
    pub misses: u64,
    /// Entries dropped because they were read or swept while stale
    pub stale_evictions: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl PreloadStats {
    // == Constructor ==
    /// Creates a new PreloadStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no reads have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_stale_evictions(&mut self, count: usize) {
        self.stale_evictions += count as u64;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
