//! Preload Cache Store Module
//!
//! URL-keyed map of preloaded payloads. Entries are served only while fresh;
//! a stale entry is dropped the first time it is read.

use std::collections::HashMap;

use crate::cache::{current_timestamp_ms, PreloadEntry, PreloadStats};

// == Preload Cache ==
/// In-memory, time-bounded cache keyed by URL.
#[derive(Debug)]
pub struct PreloadCache {
    /// URL to payload storage
    entries: HashMap<String, PreloadEntry>,
    /// Read statistics
    stats: PreloadStats,
    /// Age in milliseconds after which an entry is stale
    freshness_window_ms: u64,
}

impl PreloadCache {
    // == Constructor ==
    /// Creates an empty cache with the given freshness window.
    pub fn new(freshness_window_ms: u64) -> Self {
        Self {
            entries: HashMap::new(),
            stats: PreloadStats::new(),
            freshness_window_ms,
        }
    }

    pub fn freshness_window_ms(&self) -> u64 {
        self.freshness_window_ms
    }

    // == Insert ==
    /// Stores `data` for `url`, stamped with the current time.
    ///
    /// An existing entry for the same URL is overwritten.
    pub fn insert(&mut self, url: String, data: String) {
        self.insert_at(url, data, current_timestamp_ms());
    }

    /// Stores `data` for `url` with an explicit fetch timestamp.
    pub fn insert_at(&mut self, url: String, data: String, fetched_at: u64) {
        self.entries
            .insert(url, PreloadEntry::with_timestamp(data, fetched_at));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns the payload for `url` if present and fresh.
    ///
    /// A stale entry is removed and reported as absent.
    pub fn get(&mut self, url: &str) -> Option<String> {
        self.get_at(url, current_timestamp_ms())
    }

    /// Same as [`PreloadCache::get`], evaluated at `now_ms`.
    pub fn get_at(&mut self, url: &str, now_ms: u64) -> Option<String> {
        let fresh = match self.entries.get(url) {
            Some(entry) => entry.is_fresh_at(now_ms, self.freshness_window_ms),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if !fresh {
            self.entries.remove(url);
            self.stats.record_stale_evictions(1);
            self.stats.set_total_entries(self.entries.len());
            self.stats.record_miss();
            return None;
        }

        self.stats.record_hit();
        self.entries.get(url).map(|entry| entry.data.clone())
    }

    // == Clear ==
    /// Removes every entry. Returns the number of entries dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        self.stats.set_total_entries(0);
        count
    }

    // == Sweep Stale ==
    /// Removes all entries that are stale now. Returns the number removed.
    pub fn sweep_stale(&mut self) -> usize {
        self.sweep_stale_at(current_timestamp_ms())
    }

    /// Same as [`PreloadCache::sweep_stale`], evaluated at `now_ms`.
    pub fn sweep_stale_at(&mut self, now_ms: u64) -> usize {
        let window = self.freshness_window_ms;
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| entry.is_fresh_at(now_ms, window));

        let removed = before - self.entries.len();
        self.stats.record_stale_evictions(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> PreloadStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
