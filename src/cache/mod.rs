//! Cache Module
//!
//! Provides the URL-keyed preload cache with a freshness window and lazy
//! eviction of stale entries.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, PreloadEntry};
pub use stats::PreloadStats;
pub use store::PreloadCache;

// == Public Constants ==
/// Age in milliseconds after which a preloaded entry is stale (5 minutes)
pub const FRESHNESS_WINDOW_MS: u64 = 300_000;
