//! Textbook Preload - speculative content preloading for the textbook site
//!
//! Warms likely-next resources (search index, common API endpoints,
//! predicted next chapters) into a short-lived URL cache. Preloading is
//! best-effort: failures are logged and never reach the caller.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod preloader;
pub mod tasks;

pub use api::AppState;
pub use client::ApiClient;
pub use config::Config;
pub use error::{PreloadError, Result};
pub use preloader::{ContentPreloader, HttpFetcher, PreloadOptions, PreloadOutcome};
pub use tasks::{spawn_startup_preloads, spawn_sweep_task};
