//! Preloader Module
//!
//! Best-effort speculative fetching of likely-next resources (search index,
//! common API endpoints, predicted next chapters) into the preload cache.
//!
//! Nothing in this module returns an error to its caller: failed preloads are
//! logged at warning level and reported as [`PreloadOutcome::Failed`].

mod content;
mod fetch;
mod options;
mod outcome;

pub use content::ContentPreloader;
pub use fetch::{Fetch, HttpFetcher, PRELOAD_HEADER};
pub use options::{PreloadOptions, PreloaderConfig, API_ENDPOINTS, SEARCH_INDEX_PATH};
pub use outcome::{PreloadFailure, PreloadOutcome, PreloadReport, SettledPreload};

#[cfg(test)]
pub(crate) mod testing;
