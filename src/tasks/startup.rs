//! Startup Preloads
//!
//! One-shot task that warms commonly used resources when the process starts.

use tokio::task::JoinHandle;
use tracing::info;

use crate::preloader::{ContentPreloader, Fetch};

/// Spawns a task that preloads the API endpoints and the search index
/// concurrently, then logs a summary.
///
/// Failures are absorbed by the preloader; the task always finishes
/// normally. The returned handle lets shutdown abort it while preloads are
/// still in flight.
pub fn spawn_startup_preloads<F: Fetch>(preloader: ContentPreloader<F>) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting startup preloads");

        let (endpoints, search_index) = tokio::join!(
            preloader.preload_api_endpoints(),
            preloader.preload_search_index()
        );

        info!(
            "Startup preloads finished: {}/{} API endpoints, search index {}",
            endpoints.succeeded(),
            endpoints.len(),
            search_index.label()
        );
    })
}
