//! Stale Sweep Task
//!
//! Background task that periodically drops stale preload entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::preloader::{ContentPreloader, Fetch};

/// Spawns a background task that periodically removes stale entries.
///
/// Reads never serve stale entries anyway; the sweep only releases memory
/// held by entries nobody reads again.
///
/// # Arguments
/// * `preloader` - Preloader whose cache is swept
/// * `interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, used to abort it during shutdown.
pub fn spawn_sweep_task<F: Fetch>(
    preloader: ContentPreloader<F>,
    interval_secs: u64,
) -> JoinHandle<()> {
    spawn_sweep_task_every(preloader, Duration::from_secs(interval_secs))
}

fn spawn_sweep_task_every<F: Fetch>(
    preloader: ContentPreloader<F>,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting stale sweep task with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = preloader.sweep_stale().await;

            if removed > 0 {
                info!("Stale sweep: removed {} preloaded entries", removed);
            } else {
                debug!("Stale sweep: no stale entries found");
            }
        }
    })
}
