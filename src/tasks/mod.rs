//! Background Tasks Module
//!
//! Tasks spawned by the owning process at startup.
//!
//! # Tasks
//! - Startup preloads: warms the API endpoints and the search index once
//! - Stale sweep: drops stale preload entries at a configured interval

mod startup;
mod sweep;

pub use startup::spawn_startup_preloads;
pub use sweep::spawn_sweep_task;
