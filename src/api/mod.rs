//! API Module
//!
//! HTTP handlers and routing for the local preloader surface.
//!
//! # Endpoints
//! - `GET /health` - Health check endpoint
//! - `GET /stats` - Preload cache statistics
//! - `GET /content?url=<u>` - Read preloaded content
//! - `DELETE /content` - Clear all preloaded content
//! - `POST /preload` - Preload one URL
//! - `POST /preload/chapters` - Preload candidate next chapters

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
