//! Request and Response models for the local HTTP surface
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{ChaptersRequest, ContentQuery, PreloadRequest};
pub use responses::{
    ChaptersResponse, ClearResponse, ContentResponse, ErrorResponse, HealthResponse,
    PreloadResponse, StatsResponse,
};
