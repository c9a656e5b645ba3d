//! Backend API Client
//!
//! Typed access to the textbook backend: health check, chat queries and
//! search. Unlike the preloader, these calls propagate their errors to the
//! caller so user-facing code can display them.

mod api_client;
mod types;

pub use api_client::ApiClient;
pub use types::{ChatRequest, ChatResponse, SearchResponse, SearchResult};
