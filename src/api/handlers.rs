//! API Handlers
//!
//! HTTP request handlers for each preloader endpoint.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::config::Config;
use crate::error::{PreloadError, Result};
use crate::models::{
    ChaptersRequest, ChaptersResponse, ClearResponse, ContentQuery, ContentResponse,
    HealthResponse, PreloadRequest, PreloadResponse, StatsResponse,
};
use crate::preloader::{ContentPreloader, Fetch, HttpFetcher};

/// Application state shared across all handlers.
pub struct AppState<F = HttpFetcher> {
    pub preloader: ContentPreloader<F>,
}

impl<F> Clone for AppState<F> {
    fn clone(&self) -> Self {
        Self {
            preloader: self.preloader.clone(),
        }
    }
}

impl<F: Fetch> AppState<F> {
    pub fn new(preloader: ContentPreloader<F>) -> Self {
        Self { preloader }
    }
}

impl AppState<HttpFetcher> {
    /// Creates a new AppState from configuration.
    ///
    /// Builds the HTTP fetcher and preloader from the Config.
    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher = HttpFetcher::new(config.preload_base_url.clone())?;
        Ok(Self::new(ContentPreloader::new(
            fetcher,
            config.preloader_config(),
        )))
    }
}

/// Handler for GET /content?url=<u>
///
/// Serves a fresh preloaded entry without fetching anything.
pub async fn content_handler<F: Fetch>(
    State(state): State<AppState<F>>,
    Query(query): Query<ContentQuery>,
) -> Result<Json<ContentResponse>> {
    match state.preloader.get_preloaded_content(&query.url).await {
        Some(data) => Ok(Json(ContentResponse::new(query.url, data))),
        None => Err(PreloadError::NotFound(query.url)),
    }
}

/// Handler for DELETE /content
pub async fn clear_handler<F: Fetch>(State(state): State<AppState<F>>) -> Json<ClearResponse> {
    let cleared = state.preloader.clear_preloaded_content().await;
    Json(ClearResponse::new(cleared))
}

/// Handler for POST /preload
///
/// A failed preload is still a successful request; the body reports it.
pub async fn preload_handler<F: Fetch>(
    State(state): State<AppState<F>>,
    Json(req): Json<PreloadRequest>,
) -> Result<Json<PreloadResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(PreloadError::InvalidRequest(error_msg));
    }

    let options = req.options(state.preloader.default_options());
    let outcome = state.preloader.preload_content(&req.url, options).await;

    Ok(Json(PreloadResponse::from_outcome(req.url, &outcome)))
}

/// Handler for POST /preload/chapters
pub async fn chapters_handler<F: Fetch>(
    State(state): State<AppState<F>>,
    Json(req): Json<ChaptersRequest>,
) -> Json<ChaptersResponse> {
    let report = state.preloader.preload_chapters(req.urls).await;
    Json(ChaptersResponse::from(&report))
}

/// Handler for GET /stats
pub async fn stats_handler<F: Fetch>(State(state): State<AppState<F>>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.preloader.stats().await))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
