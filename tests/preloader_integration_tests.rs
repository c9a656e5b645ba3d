//! Integration Tests for the Content Preloader
//!
//! Runs the reqwest-backed preloader against a mock backend over real HTTP.

mod common;

use std::time::{Duration, Instant};

use textbook_preload::preloader::{PreloadFailure, PreloaderConfig};
use textbook_preload::{ContentPreloader, HttpFetcher, PreloadOptions, PreloadOutcome};

use common::{closed_base_url, spawn_backend};

fn preloader(base_url: &str, config: PreloaderConfig) -> ContentPreloader {
    let fetcher = HttpFetcher::new(base_url).unwrap();
    ContentPreloader::new(fetcher, config)
}

// == Preload Content ==

#[tokio::test]
async fn test_preload_content_fetches_and_caches() {
    let (base_url, backend) = spawn_backend().await;
    let preloader = preloader(&base_url, PreloaderConfig::default());

    let outcome = preloader
        .preload_content("/docs/ch1", PreloadOptions::default())
        .await;

    assert_eq!(outcome, PreloadOutcome::Fetched("page /docs/ch1".to_string()));
    assert_eq!(
        preloader.get_preloaded_content("/docs/ch1").await.as_deref(),
        Some("page /docs/ch1")
    );
    assert_eq!(backend.hits("/docs/ch1"), 1);
}

#[tokio::test]
async fn test_second_preload_within_window_skips_network() {
    let (base_url, backend) = spawn_backend().await;
    let preloader = preloader(&base_url, PreloaderConfig::default());

    preloader.preload_content("/docs/ch1", PreloadOptions::default()).await;
    let second = preloader
        .preload_content("/docs/ch1", PreloadOptions::default())
        .await;

    assert!(matches!(second, PreloadOutcome::Cached(_)));
    assert_eq!(backend.hits("/docs/ch1"), 1);
}

#[tokio::test]
async fn test_stale_entry_is_evicted_and_refetched() {
    let (base_url, backend) = spawn_backend().await;
    let config = PreloaderConfig {
        freshness_window: Duration::from_millis(100),
        ..PreloaderConfig::default()
    };
    let preloader = preloader(&base_url, config);

    preloader.preload_content("/docs/ch1", PreloadOptions::default()).await;
    tokio::time::sleep(Duration::from_millis(150)).await;

    assert_eq!(preloader.get_preloaded_content("/docs/ch1").await, None);

    let outcome = preloader
        .preload_content("/docs/ch1", PreloadOptions::default())
        .await;
    assert!(matches!(outcome, PreloadOutcome::Fetched(_)));
    assert_eq!(backend.hits("/docs/ch1"), 2);
}

#[tokio::test]
async fn test_error_status_is_absorbed() {
    let (base_url, _backend) = spawn_backend().await;
    let preloader = preloader(&base_url, PreloaderConfig::default());

    let outcome = preloader
        .preload_content("/docs/broken", PreloadOptions::default())
        .await;

    assert_eq!(
        outcome,
        PreloadOutcome::Failed(PreloadFailure::Status { status: 500 })
    );
    assert_eq!(preloader.get_preloaded_content("/docs/broken").await, None);
}

#[tokio::test]
async fn test_timeout_cancels_slow_request() {
    let (base_url, _backend) = spawn_backend().await;
    let preloader = preloader(&base_url, PreloaderConfig::default());

    let started = Instant::now();
    let outcome = preloader
        .preload_content("/docs/slow", PreloadOptions::with_timeout(Duration::from_millis(200)))
        .await;

    assert_eq!(
        outcome,
        PreloadOutcome::Failed(PreloadFailure::Timeout { timeout_ms: 200 })
    );
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_unreachable_backend_is_absorbed() {
    let preloader = preloader(&closed_base_url(), PreloaderConfig::default());

    let outcome = preloader
        .preload_content("/docs/ch1", PreloadOptions::default())
        .await;

    assert!(matches!(
        outcome,
        PreloadOutcome::Failed(PreloadFailure::Network { .. })
    ));
}

// == Preload Chapters ==

#[tokio::test]
async fn test_preload_chapters_never_requests_fourth() {
    let (base_url, backend) = spawn_backend().await;
    let preloader = preloader(&base_url, PreloaderConfig::default());

    let report = preloader
        .preload_chapters(["/docs/u1", "/docs/u2", "/docs/u3", "/docs/u4"])
        .await;

    assert_eq!(report.len(), 3);
    assert_eq!(report.succeeded(), 3);
    assert_eq!(backend.hits("/docs/u1"), 1);
    assert_eq!(backend.hits("/docs/u2"), 1);
    assert_eq!(backend.hits("/docs/u3"), 1);
    assert_eq!(backend.hits("/docs/u4"), 0);
}

#[tokio::test]
async fn test_preload_chapters_tolerates_slow_sibling() {
    let (base_url, _backend) = spawn_backend().await;
    let config = PreloaderConfig {
        chapter_timeout: Duration::from_millis(300),
        ..PreloaderConfig::default()
    };
    let preloader = preloader(&base_url, config);

    let started = Instant::now();
    let report = preloader
        .preload_chapters(["/docs/slow", "/docs/u1", "/docs/broken"])
        .await;

    assert!(started.elapsed() < Duration::from_secs(2));
    assert_eq!(report.succeeded(), 1);
    assert_eq!(report.results[1].outcome.data(), Some("page /docs/u1"));
}

// == Startup Preloads ==

#[tokio::test]
async fn test_preload_api_endpoints_and_search_index() {
    let (base_url, backend) = spawn_backend().await;
    let preloader = preloader(&base_url, PreloaderConfig::default());

    let report = preloader.preload_api_endpoints().await;
    let search = preloader.preload_search_index().await;

    assert_eq!(report.len(), 3);
    assert_eq!(report.succeeded(), 2, "chat endpoint rejects GET");
    assert_eq!(search.data(), Some("{}"));
    assert_eq!(backend.hits("/api/v1/chat/"), 1);
    assert_eq!(preloader.stats().await.total_entries, 3);
}

#[tokio::test]
async fn test_preload_api_endpoints_all_unreachable() {
    let preloader = preloader(&closed_base_url(), PreloaderConfig::default());

    let report = preloader.preload_api_endpoints().await;

    assert_eq!(report.failed(), 3);
}

#[tokio::test]
async fn test_startup_task_completes_against_backend() {
    let (base_url, backend) = spawn_backend().await;
    let preloader = preloader(&base_url, PreloaderConfig::default());

    textbook_preload::spawn_startup_preloads(preloader.clone())
        .await
        .unwrap();

    assert_eq!(backend.hits("/api/v1/search/"), 1);
    assert_eq!(backend.hits("/api/v1/health"), 1);
}

// == Clear ==

#[tokio::test]
async fn test_clear_then_read_returns_none() {
    let (base_url, _backend) = spawn_backend().await;
    let preloader = preloader(&base_url, PreloaderConfig::default());

    preloader.preload_chapters(["/docs/u1", "/docs/u2"]).await;
    preloader.clear_preloaded_content().await;

    assert_eq!(preloader.get_preloaded_content("/docs/u1").await, None);
    assert_eq!(preloader.get_preloaded_content("/docs/u2").await, None);
}
