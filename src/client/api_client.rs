//! HTTP client for the textbook backend.

use reqwest::Client;
use tracing::{debug, error};

use crate::client::{ChatRequest, ChatResponse, SearchResponse};
use crate::error::{PreloadError, Result};

/// Client for the backend API rooted at a configurable base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("textbook_preload/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PreloadError::Internal(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// `GET /health`. Any failure reads as unhealthy.
    pub async fn health_check(&self) -> bool {
        match self.client.get(self.endpoint("/health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                error!("Health check failed: {}", e);
                false
            }
        }
    }

    /// `POST /chat` with a user question.
    pub async fn send_query(&self, query: &str) -> Result<ChatResponse> {
        if query.trim().is_empty() {
            return Err(PreloadError::InvalidRequest("Query cannot be empty".to_string()));
        }

        debug!("Sending chat query to {}", self.base_url);
        let response = self
            .client
            .post(self.endpoint("/chat"))
            .json(&ChatRequest {
                query: query.to_string(),
            })
            .send()
            .await
            .map_err(|e| {
                error!("API Error: {}", e);
                PreloadError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("API Error: server returned {}", status);
            return Err(PreloadError::Status(status.as_u16()));
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| PreloadError::Decode(e.to_string()))
    }

    /// `GET /search?q=<query>&limit=<limit>`.
    pub async fn search(&self, query: &str, limit: usize) -> Result<SearchResponse> {
        if query.trim().is_empty() {
            return Ok(SearchResponse::default());
        }

        let limit = limit.to_string();
        let response = self
            .client
            .get(self.endpoint("/search"))
            .query(&[("q", query), ("limit", limit.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!("Search failed: server returned {}", status);
            return Err(PreloadError::Status(status.as_u16()));
        }

        response
            .json::<SearchResponse>()
            .await
            .map_err(|e| PreloadError::Decode(e.to_string()))
    }
}
