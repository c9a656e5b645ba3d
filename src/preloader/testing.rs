//! Scripted fetcher for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::error::{PreloadError, Result};
use crate::preloader::Fetch;

/// Scripted response for one URL.
#[derive(Debug, Clone)]
pub(crate) enum Reply {
    Body(&'static str),
    Status(u16),
    Slow(Duration, &'static str),
}

/// In-memory fetcher that records every request it receives.
#[derive(Debug, Default)]
pub(crate) struct ScriptedFetcher {
    replies: HashMap<String, Reply>,
    calls: AtomicUsize,
    requested: Mutex<Vec<String>>,
}

impl ScriptedFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(mut self, url: &str, reply: Reply) -> Self {
        self.replies.insert(url.to_string(), reply);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl Fetch for ScriptedFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(url.to_string());

        match self.replies.get(url).cloned() {
            Some(Reply::Body(body)) => Ok(body.to_string()),
            Some(Reply::Status(status)) => Err(PreloadError::Status(status)),
            Some(Reply::Slow(delay, body)) => {
                tokio::time::sleep(delay).await;
                Ok(body.to_string())
            }
            None => Err(PreloadError::Status(404)),
        }
    }
}
