//! Offline feed that cycles through a fixed list of URLs, one per call.
//!
//! Mirrors the reference backend, which hands out a single link per request
//! and rotates through a small set forever.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use log::debug;

use crate::feed::{BatchRequest, ContentItem, FeedClient, FeedError};

pub const DEFAULT_ROTATING_URLS: &[&str] = &[
    "https://3e94b6bc-aca7-4d59-b2b1-55d7ae2789bd-hello-world.pages.dev",
    "https://d84ec0d7-91c0-470a-a9dc-4dd64cc0e7e7-hello-world.pages.dev",
];

pub struct RotatingFeedClient {
    urls: Vec<String>,
    cursor: Mutex<usize>,
    seq: AtomicU64,
}

impl RotatingFeedClient {
    pub fn new(urls: Vec<String>) -> Self {
        Self {
            urls,
            cursor: Mutex::new(0),
            seq: AtomicU64::new(0),
        }
    }

    fn next_url(&self) -> Option<String> {
        if self.urls.is_empty() {
            return None;
        }
        let mut cursor = match self.cursor.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let url = self.urls[*cursor].clone();
        *cursor = (*cursor + 1) % self.urls.len();
        Some(url)
    }
}

impl Default for RotatingFeedClient {
    fn default() -> Self {
        Self::new(DEFAULT_ROTATING_URLS.iter().map(|u| u.to_string()).collect())
    }
}

#[async_trait]
impl FeedClient for RotatingFeedClient {
    fn name(&self) -> &str {
        "rotating"
    }

    /// Always returns at most one item, whatever the size hint says.
    async fn fetch_batch(&self, request: BatchRequest) -> Result<Vec<ContentItem>, FeedError> {
        let Some(url) = self.next_url() else {
            debug!("Rotating feed has no URLs configured");
            return Ok(Vec::new());
        };
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        let id = format!("content-{}-{}", chrono::Utc::now().timestamp_millis(), seq);
        debug!(
            "Rotating feed serving {} as {} (size_hint={})",
            url, id, request.size_hint
        );
        Ok(vec![ContentItem::new(id, url)])
    }
}
