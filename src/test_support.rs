//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::ops::Range;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::feed::{BatchRequest, ContentItem, FeedClient, FeedError};

pub fn item(n: usize) -> ContentItem {
    ContentItem::new(format!("i{n}"), format!("https://example.com/{n}"))
}

pub fn items(range: Range<usize>) -> Vec<ContentItem> {
    range.map(item).collect()
}

/// Lets spawned fetch tasks run to completion on the current-thread runtime.
pub async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

/// A feed client that replays canned responses and counts calls.
///
/// Once the script runs out it returns the fallback batch (empty by default).
pub struct ScriptedFeedClient {
    script: Mutex<VecDeque<Result<Vec<ContentItem>, FeedError>>>,
    fallback: Vec<ContentItem>,
    calls: AtomicUsize,
}

impl ScriptedFeedClient {
    pub fn new(script: Vec<Result<Vec<ContentItem>, FeedError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback: Vec::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Returns the same batch on every call.
    pub fn repeating(batch: Vec<ContentItem>) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: batch,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedClient for ScriptedFeedClient {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn fetch_batch(&self, _request: BatchRequest) -> Result<Vec<ContentItem>, FeedError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(self.fallback.clone()))
    }
}
