//! HTTP feed client for `GET /content/feed`.
//!
//! The backend answers with `{ "contents": [...], "nextCursor": "..." }`.
//! The cursor is logged and dropped: the backend decides what comes next.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::feed::{BatchRequest, ContentItem, FeedClient, FeedError, FeedResponse};

const FEED_PATH: &str = "/content/feed";

/// Feed client backed by an HTTP endpoint, optionally authenticated with a
/// bearer token.
pub struct HttpFeedClient {
    base_url: String,
    auth_token: Option<String>,
    client: reqwest::Client,
}

impl HttpFeedClient {
    pub fn new(base_url: String, auth_token: Option<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout, using defaults: {}", e);
                reqwest::Client::new()
            });

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token: auth_token.filter(|t| !t.is_empty()),
            client,
        }
    }

    pub fn feed_url(&self) -> String {
        format!("{}{}", self.base_url, FEED_PATH)
    }
}

#[async_trait]
impl FeedClient for HttpFeedClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_batch(&self, request: BatchRequest) -> Result<Vec<ContentItem>, FeedError> {
        let url = self.feed_url();
        info!("Feed request: GET {} (size_hint={})", url, request.size_hint);

        let mut builder = self
            .client
            .get(&url)
            .query(&[("limit", request.size_hint)]);
        if let Some(token) = &self.auth_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_builder() {
                FeedError::Config(e.to_string())
            } else {
                FeedError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        debug!("Feed response status: {}", status);

        if status == reqwest::StatusCode::UNAUTHORIZED {
            warn!("Feed backend rejected credentials (401)");
            return Err(FeedError::Unauthorized);
        }

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Feed API error: {} - {}", status.as_u16(), message);
            return Err(FeedError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FeedError::Network(e.to_string()))?;
        let feed: FeedResponse =
            serde_json::from_str(&body).map_err(|e| FeedError::Parse(e.to_string()))?;

        if let Some(cursor) = &feed.next_cursor {
            debug!("Ignoring nextCursor from backend: {}", cursor);
        }
        info!("Feed batch received: {} items", feed.contents.len());
        Ok(feed.contents)
    }
}
