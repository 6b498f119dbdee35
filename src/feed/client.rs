use std::fmt;

use async_trait::async_trait;

use super::types::ContentItem;

/// Why a batch could not be fetched.
///
/// The queue treats every variant the same way (a failed fetch leaves the
/// buffer untouched). The variants exist so the log says what went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// Client misconfigured (bad base URL, unusable token).
    Config(String),
    /// Transport failure: timeout, DNS, connection refused.
    Network(String),
    /// Backend rejected our credentials (HTTP 401).
    Unauthorized,
    /// Backend returned some other non-2xx status.
    Api { status: u16, message: String },
    /// Response body was not a feed.
    Parse(String),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::Config(msg) => write!(f, "config error: {msg}"),
            FeedError::Network(msg) => write!(f, "network error: {msg}"),
            FeedError::Unauthorized => write!(f, "unauthorized (HTTP 401)"),
            FeedError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FeedError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FeedError {}

/// Parameters for a single batch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchRequest {
    /// How many items the queue would like. Advisory: clients may return
    /// fewer (including zero) or more.
    pub size_hint: usize,
}

/// Source of feed content.
///
/// There is no cursor: the backend decides what comes next, and may repeat
/// itself.
#[async_trait]
pub trait FeedClient: Send + Sync {
    /// Returns the name of the client, for logs.
    fn name(&self) -> &str;

    /// Fetches the next batch of content, in display order.
    async fn fetch_batch(&self, request: BatchRequest) -> Result<Vec<ContentItem>, FeedError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_error_display() {
        assert_eq!(FeedError::Unauthorized.to_string(), "unauthorized (HTTP 401)");
        assert_eq!(
            FeedError::Api {
                status: 503,
                message: "busy".to_string()
            }
            .to_string(),
            "API error (HTTP 503): busy"
        );
        assert_eq!(
            FeedError::Network("timed out".to_string()).to_string(),
            "network error: timed out"
        );
    }
}
