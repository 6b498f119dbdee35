pub mod client;
pub mod clients;
pub mod types;

pub use client::{BatchRequest, FeedClient, FeedError};
pub use clients::{HttpFeedClient, RotatingFeedClient, build_client};
pub use types::{ContentItem, ContentMetadata, FeedResponse};
