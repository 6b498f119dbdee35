mod http;
mod rotating;

use std::sync::Arc;

use log::info;

pub use http::HttpFeedClient;
pub use rotating::{DEFAULT_ROTATING_URLS, RotatingFeedClient};

use crate::Backend;
use crate::core::config::ResolvedConfig;
use crate::feed::FeedClient;

/// Build a feed client from a resolved config.
pub fn build_client(config: &ResolvedConfig) -> Arc<dyn FeedClient> {
    match config.backend {
        Backend::Http => {
            info!(
                "Using HTTP feed at {} (auth: {})",
                config.base_url,
                if config.auth_token.is_some() { "bearer" } else { "none" }
            );
            Arc::new(HttpFeedClient::new(
                config.base_url.clone(),
                config.auth_token.clone(),
                config.timeout,
            ))
        }
        Backend::Rotating => {
            info!("Using rotating feed with {} URLs", config.rotating_urls.len());
            Arc::new(RotatingFeedClient::new(config.rotating_urls.clone()))
        }
    }
}
