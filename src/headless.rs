//! # Headless Adapter
//!
//! Walks the feed without a terminal UI and prints one line per visited
//! item: `index<TAB>id<TAB>url`. Same store, same preloading; the walker
//! just presses "next" until it has seen enough or the feed runs dry.

use std::io::Write;

use log::{info, warn};

use crate::core::QueueStore;
use crate::core::config::ResolvedConfig;
use crate::feed::{ContentItem, build_client};

/// Visits up to `count` items, starting from a fresh initialization.
///
/// Stops early when reaching the tail produces no new items (empty batch or
/// fetch failure).
pub async fn walk(store: &mut QueueStore, count: usize) -> Vec<ContentItem> {
    let mut visited = Vec::new();
    if count == 0 {
        return visited;
    }

    if let Err(e) = store.initialize() {
        warn!("Headless walk could not initialize: {}", e);
        return visited;
    }
    while store.state().loading {
        if store.next_completion().await.is_none() {
            break;
        }
    }

    let Some(first) = store.current() else {
        warn!(
            "Feed produced no content{}",
            store
                .state()
                .last_error
                .as_ref()
                .map(|e| format!(": {e}"))
                .unwrap_or_default()
        );
        return visited;
    };
    visited.push(first.clone());

    while visited.len() < count {
        store.drain_completions();

        let before = store.state().position;
        store.navigate_next();
        if store.state().position != before {
            if let Some(item) = store.current() {
                visited.push(item.clone());
            }
            continue;
        }

        // At the tail: wait for the buffer to grow or for fetching to stop
        let len_before = store.state().len();
        while store.state().len() == len_before && store.state().is_busy() {
            if store.next_completion().await.is_none() {
                break;
            }
        }
        if store.state().len() == len_before {
            info!("Feed stopped producing after {} items", visited.len());
            break;
        }
    }

    visited
}

pub fn format_line(index: usize, item: &ContentItem) -> String {
    format!("{}\t{}\t{}", index, item.id, item.url)
}

/// Entry point for `--dump N`.
pub async fn run(config: ResolvedConfig, count: usize) -> std::io::Result<()> {
    let client = build_client(&config);
    let mut store = QueueStore::new(client, config.queue);
    let visited = walk(&mut store, count).await;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for (index, item) in visited.iter().enumerate() {
        writeln!(out, "{}", format_line(index, item))?;
    }
    info!("Headless walk printed {} items", visited.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::QueueSettings;
    use crate::feed::FeedError;
    use crate::test_support::{ScriptedFeedClient, items};
    use std::sync::Arc;

    fn store(client: &Arc<ScriptedFeedClient>) -> QueueStore {
        QueueStore::new(client.clone(), QueueSettings::default())
    }

    fn ids(items: &[ContentItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_walk_follows_repeating_feed() {
        let client = Arc::new(ScriptedFeedClient::repeating(items(0..2)));
        let mut store = store(&client);

        let visited = walk(&mut store, 5).await;
        assert_eq!(ids(&visited), vec!["i0", "i1", "i0", "i1", "i0"]);
    }

    #[tokio::test]
    async fn test_walk_stops_when_feed_runs_dry() {
        let client = Arc::new(ScriptedFeedClient::new(vec![Ok(items(0..3))]));
        let mut store = store(&client);

        let visited = walk(&mut store, 10).await;
        assert_eq!(visited, items(0..3));
    }

    #[tokio::test]
    async fn test_walk_with_failed_initial_fill_is_empty() {
        let client = Arc::new(ScriptedFeedClient::new(vec![Err(FeedError::Unauthorized)]));
        let mut store = store(&client);

        let visited = walk(&mut store, 3).await;
        assert!(visited.is_empty());
        assert!(store.state().last_error.is_some());
    }

    #[tokio::test]
    async fn test_walk_zero_does_not_touch_feed() {
        let client = Arc::new(ScriptedFeedClient::repeating(items(0..2)));
        let mut store = store(&client);

        assert!(walk(&mut store, 0).await.is_empty());
        assert_eq!(client.calls(), 0);
    }

    #[test]
    fn test_format_line() {
        let item = ContentItem::new("abc", "https://example.com");
        assert_eq!(format_line(3, &item), "3\tabc\thttps://example.com");
    }
}
