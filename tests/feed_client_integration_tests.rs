use std::sync::Arc;
use std::time::Duration;

use scrollfeed::core::{Effect, QueueSettings, QueueStore, Suppressed};
use scrollfeed::feed::{BatchRequest, FeedClient, FeedError, HttpFeedClient};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn client_for(server: &MockServer, token: Option<&str>) -> HttpFeedClient {
    HttpFeedClient::new(
        server.uri(),
        token.map(|t| t.to_string()),
        Duration::from_secs(2),
    )
}

fn request() -> BatchRequest {
    BatchRequest { size_hint: 5 }
}

fn feed_body(ids: &[&str]) -> serde_json::Value {
    let contents: Vec<serde_json::Value> = ids
        .iter()
        .map(|id| serde_json::json!({ "id": id, "url": format!("https://example.com/{id}") }))
        .collect();
    serde_json::json!({ "contents": contents })
}

// ============================================================================
// HttpFeedClient Tests
// ============================================================================

#[tokio::test]
async fn test_http_fetch_returns_items_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/content/feed"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed_body(&["a", "b", "c"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None);
    let items = client.fetch_batch(request()).await.unwrap();

    let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(items[0].url, "https://example.com/a");
}

#[tokio::test]
async fn test_http_fetch_sends_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/content/feed"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed_body(&["a"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Some("secret-token"));
    let items = client.fetch_batch(request()).await.unwrap();
    assert_eq!(items.len(), 1);
}

#[tokio::test]
async fn test_http_fetch_accepts_metadata_and_cursor() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!({
        "contents": [
            {
                "id": "a",
                "url": "https://example.com/a",
                "metadata": { "title": "First", "description": "The first page" }
            },
            { "id": "a", "url": "https://example.com/a" }
        ],
        "nextCursor": "opaque"
    });

    Mock::given(method("GET"))
        .and(path("/content/feed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None);
    let items = client.fetch_batch(request()).await.unwrap();

    // Repeats are kept
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title(), Some("First"));
    assert_eq!(items[0].description(), Some("The first page"));
    assert!(items[1].metadata.is_none());
}

#[tokio::test]
async fn test_http_empty_feed_is_ok() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/content/feed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "contents": [] })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None);
    assert!(client.fetch_batch(request()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_http_401_is_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/content/feed"))
        .respond_with(ResponseTemplate::new(401).set_body_string("missing token"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None);
    let result = client.fetch_batch(request()).await;
    assert_eq!(result, Err(FeedError::Unauthorized));
}

#[tokio::test]
async fn test_http_server_error_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/content/feed"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Failed to fetch content"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None);
    match client.fetch_batch(request()).await {
        Err(FeedError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Failed to fetch content");
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_http_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/content/feed"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None);
    let result = client.fetch_batch(request()).await;
    assert!(matches!(result, Err(FeedError::Parse(_))));
}

#[tokio::test]
async fn test_http_timeout_is_network_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/content/feed"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(feed_body(&["late"]))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let client = HttpFeedClient::new(mock_server.uri(), None, Duration::from_millis(50));
    let result = client.fetch_batch(request()).await;
    assert!(matches!(result, Err(FeedError::Network(_))));
}

#[tokio::test]
async fn test_http_connection_refused_is_network_error() {
    // Nothing listens on port 9 locally
    let client = HttpFeedClient::new(
        "http://127.0.0.1:9".to_string(),
        None,
        Duration::from_secs(1),
    );
    let result = client.fetch_batch(request()).await;
    assert!(matches!(result, Err(FeedError::Network(_))));
}

// ============================================================================
// Store Against a Real HTTP Feed
// ============================================================================

#[tokio::test]
async fn test_store_initializes_and_preloads_over_http() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/content/feed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed_body(&["a", "b"])))
        .expect(2) // initial fill + one preload
        .mount(&mock_server)
        .await;

    let client = Arc::new(client_for(&mock_server, None));
    let mut store = QueueStore::new(client, QueueSettings::default());

    store.initialize().unwrap();
    store.next_completion().await;
    assert_eq!(store.state().len(), 2);

    // Two items with threshold 2 leaves one unseen: a preload is already out
    assert!(store.state().fetching_more);
    assert_eq!(
        store.fetch_more(),
        Effect::Suppressed(Suppressed::ConcurrentFetch)
    );

    store.next_completion().await;
    assert_eq!(store.state().len(), 4);
    assert_eq!(store.state().position, 0);
    assert!(!store.state().fetching_more);
}

#[tokio::test]
async fn test_store_survives_unauthorized_backend() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/content/feed"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Arc::new(client_for(&mock_server, None));
    let mut store = QueueStore::new(client, QueueSettings::default());

    store.initialize().unwrap();
    store.next_completion().await;

    assert!(store.state().is_empty());
    assert!(!store.state().loading);
    assert_eq!(store.state().position, 0);
    assert_eq!(
        store.state().last_error.as_deref(),
        Some("unauthorized (HTTP 401)")
    );
}
