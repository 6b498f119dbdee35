use serde::{Deserialize, Serialize};

/// Optional display hints attached to a content item by the backend.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// A single unit of feed content: an id and the URL the rendering surface loads.
///
/// Ids are not unique. The backend may legitimately serve the same item twice.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    pub id: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ContentMetadata>,
}

impl ContentItem {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: ContentMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Title from metadata, if the backend sent a non-empty one.
    pub fn title(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.title.as_deref())
            .filter(|t| !t.trim().is_empty())
    }

    pub fn description(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.description.as_deref())
            .filter(|d| !d.trim().is_empty())
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.thumbnail.as_deref())
    }
}

/// Body of `GET /content/feed`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct FeedResponse {
    #[serde(default)]
    pub contents: Vec<ContentItem>,
    /// Sent by some backends; accepted and logged, never sent back.
    #[serde(rename = "nextCursor", default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}
