//! # Queue State
//!
//! All state for one viewing session. Domain logic only; presentation state
//! lives in the `tui` module.
//!
//! ```text
//! QueueState
//! ├── buffer: Vec<ContentItem>       // append-only, display order
//! ├── position: usize                // index of the item on screen
//! ├── loading: bool                  // initial fill in flight
//! ├── fetching_more: bool            // replenishment in flight (at most one)
//! ├── generation: u64                // bumped by initialize/reset
//! ├── preload_threshold: usize       // unseen items to keep buffered
//! ├── preload_batch_size: usize      // size hint per fetch
//! ├── last_error: Option<String>     // most recent fetch failure
//! └── status_message: String         // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::feed::ContentItem;

pub const DEFAULT_PRELOAD_THRESHOLD: usize = 2;
pub const DEFAULT_PRELOAD_BATCH_SIZE: usize = 5;

/// Tunables for a queue, fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueSettings {
    pub preload_threshold: usize,
    pub preload_batch_size: usize,
}

impl Default for QueueSettings {
    fn default() -> Self {
        Self {
            preload_threshold: DEFAULT_PRELOAD_THRESHOLD,
            preload_batch_size: DEFAULT_PRELOAD_BATCH_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueueState {
    pub buffer: Vec<ContentItem>,
    pub position: usize,
    /// True only while the initial fill is in flight.
    pub loading: bool,
    /// True while exactly one replenishment call is in flight.
    pub fetching_more: bool,
    /// Stamped on every fetch. Completions from an older generation are dropped.
    pub generation: u64,
    pub preload_threshold: usize,
    pub preload_batch_size: usize,
    pub last_error: Option<String>,
    pub status_message: String,
}

impl QueueState {
    pub fn new(settings: QueueSettings) -> Self {
        Self {
            buffer: Vec::new(),
            position: 0,
            loading: false,
            fetching_more: false,
            generation: 0,
            preload_threshold: settings.preload_threshold,
            preload_batch_size: settings.preload_batch_size,
            last_error: None,
            status_message: String::from("Welcome!"),
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The item the rendering surface should show, if any.
    pub fn current(&self) -> Option<&ContentItem> {
        self.buffer.get(self.position)
    }

    /// Unseen items buffered after the current one.
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.position + 1)
    }

    pub fn can_navigate_up(&self) -> bool {
        self.position > 0
    }

    pub fn can_navigate_down(&self) -> bool {
        self.position + 1 < self.buffer.len()
    }

    /// Either kind of fetch is in flight.
    pub fn is_busy(&self) -> bool {
        self.loading || self.fetching_more
    }
}

impl Default for QueueState {
    fn default() -> Self {
        Self::new(QueueSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::items;

    #[test]
    fn test_new_state_defaults() {
        let state = QueueState::default();
        assert!(state.is_empty());
        assert_eq!(state.position, 0);
        assert!(!state.loading);
        assert!(!state.fetching_more);
        assert_eq!(state.preload_threshold, DEFAULT_PRELOAD_THRESHOLD);
        assert_eq!(state.preload_batch_size, DEFAULT_PRELOAD_BATCH_SIZE);
        assert!(state.current().is_none());
    }

    #[test]
    fn test_remaining_counts_unseen_items() {
        let mut state = QueueState::default();
        assert_eq!(state.remaining(), 0);
        state.buffer = items(0..3);
        assert_eq!(state.remaining(), 2);
        state.position = 2;
        assert_eq!(state.remaining(), 0);
    }

    #[test]
    fn test_navigation_flags() {
        let mut state = QueueState::default();
        assert!(!state.can_navigate_up());
        assert!(!state.can_navigate_down());

        state.buffer = items(0..2);
        assert!(!state.can_navigate_up());
        assert!(state.can_navigate_down());

        state.position = 1;
        assert!(state.can_navigate_up());
        assert!(!state.can_navigate_down());
        assert_eq!(state.current().map(|i| i.id.as_str()), Some("i1"));
    }
}
