//! # Preloader
//!
//! Keeps the buffer ahead of the viewer. After every state change the store
//! asks the preloader whether a replenishment should start:
//!
//! ```text
//! remaining = len(buffer) - position - 1
//! fire when remaining < preload_threshold, buffer non-empty, nothing in flight
//! ```
//!
//! The decision is re-evaluated only when `(position, len(buffer))` changes.
//! An empty or failed batch leaves that pair untouched, so it does not spin
//! into a retry loop; the viewer's next move re-arms it.

use super::state::QueueState;

/// Pure trigger condition. Strictly less than the threshold.
pub fn should_preload(state: &QueueState) -> bool {
    !state.buffer.is_empty() && !state.is_busy() && state.remaining() < state.preload_threshold
}

#[derive(Debug, Default)]
pub struct Preloader {
    last_seen: Option<(usize, usize)>,
}

impl Preloader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the caller should dispatch `FetchMore`.
    pub fn observe(&mut self, state: &QueueState) -> bool {
        let snapshot = (state.position, state.buffer.len());
        if self.last_seen == Some(snapshot) {
            return false;
        }
        self.last_seen = Some(snapshot);
        should_preload(state)
    }
}
