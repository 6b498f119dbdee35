//! # Actions
//!
//! Everything that can happen to the queue becomes an `Action`.
//! User presses Down? That's `Action::NavigateNext`.
//! A batch arrives? That's `Action::BatchReceived { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O the caller must
//! perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use super::state::QueueState;
use crate::feed::{ContentItem, FeedError};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Initialize,
    NavigateNext,
    NavigatePrevious,
    FetchMore,
    Reset,
    Quit,
    /// A FeedClient call finished (posted by the background task).
    BatchReceived {
        ticket: FetchTicket,
        result: Result<Vec<ContentItem>, FeedError>,
    },
}

/// What a fetch is for. Decides whether the batch replaces or extends the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPurpose {
    Initial,
    Replenish,
}

/// Identifies one in-flight FeedClient call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub purpose: FetchPurpose,
    pub size_hint: usize,
}

/// Why an action was turned into a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suppressed {
    /// `Initialize` while the initial fill is still in flight.
    AlreadyLoading,
    /// A fetch is already in flight; a second one would overlap.
    ConcurrentFetch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Call the FeedClient and report back with `Action::BatchReceived`.
    Fetch(FetchTicket),
    Suppressed(Suppressed),
    Quit,
}

pub fn update(state: &mut QueueState, action: Action) -> Effect {
    match action {
        Action::Initialize => {
            if state.loading {
                debug!("Initialize ignored: initial fill already in flight");
                return Effect::Suppressed(Suppressed::AlreadyLoading);
            }
            state.generation += 1;
            state.buffer.clear();
            state.position = 0;
            state.loading = true;
            // Any replenishment in flight now belongs to a dead generation
            state.fetching_more = false;
            state.last_error = None;
            state.status_message = String::from("Loading feed...");
            info!("Initializing feed (generation {})", state.generation);
            Effect::Fetch(ticket(state, FetchPurpose::Initial))
        }
        Action::NavigateNext => {
            if state.position + 1 < state.buffer.len() {
                state.position += 1;
                debug!("Navigated to {}/{}", state.position + 1, state.buffer.len());
                Effect::None
            } else {
                debug!("At end of buffer ({} items), requesting more", state.buffer.len());
                start_replenish(state)
            }
        }
        Action::NavigatePrevious => {
            if state.position > 0 {
                state.position -= 1;
                debug!("Navigated to {}/{}", state.position + 1, state.buffer.len());
            }
            Effect::None
        }
        Action::FetchMore => start_replenish(state),
        Action::Reset => {
            state.generation += 1;
            state.buffer.clear();
            state.position = 0;
            state.loading = false;
            state.fetching_more = false;
            state.last_error = None;
            state.status_message = String::from("Feed reset");
            info!("Queue reset (generation {})", state.generation);
            Effect::None
        }
        Action::Quit => Effect::Quit,
        Action::BatchReceived { ticket, result } => {
            if ticket.generation != state.generation {
                debug!(
                    "Dropping stale {:?} batch (generation {}, current {})",
                    ticket.purpose, ticket.generation, state.generation
                );
                return Effect::None;
            }
            match ticket.purpose {
                FetchPurpose::Initial => apply_initial(state, result),
                FetchPurpose::Replenish => apply_replenish(state, result),
            }
            Effect::None
        }
    }
}

fn ticket(state: &QueueState, purpose: FetchPurpose) -> FetchTicket {
    FetchTicket {
        generation: state.generation,
        purpose,
        size_hint: state.preload_batch_size,
    }
}

/// The single guarded entry into replenishment. The flag is set here, before
/// the caller spawns anything.
fn start_replenish(state: &mut QueueState) -> Effect {
    if state.is_busy() {
        debug!(
            "Fetch suppressed (loading={}, fetching_more={})",
            state.loading, state.fetching_more
        );
        return Effect::Suppressed(Suppressed::ConcurrentFetch);
    }
    state.fetching_more = true;
    state.status_message = String::from("Fetching more...");
    Effect::Fetch(ticket(state, FetchPurpose::Replenish))
}

fn apply_initial(state: &mut QueueState, result: Result<Vec<ContentItem>, FeedError>) {
    state.loading = false;
    state.position = 0;
    match result {
        Ok(items) if items.is_empty() => {
            info!("Initial fill returned no content");
            state.buffer.clear();
            state.status_message = String::from("Feed is empty");
        }
        Ok(items) => {
            info!("Initial fill loaded {} items", items.len());
            state.buffer = items;
            state.last_error = None;
            state.status_message = String::new();
        }
        Err(e) => {
            warn!("Initial fill failed: {}", e);
            state.buffer.clear();
            state.last_error = Some(e.to_string());
            state.status_message = String::from("Could not load feed");
        }
    }
}

fn apply_replenish(state: &mut QueueState, result: Result<Vec<ContentItem>, FeedError>) {
    state.fetching_more = false;
    match result {
        Ok(items) if items.is_empty() => {
            debug!("Replenishment returned no content");
            state.status_message = String::from("No new content");
        }
        Ok(items) => {
            info!(
                "Appended {} items (buffer now {})",
                items.len(),
                state.buffer.len() + items.len()
            );
            state.buffer.extend(items);
            state.last_error = None;
            state.status_message = String::new();
        }
        Err(e) => {
            warn!("Replenishment failed: {}", e);
            state.last_error = Some(e.to_string());
            state.status_message = String::from("Fetch failed");
        }
    }
}
