//! # Queue Store
//!
//! The controller for one viewing session. Owns the `QueueState`, runs every
//! action through `update()`, performs the resulting effects, and lets the
//! preloader react to the new state.
//!
//! ```text
//!  adapter ──Action──▶ QueueStore::dispatch ──▶ update() ──Effect::Fetch──▶ tokio task
//!                         ▲        │                                          │
//!                         │        └──▶ Preloader::observe ──FetchMore──┐     │
//!                         │                                             ▼     │
//!                         └──── completion channel ◀── BatchReceived ◀── FeedClient
//! ```
//!
//! FeedClient calls run on spawned tasks and report back through a channel.
//! Only the owner of the store applies them, so mutations never interleave.

use std::fmt;
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use super::action::{Action, Effect, FetchTicket, Suppressed, update};
use super::preloader::Preloader;
use super::state::{QueueSettings, QueueState};
use crate::feed::{BatchRequest, ContentItem, FeedClient};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// `initialize()` while the initial fill is still in flight.
    AlreadyLoading,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::AlreadyLoading => write!(f, "feed is already loading"),
        }
    }
}

impl std::error::Error for QueueError {}

pub struct QueueStore {
    state: QueueState,
    client: Arc<dyn FeedClient>,
    preloader: Preloader,
    tx: UnboundedSender<Action>,
    rx: UnboundedReceiver<Action>,
}

impl QueueStore {
    pub fn new(client: Arc<dyn FeedClient>, settings: QueueSettings) -> Self {
        Self::from_state(client, QueueState::new(settings))
    }

    /// Starts from an existing state. Useful for resuming a view in tests.
    pub fn from_state(client: Arc<dyn FeedClient>, state: QueueState) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            state,
            client,
            preloader: Preloader::new(),
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &QueueState {
        &self.state
    }

    pub fn client_name(&self) -> &str {
        self.client.name()
    }

    pub fn current(&self) -> Option<&ContentItem> {
        self.state.current()
    }

    pub fn can_navigate_up(&self) -> bool {
        self.state.can_navigate_up()
    }

    pub fn can_navigate_down(&self) -> bool {
        self.state.can_navigate_down()
    }

    pub fn remaining(&self) -> usize {
        self.state.remaining()
    }

    pub fn initialize(&mut self) -> Result<(), QueueError> {
        match self.dispatch(Action::Initialize) {
            Effect::Suppressed(Suppressed::AlreadyLoading) => Err(QueueError::AlreadyLoading),
            _ => Ok(()),
        }
    }

    pub fn navigate_next(&mut self) -> Effect {
        self.dispatch(Action::NavigateNext)
    }

    pub fn navigate_previous(&mut self) -> Effect {
        self.dispatch(Action::NavigatePrevious)
    }

    pub fn fetch_more(&mut self) -> Effect {
        self.dispatch(Action::FetchMore)
    }

    pub fn reset(&mut self) {
        self.dispatch(Action::Reset);
    }

    /// Applies an action, performs its effect, then gives the preloader a look.
    pub fn dispatch(&mut self, action: Action) -> Effect {
        let effect = update(&mut self.state, action);
        if let Effect::Fetch(ticket) = effect {
            self.spawn_fetch(ticket);
        }
        self.run_preloader();
        effect
    }

    /// Applies every completion that has already arrived. Never waits.
    pub fn drain_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(action) = self.rx.try_recv() {
            self.dispatch(action);
            applied += 1;
        }
        applied
    }

    /// Waits for the next completion and applies it.
    ///
    /// Pends forever if nothing is in flight; callers that are unsure should
    /// check `state().is_busy()` first or wrap this in a timeout.
    pub async fn next_completion(&mut self) -> Option<Effect> {
        let action = self.rx.recv().await?;
        Some(self.dispatch(action))
    }

    fn run_preloader(&mut self) {
        if !self.preloader.observe(&self.state) {
            return;
        }
        info!(
            "Preloading: {} unseen items left (threshold {})",
            self.state.remaining(),
            self.state.preload_threshold
        );
        if let Effect::Fetch(ticket) = update(&mut self.state, Action::FetchMore) {
            self.spawn_fetch(ticket);
        }
    }

    fn spawn_fetch(&self, ticket: FetchTicket) {
        info!(
            "Spawning {:?} fetch via {} (generation {}, size_hint={})",
            ticket.purpose,
            self.client.name(),
            ticket.generation,
            ticket.size_hint
        );
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let request = BatchRequest {
                size_hint: ticket.size_hint,
            };
            let result = client.fetch_batch(request).await;
            if let Err(e) = &result {
                debug!("Fetch for generation {} failed: {}", ticket.generation, e);
            }
            if tx.send(Action::BatchReceived { ticket, result }).is_err() {
                warn!("Failed to deliver batch: store dropped");
            }
        });
    }
}
