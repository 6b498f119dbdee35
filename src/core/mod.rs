//! # Core Queue Logic
//!
//! The feed queue: buffer, viewing position, and the rules for keeping it
//! topped up. It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • QueueState (data)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Preloader (trigger)  │
//!                    │  • QueueStore (driver)  │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  Headless  │      │ FeedClient │
//!     │  Adapter   │      │   walker   │      │ (http/...) │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `QueueState`, everything one viewing session knows
//! - [`action`]: `Action`, `Effect` and the `update()` reducer
//! - [`preloader`]: when to fetch ahead of the viewer
//! - [`store`]: `QueueStore`, which runs actions and fetches
//! - [`config`]: settings file, env and CLI resolution

pub mod action;
pub mod config;
pub mod preloader;
pub mod state;
pub mod store;

pub use action::{Action, Effect, FetchPurpose, FetchTicket, Suppressed};
pub use state::{QueueSettings, QueueState};
pub use store::{QueueError, QueueStore};
