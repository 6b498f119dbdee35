//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the current
//! item, and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (initial fill or fetch in flight): draws every ~80ms so
//!   the spinner moves.
//! - **Idle**: sleeps up to 500ms, only redraws on events or when a batch
//!   arrives.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::config::ResolvedConfig;
use crate::core::{Action, Effect, QueueStore};
use crate::feed::build_client;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Map a terminal event to the queue action it stands for.
fn actions_for(event: TuiEvent) -> Vec<Action> {
    match event {
        TuiEvent::Quit => vec![Action::Quit],
        TuiEvent::Next => vec![Action::NavigateNext],
        TuiEvent::Previous => vec![Action::NavigatePrevious],
        TuiEvent::Reload => vec![Action::Reset, Action::Initialize],
        TuiEvent::Resize => Vec::new(),
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client = build_client(&config);
    let mut store = QueueStore::new(client, config.queue);
    let client_name = store.client_name().to_string();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    if let Err(e) = store.initialize() {
        debug!("Initial load skipped: {}", e);
    }

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    'outer: loop {
        let animating = store.state().is_busy();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, store.state(), &client_name, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain all pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            for action in actions_for(event) {
                debug!("Dispatching {:?}", action);
                if store.dispatch(action) == Effect::Quit {
                    break 'outer;
                }
            }
        }

        // Batches that arrived while we were waiting on the terminal
        if store.drain_completions() > 0 {
            needs_redraw = true;
        }
    }

    info!(
        "Session ended at {}/{}",
        store.state().position + 1,
        store.state().len()
    );
    ratatui::restore();
    Ok(())
}
