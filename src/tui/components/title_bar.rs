//! # TitleBar Component
//!
//! Top status bar: app name, active feed client, position in the buffer,
//! and the queue's status message.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"scrollfeed (feed: http) | 3/12 | Fetching more..."`
//! 2. **No status**: `"scrollfeed (feed: http) | 3/12"`
//! 3. **Empty buffer**: the position segment is omitted
//!
//! Stateless: everything comes in as props.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

pub struct TitleBar {
    pub client_name: String,
    pub status_message: String,
    /// 0-based position; only shown when `total > 0`.
    pub position: usize,
    pub total: usize,
}

impl TitleBar {
    pub fn new(client_name: String, status_message: String, position: usize, total: usize) -> Self {
        Self {
            client_name,
            status_message,
            position,
            total,
        }
    }

    pub fn text(&self) -> String {
        let mut title = format!("scrollfeed (feed: {})", self.client_name);
        if self.total > 0 {
            title.push_str(&format!(" | {}/{}", self.position + 1, self.total));
        }
        if !self.status_message.is_empty() {
            title.push_str(&format!(" | {}", self.status_message));
        }
        title
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.text()), area);
    }
}
