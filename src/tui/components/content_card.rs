//! # ContentCard Component
//!
//! Stand-in for the rendering surface. The real surface loads `item.url` in
//! an isolated viewport; in a terminal we show what it would load: title,
//! URL, description, thumbnail and id.
//!
//! Three states:
//! - an item: the card
//! - no item while loading: a spinner
//! - no item otherwise: "No content available"

use crate::feed::ContentItem;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct ContentCard<'a> {
    pub item: Option<&'a ContentItem>,
    pub loading: bool,
    pub spinner_frame: usize,
}

impl<'a> ContentCard<'a> {
    pub fn new(item: Option<&'a ContentItem>, loading: bool, spinner_frame: usize) -> Self {
        Self {
            item,
            loading,
            spinner_frame,
        }
    }

    fn lines(item: &ContentItem, width: usize) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                truncate(&item.url, width),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            )),
            Line::default(),
        ];

        if let Some(description) = item.description() {
            for wrapped in textwrap::wrap(description, width.max(1)) {
                lines.push(Line::from(wrapped.into_owned()));
            }
            lines.push(Line::default());
        }

        let dim = Style::default().fg(Color::DarkGray);
        if let Some(thumbnail) = item.thumbnail() {
            lines.push(Line::from(Span::styled(
                truncate(&format!("thumbnail: {thumbnail}"), width),
                dim,
            )));
        }
        lines.push(Line::from(Span::styled(
            truncate(&format!("id: {}", item.id), width),
            dim,
        )));
        lines
    }
}

impl Component for ContentCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(item) = self.item else {
            let text = if self.loading {
                format!(
                    "{} Loading feed",
                    SPINNER[self.spinner_frame % SPINNER.len()]
                )
            } else {
                String::from("No content available")
            };
            let paragraph = Paragraph::new(text)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::bordered());
            frame.render_widget(paragraph, area);
            return;
        };

        let title = item.title().unwrap_or("Untitled");
        let inner_width = area.width.saturating_sub(2) as usize;
        let block = Block::bordered()
            .title(Span::styled(
                format!(" {} ", truncate(title, inner_width.saturating_sub(2))),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .border_style(Style::default().fg(Color::Green));

        frame.render_widget(
            Paragraph::new(Self::lines(item, inner_width)).block(block),
            area,
        );
    }
}

/// Cut `text` to `width` display columns, ending in `…` when shortened.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
