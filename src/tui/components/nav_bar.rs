//! # NavBar Component
//!
//! Bottom bar with the up/down controls. A control is dimmed when its
//! direction is unavailable (`can_navigate_up` / `can_navigate_down`), plus
//! a fetch indicator and the last fetch error, if any.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub struct NavBar {
    pub can_navigate_up: bool,
    pub can_navigate_down: bool,
    pub fetching: bool,
    pub error: Option<String>,
}

impl NavBar {
    /// Rows this component wants: controls, plus one for an error.
    pub fn height(&self) -> u16 {
        if self.error.is_some() { 2 } else { 1 }
    }

    fn control(label: &'static str, enabled: bool) -> Span<'static> {
        let style = if enabled {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };
        Span::styled(label, style)
    }
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [controls_area, error_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        let mut spans = vec![
            Self::control("▲ prev (k)", self.can_navigate_up),
            Span::raw("   "),
            Self::control("▼ next (j)", self.can_navigate_down),
            Span::raw("   "),
            Span::styled("r reload  q quit", Style::default().fg(Color::DarkGray)),
        ];
        if self.fetching {
            spans.push(Span::raw("   "));
            spans.push(Span::styled("⟳ fetching", Style::default().fg(Color::Yellow)));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            controls_area,
        );

        if let Some(error) = &self.error {
            frame.render_widget(
                Paragraph::new(format!("Fetch failed: {error}"))
                    .style(Style::default().fg(Color::Red))
                    .alignment(Alignment::Center),
                error_area,
            );
        }
    }
}
