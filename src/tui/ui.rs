use crate::core::QueueState;
use crate::tui::component::Component;
use crate::tui::components::{ContentCard, NavBar, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

pub fn draw_ui(frame: &mut Frame, state: &QueueState, client_name: &str, spinner_frame: usize) {
    let mut nav_bar = NavBar {
        can_navigate_up: state.can_navigate_up(),
        can_navigate_down: state.can_navigate_down(),
        fetching: state.fetching_more,
        error: state.last_error.clone(),
    };

    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(nav_bar.height())]);
    let [title_area, main_area, nav_area] = layout.areas(frame.area());

    TitleBar::new(
        client_name.to_string(),
        state.status_message.clone(),
        state.position,
        state.len(),
    )
    .render(frame, title_area);

    ContentCard::new(state.current(), state.loading, spinner_frame).render(frame, main_area);

    nav_bar.render(frame, nav_area);
}
