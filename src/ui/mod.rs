//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod welcome;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match app.state.current_view {
        View::Welcome => welcome::draw(frame, main_area),
        View::CustomerForm => forms::draw_customer_form(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Errors are modal and drawn last
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error, app.state.queued_errors());
    }
}
