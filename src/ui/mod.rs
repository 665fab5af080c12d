mod header;
pub mod layout;
mod status_bar;
mod stopwatch_list;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use std::time::Instant;

pub use theme::Theme;

/// Draw the whole screen. Elapsed times are read at `now`.
pub fn render(frame: &mut Frame, state: &AppState, now: Instant) {
    let area = frame.area();
    let theme = Theme::new(state.dark_mode);
    let app_layout = layout::compute_layout(area, state.config.ui.show_footer);

    frame.render_widget(Block::default().style(theme.background()), area);
    header::render(frame, app_layout.header, state, &theme);
    stopwatch_list::render(frame, app_layout.list, state, &theme, now);
    if state.config.ui.show_footer {
        status_bar::render(frame, app_layout.footer, state, &theme);
    }
}
