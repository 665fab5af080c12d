use crate::app::state::AppState;
use crate::stopwatch::format_elapsed;
use crate::ui::layout::{self, BUTTON_WIDTH};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use std::time::Instant;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme, now: Instant) {
    if state.timers.is_empty() {
        render_placeholder(frame, area, state, theme);
        return;
    }

    let rows = layout::stopwatch_rows(area, state.timers.len(), state.scroll_offset);
    for (index, rect) in rows {
        let Some((id, tracker)) = state.timers.get_index(index) else {
            continue;
        };
        let selected = state.selected == Some(index);
        let running = tracker.is_running();

        let border_style = if running {
            theme.border_running()
        } else if selected {
            theme.border_selected()
        } else {
            theme.border()
        };
        let block = Block::default()
            .title(format!(" Stopwatch {} ", id + 1))
            .title_style(theme.row_title())
            .borders(Borders::ALL)
            .border_type(theme.border_type(selected))
            .border_style(border_style);
        frame.render_widget(block, rect);

        let areas = layout::row_areas(rect);
        let (label, style) = if running {
            ("Stop", theme.button_stop())
        } else {
            ("Start", theme.button_start())
        };
        frame.render_widget(button(label, style), areas.start_stop);
        frame.render_widget(button("Reset", theme.button_reset()), areas.reset);

        let time_style = if running {
            theme.time_running()
        } else {
            theme.time()
        };
        let time = Paragraph::new(format_elapsed(tracker.current_elapsed_at(now)))
            .style(time_style)
            .alignment(Alignment::Right);
        frame.render_widget(time, areas.time);
    }
}

fn button(label: &str, style: Style) -> Paragraph<'static> {
    Paragraph::new(format!("{:^width$}", label, width = BUTTON_WIDTH as usize)).style(style)
}

fn render_placeholder(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let hint = match state.keymap.binding_for(crate::app::action::Action::Add) {
        Some(binding) => format!("No stopwatches. Press {} to add one.", binding),
        None => "No stopwatches.".to_string(),
    };
    let paragraph = Paragraph::new(hint)
        .style(theme.placeholder())
        .alignment(Alignment::Center);
    let line = Rect::new(area.x, area.y + area.height / 2, area.width, area.height.min(1));
    frame.render_widget(paragraph, line);
}
