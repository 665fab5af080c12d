use crate::app::state::AppState;
use crate::ui::theme::Theme;
use chrono::Local;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let title = " ⏱ Stopwatch ";
    let summary = format!(" {} ", state.status_line());
    let clock = if state.config.ui.show_clock {
        format!(" {} ", Local::now().format("%H:%M:%S"))
    } else {
        String::new()
    };

    let used = title.width() + summary.width() + clock.width();
    let remaining = (area.width as usize).saturating_sub(used);

    let line = Line::from(vec![
        Span::styled(title, theme.title()),
        Span::styled(summary, theme.header()),
        Span::styled(" ".repeat(remaining), theme.header()),
        Span::styled(clock, theme.header()),
    ]);
    frame.render_widget(Paragraph::new(line).style(theme.header()), area);
}
