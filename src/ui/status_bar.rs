use crate::app::action::Action;
use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

/// Actions advertised in the footer, in display order.
const FOOTER_ACTIONS: &[Action] = &[
    Action::Add,
    Action::RemoveLast,
    Action::RemoveAll,
    Action::ResetAll,
    Action::Toggle,
    Action::Reset,
    Action::ToggleDark,
    Action::Quit,
];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts: Vec<Span> = Vec::new();
    let mut used = 0;

    for action in FOOTER_ACTIONS {
        let Some(binding) = state.keymap.binding_for(*action) else {
            continue;
        };
        let key = format!(" {} ", binding);
        let label = format!("{} ", action.label());
        let width = key.width() + label.width();
        // Drop hints that would be cut off rather than truncating mid-word
        if used + width > area.width as usize {
            break;
        }
        used += width;
        parts.push(Span::styled(key, theme.footer_key()));
        parts.push(Span::styled(label, theme.footer()));
    }

    let paragraph = Paragraph::new(Line::from(parts)).style(theme.footer());
    frame.render_widget(paragraph, area);
}
