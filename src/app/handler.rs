use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::ui::layout::{self, Button};
use chrono::{Local, Timelike};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

/// Turn one event into the commands it triggers. Selection changes caused by
/// mouse clicks are applied directly, so the returned commands always target
/// the selected stopwatch.
pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            handle_tick(state);
            vec![]
        }
    }
}

/// Ticks never touch a tracker. They only request a redraw, and only while
/// something on screen is actually changing.
fn handle_tick(state: &mut AppState) {
    if state.timers.any_running() {
        state.dirty = true;
    }

    if state.config.ui.show_clock {
        let second = Local::now().second();
        if state.clock_second != Some(second) {
            state.clock_second = Some(second);
            state.dirty = true;
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.resize(width, height);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match state.keymap.lookup(&key) {
        Some(action) => vec![action],
        None => {
            tracing::trace!(?key, "unbound key");
            vec![]
        }
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {}
        MouseEventKind::ScrollDown => return vec![Action::SelectNext],
        MouseEventKind::ScrollUp => return vec![Action::SelectPrev],
        _ => return vec![],
    }

    let Some((index, button)) = layout::hit_test(
        state.list_area(),
        state.timers.len(),
        state.scroll_offset,
        mouse.column,
        mouse.row,
    ) else {
        return vec![];
    };

    state.select(index);
    match button {
        Some(Button::StartStop) => vec![Action::Toggle],
        Some(Button::Reset) => vec![Action::Reset],
        None => vec![],
    }
}
