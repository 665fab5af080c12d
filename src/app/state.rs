use crate::app::action::Action;
use crate::config::{AppConfig, ConfigError, Keymap};
use crate::stopwatch::{ElapsedTimeTracker, TimerCollection};
use crate::ui::layout;
use ratatui::layout::Rect;
use std::time::Instant;

pub struct AppState {
    pub config: AppConfig,
    pub keymap: Keymap,
    pub timers: TimerCollection,
    /// Display index of the stopwatch that per-stopwatch commands act on.
    pub selected: Option<usize>,
    pub scroll_offset: usize,
    pub dark_mode: bool,
    /// Last known terminal size.
    pub viewport: Rect,
    pub should_quit: bool,
    pub dirty: bool,
    pub clock_second: Option<u32>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        let keymap = config.keymap()?;
        let timers = TimerCollection::with_count(config.ui.initial_stopwatches);
        let selected = if timers.is_empty() { None } else { Some(0) };
        let dark_mode = config.ui.dark_mode;
        Ok(Self {
            config,
            keymap,
            timers,
            selected,
            scroll_offset: 0,
            dark_mode,
            viewport: Rect::default(),
            should_quit: false,
            dirty: true,
            clock_second: None,
        })
    }

    pub fn selected_tracker_mut(&mut self) -> Option<&mut ElapsedTimeTracker> {
        let index = self.selected?;
        self.timers.get_index_mut(index).map(|(_, t)| t)
    }

    pub fn select(&mut self, index: usize) {
        if index < self.timers.len() {
            self.selected = Some(index);
            self.scroll_to_selected();
            self.dirty = true;
        }
    }

    /// Apply one command at instant `now`.
    pub fn apply(&mut self, action: Action, now: Instant) {
        tracing::debug!(?action, selected = ?self.selected, "apply action");
        match action {
            Action::Start => {
                if let Some(t) = self.selected_tracker_mut() {
                    t.start_at(now);
                }
            }
            Action::Stop => {
                if let Some(t) = self.selected_tracker_mut() {
                    t.stop_at(now);
                }
            }
            Action::Reset => {
                if let Some(t) = self.selected_tracker_mut() {
                    t.reset_at(now);
                }
            }
            Action::Toggle => {
                if let Some(t) = self.selected_tracker_mut() {
                    if t.is_running() {
                        t.stop_at(now);
                    } else {
                        t.start_at(now);
                    }
                }
            }
            Action::Add => {
                let id = self.timers.add();
                self.selected = Some(self.timers.len() - 1);
                tracing::info!(id, count = self.timers.len(), "stopwatch added");
            }
            Action::RemoveLast => {
                if let Some(id) = self.timers.remove_last() {
                    tracing::info!(id, count = self.timers.len(), "stopwatch removed");
                }
                self.clamp_selection();
            }
            Action::RemoveAll => {
                self.timers.remove_all();
                self.selected = None;
                tracing::info!("all stopwatches removed");
            }
            Action::ResetAll => self.timers.reset_all_at(now),
            Action::SelectNext => self.select_next(),
            Action::SelectPrev => self.select_prev(),
            Action::ToggleDark => self.dark_mode = !self.dark_mode,
            Action::Quit => self.should_quit = true,
        }
        self.scroll_to_selected();
        self.dirty = true;
    }

    fn clamp_selection(&mut self) {
        self.selected = match self.timers.len() {
            0 => None,
            len => Some(self.selected.unwrap_or(0).min(len - 1)),
        };
    }

    pub fn select_next(&mut self) {
        let len = self.timers.len();
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % len,
            None => 0,
        });
    }

    pub fn select_prev(&mut self) {
        let len = self.timers.len();
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });
    }

    pub fn list_area(&self) -> Rect {
        layout::compute_layout(self.viewport, self.config.ui.show_footer).list
    }

    pub fn scroll_to_selected(&mut self) {
        let visible = layout::visible_rows(self.list_area());
        self.scroll_offset =
            layout::scroll_offset(self.scroll_offset, self.selected, self.timers.len(), visible);
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Rect::new(0, 0, width, height);
        self.scroll_to_selected();
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        let total = self.timers.len();
        let running = self.timers.running_count();
        let noun = if total == 1 { "stopwatch" } else { "stopwatches" };
        format!("{} {}, {} running", total, noun, running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn state() -> AppState {
        let mut state = AppState::new(AppConfig::default()).unwrap();
        state.resize(80, 24);
        state
    }

    #[test]
    fn test_starts_with_one_selected_stopwatch() {
        let state = state();
        assert_eq!(state.timers.len(), 1);
        assert_eq!(state.selected, Some(0));
        assert_eq!(state.status_line(), "1 stopwatch, 0 running");
    }

    #[test]
    fn test_per_stopwatch_actions_hit_selection_only() {
        let t0 = Instant::now();
        let mut state = state();
        state.apply(Action::Add, t0);
        assert_eq!(state.selected, Some(1));
        state.apply(Action::Start, t0);
        assert!(!state.timers.get_index(0).unwrap().1.is_running());
        assert!(state.timers.get_index(1).unwrap().1.is_running());

        state.apply(Action::Toggle, t0 + Duration::from_secs(2));
        let (_, second) = state.timers.get_index(1).unwrap();
        assert!(!second.is_running());
        assert_eq!(second.accumulated(), Duration::from_secs(2));
    }

    #[test]
    fn test_remove_actions_clamp_selection() {
        let t0 = Instant::now();
        let mut state = state();
        state.apply(Action::Add, t0);
        state.apply(Action::Add, t0);
        assert_eq!(state.selected, Some(2));
        state.apply(Action::RemoveLast, t0);
        assert_eq!(state.selected, Some(1));
        state.apply(Action::RemoveAll, t0);
        assert_eq!(state.selected, None);
        state.apply(Action::RemoveLast, t0);
        assert!(state.timers.is_empty());
        // per-stopwatch commands on an empty collection are no-ops
        state.apply(Action::Start, t0);
        state.apply(Action::SelectNext, t0);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_selection_wraps() {
        let t0 = Instant::now();
        let mut state = state();
        state.apply(Action::Add, t0);
        state.apply(Action::Add, t0);
        state.apply(Action::SelectNext, t0);
        assert_eq!(state.selected, Some(0));
        state.apply(Action::SelectPrev, t0);
        assert_eq!(state.selected, Some(2));
    }

    #[test]
    fn test_add_scrolls_new_stopwatch_into_view() {
        let t0 = Instant::now();
        let mut state = state();
        // 80x24 with footer leaves room for 7 rows
        for _ in 0..9 {
            state.apply(Action::Add, t0);
        }
        assert_eq!(state.selected, Some(9));
        assert_eq!(state.scroll_offset, 3);
        state.apply(Action::SelectNext, t0);
        assert_eq!(state.selected, Some(0));
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_reset_all_and_toggles() {
        let t0 = Instant::now();
        let mut state = state();
        state.apply(Action::Start, t0);
        state.apply(Action::ResetAll, t0 + Duration::from_secs(5));
        let (_, t) = state.timers.get_index(0).unwrap();
        assert!(t.is_running());
        assert_eq!(
            t.current_elapsed_at(t0 + Duration::from_secs(5)),
            Duration::ZERO
        );

        assert!(state.dark_mode);
        state.apply(Action::ToggleDark, t0);
        assert!(!state.dark_mode);
        state.apply(Action::Quit, t0);
        assert!(state.should_quit);
    }

    #[test]
    fn test_initial_count_from_config() {
        let mut cfg = AppConfig::default();
        cfg.ui.initial_stopwatches = 0;
        let state = AppState::new(cfg).unwrap();
        assert!(state.timers.is_empty());
        assert_eq!(state.selected, None);
        assert_eq!(state.status_line(), "0 stopwatches, 0 running");
    }
}
