use serde::{Deserialize, Serialize};

/// Every command the user can issue. Config files name them in kebab-case
/// (`"remove-last"`, `"reset-all"`, ...).
///
/// `Start`, `Stop`, `Reset` and `Toggle` act on the selected stopwatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    Start,
    Stop,
    Reset,
    Toggle,
    Add,
    RemoveLast,
    RemoveAll,
    ResetAll,
    SelectNext,
    SelectPrev,
    ToggleDark,
    Quit,
}

impl Action {
    /// Footer label.
    pub fn label(self) -> &'static str {
        match self {
            Action::Start => "Start",
            Action::Stop => "Stop",
            Action::Reset => "Reset",
            Action::Toggle => "Start/Stop",
            Action::Add => "Add",
            Action::RemoveLast => "Remove",
            Action::RemoveAll => "Remove all",
            Action::ResetAll => "Reset all",
            Action::SelectNext => "Next",
            Action::SelectPrev => "Prev",
            Action::ToggleDark => "Dark mode",
            Action::Quit => "Quit",
        }
    }
}
