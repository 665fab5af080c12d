//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crossterm::event::KeyEvent;

use super::keymap::{KeyBinding, KeyParseError};
use crate::app::action::Action;

pub const MIN_REFRESH_RATE_HZ: u32 = 1;
pub const MAX_REFRESH_RATE_HZ: u32 = 240;
pub const MAX_INITIAL_STOPWATCHES: usize = 64;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("refresh_rate_hz must be between 1 and 240, got {0}")]
    RefreshRate(u32),
    #[error("initial_stopwatches must be at most 64, got {0}")]
    InitialStopwatches(usize),
    #[error("invalid key binding `{binding}`: {source}")]
    KeyBinding {
        binding: String,
        #[source]
        source: KeyParseError,
    },
}

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    /// Extra or overriding bindings, `"<key>" = "<action>"`. Merged on top
    /// of [`default_keybindings`].
    #[serde(default)]
    pub keybindings: BTreeMap<String, Action>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let hz = self.ui.refresh_rate_hz;
        if !(MIN_REFRESH_RATE_HZ..=MAX_REFRESH_RATE_HZ).contains(&hz) {
            return Err(ConfigError::RefreshRate(hz));
        }
        if self.ui.initial_stopwatches > MAX_INITIAL_STOPWATCHES {
            return Err(ConfigError::InitialStopwatches(self.ui.initial_stopwatches));
        }
        self.keymap().map(|_| ())
    }

    /// Resolve the default bindings plus the user's overrides.
    ///
    /// A user entry for a key that already has a default replaces it.
    pub fn keymap(&self) -> Result<Keymap, ConfigError> {
        let mut entries: Vec<(&str, Action)> = default_keybindings();
        entries.extend(self.keybindings.iter().map(|(k, a)| (k.as_str(), *a)));

        let mut bindings: Vec<(KeyBinding, Action)> = Vec::new();
        for (key, action) in entries {
            let binding = KeyBinding::parse(key).map_err(|source| ConfigError::KeyBinding {
                binding: key.to_string(),
                source,
            })?;
            match bindings.iter_mut().find(|(b, _)| *b == binding) {
                Some(existing) => existing.1 = action,
                None => bindings.push((binding, action)),
            }
        }
        Ok(Keymap { bindings })
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ui.refresh_rate_hz.max(MIN_REFRESH_RATE_HZ)
    }
}

/// Resolved key bindings, in definition order.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, Action)>,
}

impl Keymap {
    pub fn lookup(&self, event: &KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(b, _)| b.matches(event))
            .map(|(_, a)| *a)
    }

    /// The first binding for `action`, for display.
    pub fn binding_for(&self, action: Action) -> Option<KeyBinding> {
        self.bindings
            .iter()
            .find(|(_, a)| *a == action)
            .map(|(b, _)| *b)
    }
}

pub fn default_keybindings() -> Vec<(&'static str, Action)> {
    vec![
        ("a", Action::Add),
        ("r", Action::RemoveLast),
        ("ctrl+r", Action::RemoveAll),
        ("ctrl+e", Action::ResetAll),
        ("d", Action::ToggleDark),
        ("ctrl+q", Action::Quit),
        ("s", Action::Start),
        ("x", Action::Stop),
        ("e", Action::Reset),
        ("space", Action::Toggle),
        ("enter", Action::Toggle),
        ("down", Action::SelectNext),
        ("j", Action::SelectNext),
        ("up", Action::SelectPrev),
        ("k", Action::SelectPrev),
    ]
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_refresh_rate")]
    pub refresh_rate_hz: u32,
    #[serde(default = "default_true")]
    pub dark_mode: bool,
    #[serde(default = "default_initial_stopwatches")]
    pub initial_stopwatches: usize,
    #[serde(default = "default_true")]
    pub show_footer: bool,
    #[serde(default = "default_true")]
    pub show_clock: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_rate_hz: default_refresh_rate(),
            dark_mode: true,
            initial_stopwatches: default_initial_stopwatches(),
            show_footer: true,
            show_clock: true,
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: default_log_level(),
            log_dir: default_log_dir(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_refresh_rate() -> u32 {
    60
}
fn default_initial_stopwatches() -> usize {
    1
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stopwatches")
        .join("logs")
}
