//! Key binding parsing.
//!
//! Bindings are written as `"ctrl+r"`, `"shift+tab"`, `"space"`, `"a"`.
//! Modifiers come first, joined with `+`; the final segment is either a
//! single character or one of the named keys below.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyParseError {
    #[error("empty key binding")]
    Empty,
    #[error("unknown modifier `{0}`")]
    UnknownModifier(String),
    #[error("unknown key `{0}`")]
    UnknownKey(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn parse(text: &str) -> Result<Self, KeyParseError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(KeyParseError::Empty);
        }

        // A bare "+" is the plus key, not a separator
        let (mods, key) = match text.rsplit_once('+') {
            Some((mods, "")) => (mods.strip_suffix('+').unwrap_or(mods), "+"),
            Some((mods, key)) => (mods, key),
            None => ("", text),
        };

        let mut modifiers = KeyModifiers::NONE;
        for m in mods.split('+').filter(|m| !m.is_empty()) {
            modifiers |= match m.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => KeyModifiers::CONTROL,
                "alt" | "meta" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                _ => return Err(KeyParseError::UnknownModifier(m.to_string())),
            };
        }

        let mut code = parse_key_code(key)?;

        // Store character keys the way terminals report them: `shift+n`
        // arrives as `N`, and control chords compare case-insensitively.
        if let KeyCode::Char(c) = code {
            if modifiers.contains(KeyModifiers::SHIFT) {
                code = KeyCode::Char(c.to_ascii_uppercase());
                modifiers.remove(KeyModifiers::SHIFT);
            } else if modifiers.contains(KeyModifiers::CONTROL) {
                code = KeyCode::Char(c.to_ascii_lowercase());
            }
        }
        Ok(Self { code, modifiers })
    }

    /// Whether a terminal key event triggers this binding.
    ///
    /// Terminals report shifted characters as the uppercase char, sometimes
    /// with SHIFT set and sometimes without, so SHIFT is ignored when
    /// comparing character keys.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        match (self.code, event.code) {
            (KeyCode::Char(a), KeyCode::Char(b)) => {
                let relevant = KeyModifiers::CONTROL | KeyModifiers::ALT;
                let chars_match = if self.modifiers.contains(KeyModifiers::CONTROL) {
                    a.eq_ignore_ascii_case(&b)
                } else {
                    a == b
                };
                chars_match
                    && (self.modifiers & relevant) == (event.modifiers & relevant)
            }
            (a, b) => a == b && self.modifiers == event.modifiers,
        }
    }
}

fn parse_key_code(key: &str) -> Result<KeyCode, KeyParseError> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    let lower = key.to_ascii_lowercase();
    let code = match lower.as_str() {
        "space" => KeyCode::Char(' '),
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        f if f.starts_with('f') => match f[1..].parse::<u8>() {
            Ok(n @ 1..=12) => KeyCode::F(n),
            _ => return Err(KeyParseError::UnknownKey(key.to_string())),
        },
        _ => return Err(KeyParseError::UnknownKey(key.to_string())),
    };
    Ok(code)
}

impl fmt::Display for KeyBinding {
    /// Short form used in the footer: `^r`, `M-x`, `space`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            write!(f, "^")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            write!(f, "M-")?;
        }
        match self.code {
            KeyCode::Char(' ') => write!(f, "space"),
            KeyCode::Char(c) => write!(f, "{}", c),
            KeyCode::Enter => write!(f, "enter"),
            KeyCode::Esc => write!(f, "esc"),
            KeyCode::Tab => write!(f, "tab"),
            KeyCode::BackTab => write!(f, "S-tab"),
            KeyCode::Backspace => write!(f, "bksp"),
            KeyCode::Delete => write!(f, "del"),
            KeyCode::Insert => write!(f, "ins"),
            KeyCode::Up => write!(f, "↑"),
            KeyCode::Down => write!(f, "↓"),
            KeyCode::Left => write!(f, "←"),
            KeyCode::Right => write!(f, "→"),
            KeyCode::Home => write!(f, "home"),
            KeyCode::End => write!(f, "end"),
            KeyCode::PageUp => write!(f, "pgup"),
            KeyCode::PageDown => write!(f, "pgdn"),
            KeyCode::F(n) => write!(f, "F{}", n),
            _ => write!(f, "?"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_char() {
        assert_eq!(
            KeyBinding::parse("a"),
            Ok(KeyBinding::new(KeyCode::Char('a'), KeyModifiers::NONE))
        );
    }

    #[test]
    fn test_parse_modifiers() {
        assert_eq!(
            KeyBinding::parse("ctrl+r"),
            Ok(KeyBinding::new(KeyCode::Char('r'), KeyModifiers::CONTROL))
        );
        assert_eq!(
            KeyBinding::parse("Ctrl+Alt+Delete"),
            Ok(KeyBinding::new(
                KeyCode::Delete,
                KeyModifiers::CONTROL | KeyModifiers::ALT
            ))
        );
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(KeyBinding::parse("space").unwrap().code, KeyCode::Char(' '));
        assert_eq!(KeyBinding::parse("F5").unwrap().code, KeyCode::F(5));
        assert_eq!(KeyBinding::parse("pagedown").unwrap().code, KeyCode::PageDown);
        assert_eq!(KeyBinding::parse("+").unwrap().code, KeyCode::Char('+'));
        assert_eq!(
            KeyBinding::parse("ctrl++"),
            Ok(KeyBinding::new(KeyCode::Char('+'), KeyModifiers::CONTROL))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(KeyBinding::parse("  "), Err(KeyParseError::Empty));
        assert_eq!(
            KeyBinding::parse("hyper+a"),
            Err(KeyParseError::UnknownModifier("hyper".into()))
        );
        assert_eq!(
            KeyBinding::parse("f13"),
            Err(KeyParseError::UnknownKey("f13".into()))
        );
        assert_eq!(
            KeyBinding::parse("banana"),
            Err(KeyParseError::UnknownKey("banana".into()))
        );
    }

    #[test]
    fn test_matches_ignores_shift_on_chars() {
        let binding = KeyBinding::parse("A").unwrap();
        assert!(binding.matches(&KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)));
        assert!(binding.matches(&KeyEvent::new(KeyCode::Char('A'), KeyModifiers::NONE)));
        assert!(!binding.matches(&KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_matches_shift_char() {
        let binding = KeyBinding::parse("shift+n").unwrap();
        assert_eq!(binding, KeyBinding::new(KeyCode::Char('N'), KeyModifiers::NONE));
        assert!(binding.matches(&KeyEvent::new(KeyCode::Char('N'), KeyModifiers::SHIFT)));
        assert!(!binding.matches(&KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE)));

        let chord = KeyBinding::parse("ctrl+shift+x").unwrap();
        assert!(chord.matches(&KeyEvent::new(
            KeyCode::Char('X'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT
        )));
    }

    #[test]
    fn test_parse_ctrl_char_is_lowercased() {
        assert_eq!(KeyBinding::parse("ctrl+R"), KeyBinding::parse("ctrl+r"));
    }

    #[test]
    fn test_matches_requires_ctrl() {
        let binding = KeyBinding::parse("ctrl+r").unwrap();
        assert!(binding.matches(&KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)));
        assert!(!binding.matches(&KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE)));
        let plain = KeyBinding::parse("r").unwrap();
        assert!(!plain.matches(&KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_display_short_form() {
        assert_eq!(KeyBinding::parse("ctrl+e").unwrap().to_string(), "^e");
        assert_eq!(KeyBinding::parse("space").unwrap().to_string(), "space");
        assert_eq!(KeyBinding::parse("down").unwrap().to_string(), "↓");
    }
}
