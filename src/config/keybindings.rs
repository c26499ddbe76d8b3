//! Keybinding configuration for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;

use crate::tui::event::Action;

/// Key strings bound to each action.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeybindingConfig {
    pub quit: Vec<String>,
    pub move_up: Vec<String>,
    pub move_down: Vec<String>,
    pub next_page: Vec<String>,
    pub prev_page: Vec<String>,
    pub select: Vec<String>,
    pub back: Vec<String>,
    pub search: Vec<String>,
    pub next_language: Vec<String>,
    pub next_pane: Vec<String>,
}

fn keys(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self {
            quit: keys(&["q", "Ctrl+c"]),
            move_up: keys(&["k", "Up"]),
            move_down: keys(&["j", "Down"]),
            next_page: keys(&["n", "PageDown"]),
            prev_page: keys(&["p", "PageUp"]),
            select: keys(&["Enter"]),
            back: keys(&["Esc", "Backspace", "h", "Left"]),
            search: keys(&["/"]),
            next_language: keys(&["l"]),
            next_pane: keys(&["Tab"]),
        }
    }
}

impl KeybindingConfig {
    /// Resolve a key event to an action. Earlier entries win on overlap.
    pub fn get_action(&self, key: &KeyEvent) -> Action {
        let table: [(&[String], Action); 10] = [
            (&self.quit, Action::Quit),
            (&self.move_up, Action::MoveUp),
            (&self.move_down, Action::MoveDown),
            (&self.next_page, Action::NextPage),
            (&self.prev_page, Action::PrevPage),
            (&self.select, Action::Select),
            (&self.back, Action::Back),
            (&self.search, Action::Search),
            (&self.next_language, Action::NextLanguage),
            (&self.next_pane, Action::NextPane),
        ];

        table
            .iter()
            .find(|(bindings, _)| matches_key(key, bindings))
            .map(|(_, action)| *action)
            .unwrap_or(Action::None)
    }
}

fn matches_key(key: &KeyEvent, bindings: &[String]) -> bool {
    bindings
        .iter()
        .filter_map(|binding| parse_key_string(binding).ok())
        .any(|parsed| parsed.matches(key))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Shift is ignored when the binding doesn't ask for it, so "R" and "/"
    /// match however the terminal reports them.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.code == key.code
            && (self.modifiers == key.modifiers
                || self.modifiers == (key.modifiers & !KeyModifiers::SHIFT))
    }
}

/// Parse "j", "Enter", "Ctrl+c", "Shift+Tab" and similar.
pub fn parse_key_string(s: &str) -> Result<KeyBinding, String> {
    let s = s.trim();
    // A lone "+" is a key, not a separator.
    let (modifier_parts, key_part) = match s.rsplit_once('+') {
        Some((mods, key)) if !mods.is_empty() && !key.is_empty() => (Some(mods), key),
        _ => (None, s),
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in modifier_parts.into_iter().flat_map(|m| m.split('+')) {
        match part.to_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => return Err(format!("Unknown modifier: {}", part)),
        }
    }

    Ok(KeyBinding {
        code: parse_key_code(key_part)?,
        modifiers,
    })
}

fn parse_key_code(s: &str) -> Result<KeyCode, String> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    let lowered = s.to_lowercase();
    if let Some(n) = lowered.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
        if (1..=12).contains(&n) {
            return Ok(KeyCode::F(n));
        }
    }

    match lowered.as_str() {
        "enter" | "return" => Ok(KeyCode::Enter),
        "tab" => Ok(KeyCode::Tab),
        "backtab" => Ok(KeyCode::BackTab),
        "backspace" | "bs" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" | "pgup" => Ok(KeyCode::PageUp),
        "pagedown" | "pgdn" => Ok(KeyCode::PageDown),
        "up" => Ok(KeyCode::Up),
        "down" => Ok(KeyCode::Down),
        "left" => Ok(KeyCode::Left),
        "right" => Ok(KeyCode::Right),
        "esc" | "escape" => Ok(KeyCode::Esc),
        "space" => Ok(KeyCode::Char(' ')),
        _ => Err(format!("Unknown key: {}", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_char() {
        let binding = parse_key_string("/").unwrap();
        assert_eq!(binding.code, KeyCode::Char('/'));
        assert_eq!(binding.modifiers, KeyModifiers::NONE);
    }

    #[test]
    fn test_parse_plus_key() {
        let binding = parse_key_string("+").unwrap();
        assert_eq!(binding.code, KeyCode::Char('+'));
    }

    #[test]
    fn test_parse_special_keys() {
        assert_eq!(parse_key_string("Esc").unwrap().code, KeyCode::Esc);
        assert_eq!(parse_key_string("backspace").unwrap().code, KeyCode::Backspace);
        assert_eq!(parse_key_string("F5").unwrap().code, KeyCode::F(5));
        assert!(parse_key_string("F13").is_err());
    }

    #[test]
    fn test_parse_modifiers() {
        let binding = parse_key_string("Ctrl+Shift+a").unwrap();
        assert_eq!(binding.code, KeyCode::Char('a'));
        assert_eq!(
            binding.modifiers,
            KeyModifiers::CONTROL | KeyModifiers::SHIFT
        );
        assert!(parse_key_string("Hyper+a").is_err());
    }

    #[test]
    fn test_shift_is_tolerated() {
        let binding = parse_key_string("/").unwrap();
        let key = KeyEvent::new(KeyCode::Char('/'), KeyModifiers::SHIFT);
        assert!(binding.matches(&key));

        let binding = parse_key_string("Ctrl+c").unwrap();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(!binding.matches(&key));
    }

    #[test]
    fn test_default_actions() {
        let config = KeybindingConfig::default();

        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(config.get_action(&key), Action::Quit);

        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(config.get_action(&key), Action::Back);

        let key = KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE);
        assert_eq!(config.get_action(&key), Action::Search);

        let key = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE);
        assert_eq!(config.get_action(&key), Action::NextLanguage);

        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(config.get_action(&key), Action::NextPane);

        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(config.get_action(&key), Action::None);
    }
}
