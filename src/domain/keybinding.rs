use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::borrow::Cow;
use std::str::FromStr;

use super::errors::KeyParseError;
use super::panel::PanelId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    ToggleHelp,

    // Panels
    LoadCatalog,
    LoadCart,
    LoadProfile,

    // Demo controls
    Reset,
    ToggleCode,
}

impl Action {
    #[must_use]
    pub const fn load(panel: PanelId) -> Self {
        match panel {
            PanelId::Catalog => Self::LoadCatalog,
            PanelId::Cart => Self::LoadCart,
            PanelId::Profile => Self::LoadProfile,
        }
    }

    /// Panel activated by this action, if any.
    #[must_use]
    pub const fn panel(self) -> Option<PanelId> {
        match self {
            Self::LoadCatalog => Some(PanelId::Catalog),
            Self::LoadCart => Some(PanelId::Cart),
            Self::LoadProfile => Some(PanelId::Profile),
            _ => None,
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Quit => "Quit",
            Self::ToggleHelp => "Toggle help",
            Self::LoadCatalog => "Load Product Catalog",
            Self::LoadCart => "Load Shopping Cart",
            Self::LoadProfile => "Load User Profile",
            Self::Reset => "Reset demo",
            Self::ToggleCode => "Show/hide code sample",
        }
    }
}

/// Parses the action names used in the `[keybindings]` config table.
impl FromStr for Action {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Quit" => Ok(Self::Quit),
            "ToggleHelp" => Ok(Self::ToggleHelp),
            "LoadCatalog" => Ok(Self::LoadCatalog),
            "LoadCart" => Ok(Self::LoadCart),
            "LoadProfile" => Ok(Self::LoadProfile),
            "Reset" => Ok(Self::Reset),
            "ToggleCode" => Ok(Self::ToggleCode),
            other => Err(KeyParseError::UnknownAction(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub label: Cow<'static, str>,
    pub visible_in_bar: bool,
}

impl Keybind {
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            visible_in_bar: true,
        }
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }

    /// Whether `key` triggers this binding.
    ///
    /// Shift is ignored for characters since terminals report it inconsistently.
    #[must_use]
    pub fn matches(&self, key: &KeyEvent) -> bool {
        if self.key.code != key.code {
            return false;
        }
        if matches!(key.code, KeyCode::Char(_)) {
            let relevant = KeyModifiers::CONTROL | KeyModifiers::ALT;
            return self.key.modifiers & relevant == key.modifiers & relevant;
        }
        self.key.modifiers == key.modifiers
    }
}

/// Parses strings such as `"q"`, `"Ctrl+r"`, `"Alt+Enter"` or `"F1"`.
///
/// # Errors
/// Returns [`KeyParseError`] when the key or a modifier is not recognized.
pub fn parse_key(input: &str) -> Result<KeyEvent, KeyParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(KeyParseError::Empty);
    }

    let mut parts: Vec<&str> = trimmed.split('+').collect();
    // "Ctrl++" binds the plus key.
    if trimmed.ends_with("++") {
        parts.truncate(parts.len() - 2);
        parts.push("+");
    }
    let key_part = parts.pop().ok_or(KeyParseError::Empty)?;

    let mut modifiers = KeyModifiers::NONE;
    for part in parts {
        modifiers |= match part.to_lowercase().as_str() {
            "ctrl" | "control" | "c" => KeyModifiers::CONTROL,
            "alt" | "meta" | "a" => KeyModifiers::ALT,
            "shift" | "s" => KeyModifiers::SHIFT,
            _ => return Err(KeyParseError::UnknownModifier(part.to_string())),
        };
    }

    let code = match key_part.to_lowercase().as_str() {
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "backspace" | "bksp" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        lower if lower.len() > 1 && lower.starts_with('f') => lower[1..]
            .parse::<u8>()
            .ok()
            .filter(|n| (1..=12).contains(n))
            .map(KeyCode::F)
            .ok_or_else(|| KeyParseError::UnknownKey(key_part.to_string()))?,
        _ => {
            let mut chars = key_part.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(KeyParseError::UnknownKey(key_part.to_string())),
            }
        }
    };

    Ok(KeyEvent::new(code, modifiers))
}

/// Short display form of a key, e.g. `C-r` or `Esc`.
#[must_use]
pub fn format_key(key: &KeyEvent) -> String {
    use std::fmt::Write;
    let mut s = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        s.push_str("C-");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        s.push_str("A-");
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) && !matches!(key.code, KeyCode::Char(_)) {
        s.push_str("S-");
    }

    match key.code {
        KeyCode::Char(' ') => s.push_str("Space"),
        KeyCode::Char(c) => s.push(c),
        KeyCode::Enter => s.push_str("Enter"),
        KeyCode::Esc => s.push_str("Esc"),
        KeyCode::Tab => s.push_str("Tab"),
        KeyCode::Backspace => s.push_str("Bksp"),
        KeyCode::Up => s.push('↑'),
        KeyCode::Down => s.push('↓'),
        KeyCode::Left => s.push('←'),
        KeyCode::Right => s.push('→'),
        KeyCode::F(n) => {
            let _ = write!(s, "F{n}");
        }
        _ => {
            let _ = write!(s, "{:?}", key.code);
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("q", KeyCode::Char('q'), KeyModifiers::NONE)]
    #[test_case("Ctrl+r", KeyCode::Char('r'), KeyModifiers::CONTROL)]
    #[test_case("alt+enter", KeyCode::Enter, KeyModifiers::ALT)]
    #[test_case("F1", KeyCode::F(1), KeyModifiers::NONE)]
    #[test_case("Esc", KeyCode::Esc, KeyModifiers::NONE)]
    #[test_case("Ctrl++", KeyCode::Char('+'), KeyModifiers::CONTROL)]
    #[test_case("space", KeyCode::Char(' '), KeyModifiers::NONE)]
    fn test_parse_key(input: &str, code: KeyCode, modifiers: KeyModifiers) {
        assert_eq!(parse_key(input).unwrap(), KeyEvent::new(code, modifiers));
    }

    #[test]
    fn test_parse_key_errors() {
        assert!(matches!(parse_key(""), Err(KeyParseError::Empty)));
        assert!(matches!(
            parse_key("Hyper+x"),
            Err(KeyParseError::UnknownModifier(m)) if m == "Hyper"
        ));
        assert!(matches!(
            parse_key("banana"),
            Err(KeyParseError::UnknownKey(k)) if k == "banana"
        ));
        assert!(matches!(parse_key("F13"), Err(KeyParseError::UnknownKey(_))));
    }

    #[test]
    fn test_matches_ignores_shift_on_chars() {
        let bind = Keybind::new(
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE),
            Action::ToggleHelp,
            "Help",
        );
        assert!(bind.matches(&KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT)));
        assert!(!bind.matches(&KeyEvent::new(KeyCode::Char('?'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_format_key() {
        assert_eq!(
            format_key(&KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            "C-r"
        );
        assert_eq!(
            format_key(&KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT)),
            "S-Enter"
        );
        assert_eq!(format_key(&KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE)), "F2");
    }

    #[test_case("LoadCatalog", Action::LoadCatalog)]
    #[test_case("LoadCart", Action::LoadCart)]
    #[test_case("LoadProfile", Action::LoadProfile)]
    #[test_case("Reset", Action::Reset)]
    #[test_case("ToggleCode", Action::ToggleCode)]
    #[test_case("ToggleHelp", Action::ToggleHelp)]
    #[test_case(" Quit ", Action::Quit)]
    fn test_parse_action(input: &str, expected: Action) {
        assert_eq!(input.parse::<Action>(), Ok(expected));
    }

    #[test]
    fn test_parse_unknown_action() {
        assert_eq!(
            "Explode".parse::<Action>(),
            Err(KeyParseError::UnknownAction("Explode".to_string()))
        );
        assert!("reset".parse::<Action>().is_err());
    }

    #[test]
    fn test_action_panel_round_trip() {
        for panel in PanelId::ALL {
            assert_eq!(Action::load(panel).panel(), Some(panel));
        }
        assert_eq!(Action::Reset.panel(), None);
    }
}
