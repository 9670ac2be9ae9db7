use crate::domain::keybinding::{Action, Keybind, parse_key};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Maps keys to demo actions.
///
/// Each action has at most one primary key, shown in the control panel and
/// footer; any number of secondary keys may trigger it too.
pub struct CommandRegistry {
    display_bindings: HashMap<Action, KeyEvent>,
    input_bindings: Vec<Keybind>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut registry = Self {
            display_bindings: HashMap::new(),
            input_bindings: Vec::new(),
        };

        registry.register(Action::LoadCatalog, key('1'), "Catalog", true);
        registry.register(Action::LoadCart, key('2'), "Cart", true);
        registry.register(Action::LoadProfile, key('3'), "Profile", true);
        registry.register(Action::Reset, key('r'), "Reset", true);
        registry.register(Action::ToggleCode, key('s'), "Code", true);
        registry.register(Action::ToggleHelp, key('?'), "Help", true);
        registry.register(
            Action::ToggleHelp,
            KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE),
            "Help",
            false,
        );
        registry.register(Action::Quit, key('q'), "Quit", true);
        registry.register(
            Action::Quit,
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            "Quit",
            false,
        );

        registry
    }
}

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

impl CommandRegistry {
    /// Default bindings with user overrides applied.
    ///
    /// An override becomes the action's primary key and takes the key away
    /// from whatever it was bound to before. Entries with an unparseable key
    /// or an unknown action name are skipped.
    #[must_use]
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut registry = Self::default();

        let mut entries: Vec<_> = overrides.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        for (key_str, action_str) in entries {
            let parsed = parse_key(key_str)
                .and_then(|key| action_str.parse::<Action>().map(|action| (key, action)));
            match parsed {
                Ok((key, action)) => {
                    registry.unbind(&key);
                    registry.demote(action);
                    registry.register(action, key, short_label(action), true);
                    debug!(key = %key_str, action = ?action, "Applied key binding override");
                }
                Err(e) => {
                    warn!(
                        key = %key_str,
                        action = %action_str,
                        error = %e,
                        "Ignoring invalid key binding"
                    );
                }
            }
        }

        registry
    }

    fn register(&mut self, action: Action, key: KeyEvent, label: &'static str, primary: bool) {
        let mut bind = Keybind::new(key, action, label);
        if primary && !self.display_bindings.contains_key(&action) {
            self.display_bindings.insert(action, key);
        } else {
            bind = bind.hidden();
        }
        self.input_bindings.push(bind);
    }

    fn demote(&mut self, action: Action) {
        self.display_bindings.remove(&action);
        for bind in self.input_bindings.iter_mut().filter(|b| b.action == action) {
            bind.visible_in_bar = false;
        }
    }

    fn unbind(&mut self, key: &KeyEvent) {
        let removed: Vec<Action> = self
            .input_bindings
            .iter()
            .filter(|b| b.matches(key))
            .map(|b| b.action)
            .collect();
        self.input_bindings.retain(|b| !b.matches(key));
        for action in removed {
            if self.display_bindings.get(&action) == Some(key) {
                self.display_bindings.remove(&action);
            }
        }
    }

    /// Primary key for `action`.
    #[must_use]
    pub fn get(&self, action: Action) -> Option<KeyEvent> {
        self.display_bindings.get(&action).copied()
    }

    #[must_use]
    pub fn find_action(&self, key: &KeyEvent) -> Option<Action> {
        self.input_bindings
            .iter()
            .find(|b| b.matches(key))
            .map(|b| b.action)
    }

    /// Primary bindings in a fixed order.
    #[must_use]
    pub fn bar_bindings(&self) -> Vec<Keybind> {
        BAR_ORDER
            .iter()
            .filter_map(|action| {
                self.input_bindings
                    .iter()
                    .find(|b| b.action == *action && b.visible_in_bar)
                    .cloned()
            })
            .collect()
    }

    /// Every binding, for the help overlay.
    #[must_use]
    pub fn all_bindings(&self) -> &[Keybind] {
        &self.input_bindings
    }
}

const BAR_ORDER: [Action; 7] = [
    Action::LoadCatalog,
    Action::LoadCart,
    Action::LoadProfile,
    Action::Reset,
    Action::ToggleCode,
    Action::ToggleHelp,
    Action::Quit,
];

const fn short_label(action: Action) -> &'static str {
    match action {
        Action::Quit => "Quit",
        Action::ToggleHelp => "Help",
        Action::LoadCatalog => "Catalog",
        Action::LoadCart => "Cart",
        Action::LoadProfile => "Profile",
        Action::Reset => "Reset",
        Action::ToggleCode => "Code",
    }
}
