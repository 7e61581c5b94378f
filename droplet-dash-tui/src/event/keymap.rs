//! Key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One key binding
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// Whether the key event matches this binding
    pub fn matches(&self, key: &KeyEvent) -> bool {
        // Terminals disagree on whether '?' carries SHIFT
        let modifiers = match key.code {
            KeyCode::Char(_) => key.modifiers - KeyModifiers::SHIFT,
            _ => key.modifiers,
        };
        modifiers == self.modifiers && key.code == self.code
    }
}

/// Default key bindings
pub struct DefaultKeymap;

impl DefaultKeymap {
    // Global
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // Droplet commands
    pub const DESTROY: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));
    pub const REBOOT: KeyBinding = KeyBinding::alt(KeyCode::Char('b'));
    pub const SHUTDOWN: KeyBinding = KeyBinding::alt(KeyCode::Char('s'));
    pub const PRIVATE_NETWORKING: KeyBinding = KeyBinding::alt(KeyCode::Char('p'));
}

/// Key / description pairs for the help dialog
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("↑ / k", "Previous droplet"),
    ("↓ / j", "Next droplet"),
    ("Home / End", "First / last droplet"),
    ("Enter", "Show droplet details"),
    ("Esc", "Close dialog / clear highlight"),
    ("Alt+r", "Refresh"),
    ("Alt+d", "Destroy droplet"),
    ("Alt+b", "Reboot droplet"),
    ("Alt+s", "Shut down droplet"),
    ("Alt+p", "Enable private networking"),
    ("?", "This help"),
    ("q / Ctrl+C", "Quit"),
];
