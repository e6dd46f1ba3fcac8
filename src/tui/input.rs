// Input debouncing for action keys
//
// Most terminals never send key release events, and a held key arrives as a
// stream of presses. Action keys (open editor, quit, copy, theme) trigger
// once per press and ignore repeats inside the debounce window; everything
// else passes straight through so typing and navigation stay responsive.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Default window during which repeated presses of an action key are ignored
const ACTION_DEBOUNCE: Duration = Duration::from_millis(150);

/// Defines how a key should behave when pressed/held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBehavior {
    /// Every press triggers
    Immediate,

    /// Trigger once, then ignore presses until the key is released or the
    /// window has passed since the last trigger
    Debounced { window: Duration },
}

impl KeyBehavior {
    pub fn action() -> Self {
        Self::Debounced {
            window: ACTION_DEBOUNCE,
        }
    }
}

/// Input handler that manages key behaviors
pub struct InputHandler {
    /// When each debounced key last triggered; cleared on release
    last_triggered: HashMap<KeyCode, Instant>,
    /// Map of key code to its behavior configuration
    key_behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            last_triggered: HashMap::new(),
            key_behaviors: HashMap::new(),
        }
    }

    /// Configure a key's behavior
    pub fn configure_key(&mut self, key: KeyCode, behavior: KeyBehavior) {
        self.key_behaviors.insert(key, behavior);
    }

    /// Configure multiple keys with the same behavior
    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.configure_key(*key, behavior);
        }
    }

    /// Handle a key press event
    /// Returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.handle_key_press_at(key, Instant::now())
    }

    fn handle_key_press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let behavior = self
            .key_behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::Immediate);

        match behavior {
            KeyBehavior::Immediate => true,
            KeyBehavior::Debounced { window } => match self.last_triggered.get(&key) {
                Some(last) if now.duration_since(*last) < window => false,
                _ => {
                    self.last_triggered.insert(key, now);
                    true
                }
            },
        }
    }

    /// Handle a key release event
    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.last_triggered.remove(&key);
    }

    /// Default configuration: debounce the keys that open, close or toggle things
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        handler.configure_keys(
            &[
                // Open editor
                KeyCode::Enter,
                KeyCode::F(2),
                // Quit
                KeyCode::Char('q'),
                KeyCode::Char('Q'),
                // Theme, clipboard, help
                KeyCode::Char('t'),
                KeyCode::Char('y'),
                KeyCode::Char('?'),
            ],
            KeyBehavior::action(),
        );

        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}
