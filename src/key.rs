//! Key bindings for the countdown.
//!
//! A [`Binding`] pairs one or more key codes with a help label. [`KeyMap`]
//! groups the bindings the app reacts to and resolves an incoming key to the
//! [`Action`] it triggers.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Add one step to the selected field.
    Increment,
    /// Remove one step from the selected field.
    Decrement,
    /// Start, pause or resume.
    Toggle,
    /// Back to idle at zero.
    Reset,
    /// Leave fullscreen, or quit when windowed.
    Escape,
    /// Quit unconditionally.
    Quit,
}

/// A set of keys bound to one action.
#[derive(Debug, Clone)]
pub struct Binding {
    /// Key codes that trigger the binding.
    pub keys: Vec<KeyCode>,
    /// Modifiers that must be held, if any.
    pub modifiers: KeyModifiers,
    /// Short key label, e.g. `space`.
    pub help: String,
    /// What the binding does.
    pub description: String,
}

impl Binding {
    /// Creates a binding with no modifiers and no help text.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            modifiers: KeyModifiers::NONE,
            help: String::new(),
            description: String::new(),
        }
    }

    /// Requires `modifiers` to be held.
    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Sets the key label and description.
    pub fn with_help(mut self, help: impl Into<String>, description: impl Into<String>) -> Self {
        self.help = help.into();
        self.description = description.into();
        self
    }

    /// Reports whether `key_msg` triggers this binding.
    ///
    /// Bindings without modifiers ignore Shift so that terminals which report
    /// it on arrow keys still match.
    pub fn matches(&self, key_msg: &KeyMsg) -> bool {
        if !self.keys.contains(&key_msg.key) {
            return false;
        }
        if self.modifiers.is_empty() {
            !key_msg
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        } else {
            key_msg.modifiers.contains(self.modifiers)
        }
    }
}

/// Bindings for every [`Action`].
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Up arrow.
    pub increment: Binding,
    /// Down arrow.
    pub decrement: Binding,
    /// Space.
    pub toggle: Binding,
    /// Delete.
    pub reset: Binding,
    /// Escape.
    pub escape: Binding,
    /// Ctrl+C.
    pub quit: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            increment: Binding::new(vec![KeyCode::Up]).with_help("↑", "add time"),
            decrement: Binding::new(vec![KeyCode::Down]).with_help("↓", "remove time"),
            toggle: Binding::new(vec![KeyCode::Char(' ')]).with_help("space", "start/pause"),
            reset: Binding::new(vec![KeyCode::Delete]).with_help("del", "reset"),
            escape: Binding::new(vec![KeyCode::Esc]).with_help("esc", "windowed/quit"),
            quit: Binding::new(vec![KeyCode::Char('c')])
                .with_modifiers(KeyModifiers::CONTROL)
                .with_help("ctrl+c", "quit"),
        }
    }
}

impl KeyMap {
    /// Bindings in resolution order. Modified bindings come first so that
    /// Ctrl+C is never read as a plain key.
    pub fn bindings(&self) -> [(Action, &Binding); 6] {
        [
            (Action::Quit, &self.quit),
            (Action::Increment, &self.increment),
            (Action::Decrement, &self.decrement),
            (Action::Toggle, &self.toggle),
            (Action::Reset, &self.reset),
            (Action::Escape, &self.escape),
        ]
    }

    /// One-line hint listing the everyday bindings, e.g. `↑ add time • ...`.
    pub fn short_help(&self) -> String {
        [
            &self.increment,
            &self.decrement,
            &self.toggle,
            &self.reset,
            &self.escape,
        ]
        .iter()
        .map(|binding| format!("{} {}", binding.help, binding.description))
        .collect::<Vec<_>>()
        .join(" • ")
    }

    /// Resolves a key press to the action it triggers.
    pub fn action_for(&self, key_msg: &KeyMsg) -> Option<Action> {
        self.bindings()
            .into_iter()
            .find(|(_, binding)| binding.matches(key_msg))
            .map(|(action, _)| action)
    }
}
