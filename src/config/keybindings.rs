//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Lookups ignore the key event's kind and state fields; only code and
/// modifiers take part in matching.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<(KeyCode, KeyModifiers), KeyAction>,
}

impl KeyBindings {
    /// Bindings with no entries.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&(key.code, key.modifiers)).copied()
    }

    /// Bind (or rebind) a key.
    pub fn insert(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert((code, modifiers), action);
    }

    /// Number of bound keys.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True when no key is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let none = KeyModifiers::NONE;
        let ctrl = KeyModifiers::CONTROL;
        let shift = KeyModifiers::SHIFT;

        let mut b = Self::empty();

        // Focus
        b.insert(KeyCode::Char('/'), none, KeyAction::FocusSearch);
        b.insert(KeyCode::Char('f'), ctrl, KeyAction::FocusSearch);
        b.insert(KeyCode::Tab, none, KeyAction::CycleFocus);
        b.insert(KeyCode::BackTab, shift, KeyAction::CycleFocusBack);
        b.insert(KeyCode::BackTab, none, KeyAction::CycleFocusBack);
        b.insert(KeyCode::Esc, none, KeyAction::Escape);

        // Search state
        b.insert(KeyCode::Char('l'), ctrl, KeyAction::ClearAll);
        b.insert(KeyCode::Char('o'), ctrl, KeyAction::ToggleFilters);
        b.insert(KeyCode::Char('s'), none, KeyAction::CycleSort);

        // Vim-style movement
        b.insert(KeyCode::Char('k'), none, KeyAction::MoveUp);
        b.insert(KeyCode::Char('j'), none, KeyAction::MoveDown);
        b.insert(KeyCode::Char('h'), none, KeyAction::MoveLeft);
        b.insert(KeyCode::Char('l'), none, KeyAction::MoveRight);

        // Arrow keys
        b.insert(KeyCode::Up, none, KeyAction::MoveUp);
        b.insert(KeyCode::Down, none, KeyAction::MoveDown);
        b.insert(KeyCode::Left, none, KeyAction::MoveLeft);
        b.insert(KeyCode::Right, none, KeyAction::MoveRight);

        b.insert(KeyCode::Enter, none, KeyAction::Select);
        b.insert(KeyCode::Char(' '), none, KeyAction::Select);

        // Paging
        b.insert(KeyCode::PageUp, none, KeyAction::PageUp);
        b.insert(KeyCode::PageDown, none, KeyAction::PageDown);
        b.insert(KeyCode::Char('u'), ctrl, KeyAction::PageUp);
        b.insert(KeyCode::Char('d'), ctrl, KeyAction::PageDown);
        b.insert(KeyCode::Char('g'), none, KeyAction::ScrollToTop);
        b.insert(KeyCode::Home, none, KeyAction::ScrollToTop);
        b.insert(KeyCode::Char('G'), shift, KeyAction::ScrollToBottom);
        b.insert(KeyCode::Char('G'), none, KeyAction::ScrollToBottom);
        b.insert(KeyCode::End, none, KeyAction::ScrollToBottom);

        // Application
        b.insert(KeyCode::Char('q'), none, KeyAction::Quit);

        b
    }
}
