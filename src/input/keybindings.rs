//! Default keybindings.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;

/// A key code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Key → command maps per input context.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Always active
    pub global: HashMap<KeyCombo, Command>,
    /// Active on the card list when no dialog is open
    pub card_list: HashMap<KeyCombo, Command>,
    /// Active while the sort dialog is open
    pub sort_dialog: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            card_list: HashMap::new(),
            sort_dialog: HashMap::new(),
        };
        config.setup_global_bindings();
        config.setup_card_list_bindings();
        config.setup_sort_dialog_bindings();
        config
    }

    fn setup_global_bindings(&mut self) {
        self.global.insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
    }

    fn setup_card_list_bindings(&mut self) {
        let bindings = [
            (KeyCombo::plain(KeyCode::Char('q')), Command::Quit),
            (KeyCombo::plain(KeyCode::Char('s')), Command::OpenSortDialog),
            (KeyCombo::plain(KeyCode::Char('e')), Command::ToggleEncounter),
            (KeyCombo::plain(KeyCode::Up), Command::ScrollUp),
            (KeyCombo::plain(KeyCode::Char('k')), Command::ScrollUp),
            (KeyCombo::plain(KeyCode::Down), Command::ScrollDown),
            (KeyCombo::plain(KeyCode::Char('j')), Command::ScrollDown),
            (KeyCombo::plain(KeyCode::PageUp), Command::ScrollPageUp),
            (KeyCombo::plain(KeyCode::PageDown), Command::ScrollPageDown),
            (KeyCombo::plain(KeyCode::Home), Command::ScrollToTop),
            (KeyCombo::plain(KeyCode::Char('g')), Command::ScrollToTop),
            (KeyCombo::plain(KeyCode::End), Command::ScrollToBottom),
            (KeyCombo::shift(KeyCode::Char('G')), Command::ScrollToBottom),
        ];
        self.card_list.extend(bindings);
    }

    fn setup_sort_dialog_bindings(&mut self) {
        let bindings = [
            (KeyCombo::plain(KeyCode::Up), Command::CursorUp),
            (KeyCombo::plain(KeyCode::Char('k')), Command::CursorUp),
            (KeyCombo::plain(KeyCode::Down), Command::CursorDown),
            (KeyCombo::plain(KeyCode::Char('j')), Command::CursorDown),
            (KeyCombo::plain(KeyCode::Esc), Command::DismissDialog),
            (KeyCombo::plain(KeyCode::Char('q')), Command::DismissDialog),
            (KeyCombo::plain(KeyCode::Char('s')), Command::DismissDialog),
        ];
        self.sort_dialog.extend(bindings);
    }
}
