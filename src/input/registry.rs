//! Maps key events to commands for the current context.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::command::Command;
use super::keybindings::{KeyCombo, KeybindingConfig};

/// Which bindings apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputContext {
    #[default]
    CardList,
    SortDialog,
}

/// Dispatch priority: global bindings, then the active context's bindings.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    /// Returns the command bound to `key` in `context`, if any.
    pub fn dispatch(&self, key: KeyEvent, context: InputContext) -> Option<Command> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        // Some terminals report Shift+letter with only the uppercase char
        let modifiers = match key.code {
            KeyCode::Char(c) if c.is_ascii_uppercase() => key.modifiers | KeyModifiers::SHIFT,
            _ => key.modifiers,
        };
        let combo = KeyCombo::new(key.code, modifiers);

        if let Some(cmd) = self.config.global.get(&combo) {
            return Some(*cmd);
        }

        let bindings = match context {
            InputContext::CardList => &self.config.card_list,
            InputContext::SortDialog => &self.config.sort_dialog,
        };
        bindings.get(&combo).copied()
    }
}
