//! Event, command and message handling for the App.

use crossterm::event::{Event, MouseEventKind};

use super::{App, AppMessage};
use crate::input::{Command, InputContext};
use crate::ui::card_list::visible_card_rows;
use crate::ui::sort_dialog::DialogResponse;

impl App {
    /// Handle an incoming message
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::SortOrderChanged(order) => {
                // A later commit may already have replaced this one
                if order != self.sort_dialog.current_order() {
                    tracing::debug!("Skipping superseded sort order ({} keys)", order.len());
                    return;
                }
                self.apply_sort_order(order);
            }
        }
    }

    /// Handle every message queued on the channel without blocking.
    ///
    /// Returns the number handled.
    pub fn drain_messages(&mut self) -> usize {
        let Some(mut rx) = self.message_rx.take() else {
            return 0;
        };
        let mut handled = 0;
        while let Ok(msg) = rx.try_recv() {
            self.handle_message(msg);
            handled += 1;
        }
        self.message_rx = Some(rx);
        handled
    }

    /// Handle a terminal event.
    pub fn handle_event(&mut self, event: &Event) {
        if let Event::Resize(width, height) = event {
            self.terminal_width = *width;
            self.terminal_height = *height;
            self.scroll = self.scroll.min(self.max_scroll());
            self.mark_dirty();
            return;
        }

        if self.sort_dialog.is_visible() {
            match self.sort_dialog.handle_event(event) {
                DialogResponse::Ignored => {}
                DialogResponse::Committed(order) => {
                    tracing::debug!("Applying committed sort order ({} keys)", order.len());
                    self.apply_sort_order(order);
                    self.mark_dirty();
                    return;
                }
                DialogResponse::Consumed | DialogResponse::Dismissed => {
                    self.mark_dirty();
                    return;
                }
            }
        }

        match event {
            Event::Key(key) => {
                let context = if self.sort_dialog.is_visible() {
                    InputContext::SortDialog
                } else {
                    InputContext::CardList
                };
                if let Some(cmd) = self.registry.dispatch(*key, context) {
                    self.execute_command(cmd);
                }
            }
            Event::Mouse(mouse) if !self.sort_dialog.is_visible() => match mouse.kind {
                MouseEventKind::ScrollUp => self.execute_command(Command::ScrollUp),
                MouseEventKind::ScrollDown => self.execute_command(Command::ScrollDown),
                _ => {}
            },
            _ => {}
        }
    }

    /// Execute a command.
    pub fn execute_command(&mut self, cmd: Command) {
        let page = visible_card_rows(self.terminal_height).max(1);
        match cmd {
            Command::Quit => {
                self.sort_dialog.dismiss();
                self.should_quit = true;
            }
            Command::OpenSortDialog => {
                let has_encounter_cards = self.has_encounter_cards();
                self.sort_dialog.sync(&self.sort_order, has_encounter_cards);
                self.sort_dialog.show();
            }
            Command::ToggleEncounter => {
                let enabled = !self.has_encounter_cards();
                self.set_encounter_override(Some(enabled));
            }
            Command::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            Command::ScrollDown => self.scroll = (self.scroll + 1).min(self.max_scroll()),
            Command::ScrollPageUp => self.scroll = self.scroll.saturating_sub(page),
            Command::ScrollPageDown => self.scroll = (self.scroll + page).min(self.max_scroll()),
            Command::ScrollToTop => self.scroll = 0,
            Command::ScrollToBottom => self.scroll = self.max_scroll(),
            Command::CursorUp => self.sort_dialog.move_cursor(-1),
            Command::CursorDown => self.sort_dialog.move_cursor(1),
            Command::DismissDialog => self.sort_dialog.dismiss(),
        }
        self.mark_dirty();
    }
}
