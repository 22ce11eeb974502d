//! Application state for the TUI.
//!
//! - [`App`] - cards, current sort order and the sort dialog
//! - [`AppMessage`] - messages sent back into the event loop

mod handlers;
mod messages;

pub use messages::AppMessage;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::error::Result;
use crate::i18n::MessageCatalog;
use crate::models::{self, Card};
use crate::sort::{dedupe, SortKey};
use crate::ui::sort_dialog::{SharedTranslator, SortDialog};
use crate::input::CommandRegistry;

/// Main application state
pub struct App {
    /// Collection, kept sorted by `sort_order`
    pub cards: Vec<Card>,
    /// Caller-owned selected order; replaced wholesale on commit
    pub sort_order: Vec<SortKey>,
    /// Forces encounter-set sorting on or off
    pub encounter_override: Option<bool>,
    pub sort_dialog: SortDialog,
    pub registry: CommandRegistry,
    pub translator: SharedTranslator,
    /// First visible card row
    pub scroll: usize,
    pub terminal_width: u16,
    pub terminal_height: u16,
    /// Flag to track if UI needs redrawing
    pub needs_redraw: bool,
    pub should_quit: bool,
    /// Sender handed to the sort dialog's commit callback
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    /// Create an app over `cards`, sorted by `sort_order`.
    pub fn new(cards: Vec<Card>, sort_order: Vec<SortKey>, translator: SharedTranslator) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let sort_order = dedupe(&sort_order);

        let mut cards = cards;
        models::sort_cards(&mut cards, &sort_order);
        let has_encounter_cards = models::has_encounter_cards(&cards);

        let commit_tx = message_tx.clone();
        let sort_dialog = SortDialog::present(
            &sort_order,
            has_encounter_cards,
            Arc::clone(&translator),
            move |order| {
                if commit_tx.send(AppMessage::SortOrderChanged(order)).is_err() {
                    tracing::warn!("Sort order committed after the app shut down");
                }
            },
        );

        Self {
            cards,
            sort_order,
            encounter_override: None,
            sort_dialog,
            registry: CommandRegistry::new(),
            translator,
            scroll: 0,
            terminal_width: 80,
            terminal_height: 24,
            needs_redraw: true,
            should_quit: false,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    /// Build the app from configuration, loading cards and the catalog.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let cards = match &config.cards_path {
            Some(path) => models::load_cards(path)?,
            None => {
                tracing::info!("No card file given, using the built-in sample");
                models::sample_cards()
            }
        };
        let catalog = match &config.catalog_path {
            Some(path) => MessageCatalog::load(path)?,
            None => MessageCatalog::new(),
        };

        let mut app = Self::new(cards, config.sort_order.clone(), Arc::new(catalog));
        if config.encounter_override.is_some() {
            app.set_encounter_override(config.encounter_override);
        }
        Ok(app)
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Whether the encounter-set key is offered in the sort dialog.
    pub fn has_encounter_cards(&self) -> bool {
        self.encounter_override
            .unwrap_or_else(|| models::has_encounter_cards(&self.cards))
    }

    /// Override encounter-set availability and refresh the dialog.
    pub fn set_encounter_override(&mut self, value: Option<bool>) {
        self.encounter_override = value;
        let has_encounter_cards = self.has_encounter_cards();
        self.sort_dialog.sync(&self.sort_order, has_encounter_cards);
        tracing::debug!("Encounter sorting available: {}", has_encounter_cards);
        self.mark_dirty();
    }

    /// Highest useful scroll offset for the current terminal height.
    pub fn max_scroll(&self) -> usize {
        let visible = crate::ui::card_list::visible_card_rows(self.terminal_height);
        self.cards.len().saturating_sub(visible)
    }

    /// Replace the sort order and re-sort the collection.
    ///
    /// Returns false when `order` equals the current order.
    pub fn apply_sort_order(&mut self, order: Vec<SortKey>) -> bool {
        if order == self.sort_order {
            tracing::debug!("Sort order unchanged");
            return false;
        }
        self.sort_order = order;
        models::sort_cards(&mut self.cards, &self.sort_order);
        let has_encounter_cards = self.has_encounter_cards();
        self.sort_dialog.sync(&self.sort_order, has_encounter_cards);
        self.scroll = self.scroll.min(self.max_scroll());
        self.mark_dirty();
        true
    }
}
