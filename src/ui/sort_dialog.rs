//! Sort dialog.
//!
//! A bottom sheet listing the chosen sort keys above an "Other" header and the
//! remaining keys below it. Rows are reordered by dragging, with either the
//! keyboard or the mouse. Every completed drag commits the keys above the
//! header as the new order and reports it through the `on_commit` callback.
//! Dismissing the dialog never commits.

use std::sync::Arc;

use crossterm::event::{Event, MouseButton, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::Translator;
use crate::input::gesture::{default_adapters, GestureAdapter, GestureContext};
use crate::sort::{
    build_display_list, commit_order, DisplayItem, DragController, DragGesture, DragOutcome,
    SortKey,
};
use crate::ui::components::{
    dialog_rect, render_dialog_frame, render_draggable_list, DialogAlignment, DialogFrameConfig,
    DraggableListConfig,
};
use crate::ui::interaction::HitAreaRegistry;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_DIALOG_BG, COLOR_DIM};

const TITLE: &str = "Sort by";
const SELECTED_HEADER: &str = "Selected";
const DISMISS_HINT: &str = "Esc to close";
const MAX_HEIGHT_PERCENT: u16 = 80;

/// Receives each committed order.
pub type CommitCallback = Box<dyn FnMut(Vec<SortKey>)>;

/// Shared label lookup.
pub type SharedTranslator = Arc<dyn Translator + Send + Sync>;

/// What the dialog did with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResponse {
    /// Not for the dialog; the caller may handle it
    Ignored,
    /// Handled with no commit
    Consumed,
    /// A drag finished and this order was committed
    Committed(Vec<SortKey>),
    /// The dialog closed without committing
    Dismissed,
}

pub struct SortDialog {
    visible: bool,
    has_encounter_cards: bool,
    /// Derived from the last order pushed in or committed
    items: Vec<DisplayItem>,
    controller: DragController,
    cursor: usize,
    adapters: Vec<Box<dyn GestureAdapter>>,
    /// Row rectangles from the last render
    hits: HitAreaRegistry,
    translator: SharedTranslator,
    on_commit: CommitCallback,
}

impl std::fmt::Debug for SortDialog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortDialog")
            .field("visible", &self.visible)
            .field("has_encounter_cards", &self.has_encounter_cards)
            .field("items", &self.items)
            .field("controller", &self.controller)
            .field("cursor", &self.cursor)
            .field("adapters", &self.adapters)
            .finish_non_exhaustive()
    }
}

impl SortDialog {
    /// Build a hidden dialog for `current_order`.
    ///
    /// `on_commit` runs once per completed drag with the new order.
    pub fn present(
        current_order: &[SortKey],
        has_encounter_cards: bool,
        translator: SharedTranslator,
        on_commit: impl FnMut(Vec<SortKey>) + 'static,
    ) -> Self {
        let items = build_display_list(current_order, has_encounter_cards, translator.as_ref());
        Self {
            visible: false,
            has_encounter_cards,
            items,
            controller: DragController::new(),
            cursor: 0,
            adapters: default_adapters(),
            hits: HitAreaRegistry::new(),
            translator,
            on_commit: Box::new(on_commit),
        }
    }

    /// Replace the gesture adapters.
    pub fn with_adapters(mut self, adapters: Vec<Box<dyn GestureAdapter>>) -> Self {
        self.adapters = adapters;
        self
    }

    pub fn show(&mut self) {
        if !self.visible {
            tracing::debug!("Sort dialog shown");
        }
        self.visible = true;
        self.cursor = self.cursor.min(self.items.len().saturating_sub(1));
    }

    /// Close without committing. An active drag is discarded.
    pub fn dismiss(&mut self) {
        if self.controller.cancel() {
            tracing::debug!("Sort dialog dismissed during a drag; candidate discarded");
        }
        self.visible = false;
        self.hits.clear();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    /// The list as currently displayed, including any drag in progress.
    pub fn items(&self) -> &[DisplayItem] {
        self.controller.view(&self.items)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Order implied by the last committed list.
    pub fn current_order(&self) -> Vec<SortKey> {
        commit_order(&self.items)
    }

    pub fn has_encounter_cards(&self) -> bool {
        self.has_encounter_cards
    }

    /// Rebuild from a new order and encounter flag.
    ///
    /// The list is recomputed from scratch. A drag in progress is cancelled
    /// because its candidate was derived from the old list.
    pub fn sync(&mut self, order: &[SortKey], has_encounter_cards: bool) {
        let items = build_display_list(order, has_encounter_cards, self.translator.as_ref());
        if items == self.items && has_encounter_cards == self.has_encounter_cards {
            return;
        }
        if self.controller.cancel() {
            tracing::debug!("Drag cancelled by external sort change");
        }
        self.items = items;
        self.has_encounter_cards = has_encounter_cards;
        self.cursor = self.cursor.min(self.items.len().saturating_sub(1));
    }

    /// Move the cursor by `delta` rows, clamped. Ignored while dragging.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.is_dragging() || self.items.is_empty() {
            return;
        }
        let max = self.items.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(max);
    }

    /// Route a terminal event through the gesture adapters.
    pub fn handle_event(&mut self, event: &Event) -> DialogResponse {
        if !self.visible {
            return DialogResponse::Ignored;
        }

        let gesture = {
            let ctx = GestureContext {
                cursor: self.cursor,
                len: self.items.len(),
                dragging: self.controller.dragged_index(),
                hits: &self.hits,
            };
            self.adapters
                .iter_mut()
                .find_map(|adapter| adapter.translate(event, &ctx))
        };

        if let Some(gesture) = gesture {
            return self.apply_gesture(gesture);
        }

        if let Event::Mouse(mouse) = event {
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                if !self.is_dragging() && self.hits.is_outside_container(mouse.column, mouse.row) {
                    self.dismiss();
                    return DialogResponse::Dismissed;
                }
                return DialogResponse::Consumed;
            }
        }

        DialogResponse::Ignored
    }

    /// Feed a gesture to the controller, committing on drop.
    pub fn apply_gesture(&mut self, gesture: DragGesture) -> DialogResponse {
        match self.controller.apply(&self.items, gesture) {
            DragOutcome::Started | DragOutcome::Moved => {
                if let Some(at) = self.controller.dragged_index() {
                    self.cursor = at;
                    tracing::debug!(
                        "Dragging row {} (header at {:?})",
                        at,
                        self.controller.boundary()
                    );
                }
                DialogResponse::Consumed
            }
            DragOutcome::Dropped(list) => self.commit(list),
            DragOutcome::Cancelled => {
                self.cursor = self.cursor.min(self.items.len().saturating_sub(1));
                DialogResponse::Consumed
            }
            DragOutcome::Ignored => DialogResponse::Consumed,
        }
    }

    fn commit(&mut self, list: Vec<DisplayItem>) -> DialogResponse {
        let dropped_key = list.get(self.cursor).and_then(DisplayItem::sort_key);
        let order = commit_order(&list);

        self.items = build_display_list(&order, self.has_encounter_cards, self.translator.as_ref());
        self.cursor = dropped_key
            .and_then(|key| self.items.iter().position(|item| item.sort_key() == Some(key)))
            .unwrap_or(self.cursor)
            .min(self.items.len().saturating_sub(1));

        tracing::info!(
            "Sort order committed: [{}]",
            order.iter().map(|k| k.id()).collect::<Vec<_>>().join(", ")
        );
        (self.on_commit)(order.clone());
        DialogResponse::Committed(order)
    }

    /// Content rows: the "Selected" header plus one row per item.
    fn content_height(&self) -> u16 {
        (self.items.len() + 1) as u16
    }

    fn frame_config<'a>(&self, title: &'a str, hint: &'a str) -> DialogFrameConfig<'a> {
        DialogFrameConfig::new(title, self.content_height())
            .min_width(28)
            .max_width(48)
            .alignment(DialogAlignment::Bottom)
            .max_height_percent(MAX_HEIGHT_PERCENT)
            .dismissible(hint)
    }

    /// Draw the dialog over `area` and record row hit areas.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &LayoutContext) {
        self.hits.clear();
        if !self.visible {
            return;
        }

        let title = self.translator.translate(TITLE);
        let hint = self.translator.translate(DISMISS_HINT);
        let config = self.frame_config(&title, &hint);

        self.hits.set_container(dialog_rect(area, ctx, &config));
        let inner = render_dialog_frame(frame, area, ctx, &config);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let header_area = Rect { height: 1, ..inner };
        let header = Paragraph::new(Line::from(Span::styled(
            self.translator.translate(SELECTED_HEADER).to_uppercase(),
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD),
        )))
        .style(Style::default().bg(COLOR_DIALOG_BG));
        frame.render_widget(header, header_area);

        let list_area = Rect {
            y: inner.y + 1,
            height: inner.height - 1,
            ..inner
        };
        let list_config = DraggableListConfig {
            items: self.controller.view(&self.items),
            cursor: Some(self.cursor),
            dragging: self.controller.dragged_index(),
        };
        render_draggable_list(
            frame,
            list_area,
            &list_config,
            self.translator.as_ref(),
            &mut self.hits,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::IdentityTranslator;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn dialog_with_log(order: &[SortKey], encounter: bool) -> (SortDialog, Rc<RefCell<Vec<Vec<SortKey>>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let dialog = SortDialog::present(order, encounter, Arc::new(IdentityTranslator), move |keys| {
            sink.borrow_mut().push(keys)
        });
        (dialog, log)
    }

    #[test]
    fn test_present_is_hidden() {
        let (dialog, _) = dialog_with_log(&[SortKey::Cost], false);
        assert!(!dialog.is_visible());
        assert_eq!(dialog.current_order(), vec![SortKey::Cost]);
    }

    #[test]
    fn test_events_ignored_when_hidden() {
        let (mut dialog, log) = dialog_with_log(&[SortKey::Cost], false);
        let event = Event::Key(crossterm::event::KeyEvent::from(crossterm::event::KeyCode::Enter));
        assert_eq!(dialog.handle_event(&event), DialogResponse::Ignored);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_move_cursor_clamps() {
        let (mut dialog, _) = dialog_with_log(&[SortKey::Cost], false);
        dialog.show();
        dialog.move_cursor(-3);
        assert_eq!(dialog.cursor(), 0);
        dialog.move_cursor(100);
        assert_eq!(dialog.cursor(), dialog.items().len() - 1);
    }

    #[test]
    fn test_commit_fires_once_per_drop() {
        let (mut dialog, log) = dialog_with_log(&[SortKey::Cost, SortKey::Type], false);
        dialog.show();

        dialog.apply_gesture(DragGesture::Start(1));
        dialog.apply_gesture(DragGesture::Move(0));
        assert!(log.borrow().is_empty());

        let response = dialog.apply_gesture(DragGesture::End);
        assert_eq!(
            response,
            DialogResponse::Committed(vec![SortKey::Type, SortKey::Cost])
        );
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(dialog.cursor(), 0);
    }

    #[test]
    fn test_dismiss_during_drag_does_not_commit() {
        let (mut dialog, log) = dialog_with_log(&[SortKey::Cost, SortKey::Type], false);
        dialog.show();
        dialog.apply_gesture(DragGesture::Start(0));
        dialog.apply_gesture(DragGesture::Move(5));

        dialog.dismiss();

        assert!(!dialog.is_visible());
        assert!(!dialog.is_dragging());
        assert!(log.borrow().is_empty());
        assert_eq!(dialog.current_order(), vec![SortKey::Cost, SortKey::Type]);
    }

    #[test]
    fn test_sync_rebuilds_and_cancels_drag() {
        let (mut dialog, log) = dialog_with_log(&[SortKey::Cost], false);
        dialog.show();
        dialog.apply_gesture(DragGesture::Start(0));

        dialog.sync(&[SortKey::Title], true);

        assert!(!dialog.is_dragging());
        assert_eq!(dialog.current_order(), vec![SortKey::Title]);
        assert_eq!(dialog.items().last(), Some(&DisplayItem::Sort(SortKey::EncounterSet)));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_keyboard_only_adapters_ignore_mouse() {
        use crate::input::gesture::KeyboardGrabAdapter;
        use crossterm::event::{KeyModifiers, MouseEvent};

        let (dialog, _) = dialog_with_log(&[SortKey::Cost], false);
        let mut dialog = dialog.with_adapters(vec![Box::new(KeyboardGrabAdapter)]);
        dialog.show();
        dialog.hits.register_row(Rect::new(0, 5, 20, 1), 0);
        dialog.hits.set_container(Rect::new(0, 0, 20, 10));

        let press = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 2,
            row: 5,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(dialog.handle_event(&press), DialogResponse::Consumed);
        assert!(!dialog.is_dragging());
    }

    #[test]
    fn test_sync_same_order_keeps_drag() {
        let (mut dialog, _) = dialog_with_log(&[SortKey::Cost], false);
        dialog.show();
        dialog.apply_gesture(DragGesture::Start(0));
        dialog.sync(&[SortKey::Cost], false);
        assert!(dialog.is_dragging());
    }
}
