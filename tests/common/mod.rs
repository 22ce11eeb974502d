//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! mod common;
//! use common::{recording_dialog, render_dialog};
//!
//! let (mut dialog, commits) = recording_dialog(&[SortKey::Cost], false);
//! dialog.show();
//! let screen = render_dialog(&mut dialog, 80, 24);
//! ```

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

use cardsort::app::App;
use cardsort::i18n::IdentityTranslator;
use cardsort::models::sample_cards;
use cardsort::sort::{base_catalog, SortKey};
use cardsort::ui::sort_dialog::SortDialog;
use cardsort::ui::LayoutContext;

/// Every order passed to the commit callback, in call order.
pub type CommitLog = Rc<RefCell<Vec<Vec<SortKey>>>>;

/// A hidden dialog whose commits are recorded.
pub fn recording_dialog(order: &[SortKey], has_encounter_cards: bool) -> (SortDialog, CommitLog) {
    let log: CommitLog = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let dialog = SortDialog::present(
        order,
        has_encounter_cards,
        Arc::new(IdentityTranslator),
        move |keys| sink.borrow_mut().push(keys),
    );
    (dialog, log)
}

/// App over the sample collection.
pub fn test_app(order: Vec<SortKey>) -> App {
    App::new(sample_cards(), order, Arc::new(IdentityTranslator))
}

/// Every subset of the base catalog, in catalog order.
pub fn catalog_subsets() -> Vec<Vec<SortKey>> {
    let keys = base_catalog();
    (0u32..(1 << keys.len()))
        .map(|mask| {
            keys.iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, k)| *k)
                .collect()
        })
        .collect()
}

/// Every subset of the base catalog, plus its reversal and each rotation,
/// so that most selected orders disagree with catalog order.
pub fn selected_orders() -> Vec<Vec<SortKey>> {
    let mut orders = Vec::new();
    for subset in catalog_subsets() {
        let mut reversed = subset.clone();
        reversed.reverse();
        if subset.len() > 1 {
            orders.push(reversed);
        }
        for shift in 1..subset.len() {
            let mut rotated = subset.clone();
            rotated.rotate_left(shift);
            orders.push(rotated);
        }
        orders.push(subset);
    }
    orders
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

pub fn press_at(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

pub fn drag_to(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Drag(MouseButton::Left), column, row)
}

pub fn release_at(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Up(MouseButton::Left), column, row)
}

/// Render the dialog alone onto a blank screen.
pub fn render_dialog(dialog: &mut SortDialog, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            dialog.render(f, area, &LayoutContext::new(area.width, area.height));
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

/// Render the whole app.
pub fn render_app(app: &mut App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| cardsort::ui::render(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

/// One string per buffer row.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Column and row where `needle` first appears.
pub fn find_text(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
    buffer_lines(buffer).iter().enumerate().find_map(|(y, line)| {
        line.find(needle).map(|byte_idx| {
            let column = line[..byte_idx].chars().count() as u16;
            (column, y as u16)
        })
    })
}
