//! UI rendering.
//!
//! The screen is the card list with the sort dialog drawn over it when
//! visible. All render functions receive a [`LayoutContext`] built from the
//! frame size.

pub mod card_list;
pub mod components;
pub mod interaction;
pub mod layout;
pub mod sort_dialog;
pub mod theme;

pub use layout::{breakpoints, LayoutContext};

use ratatui::Frame;

use crate::app::App;
use card_list::{render_card_list, CardListView};

/// Render the whole screen
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);

    let view = CardListView {
        cards: &app.cards,
        sort_order: &app.sort_order,
        scroll: app.scroll,
        has_encounter_cards: app.has_encounter_cards(),
    };
    render_card_list(frame, area, &ctx, &view, app.translator.as_ref());

    // Overlay last so it draws on top
    app.sort_dialog.render(frame, area, &ctx);
}
