//! Color theme constants.

use ratatui::style::Color;

/// Dialog and table borders
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Highlights: cursor row, selected keys
pub const COLOR_ACCENT: Color = Color::White;

/// Titles
pub const COLOR_HEADER: Color = Color::White;

/// Section headers and hints
pub const COLOR_DIM: Color = Color::DarkGray;

/// The row being dragged
pub const COLOR_DRAGGING: Color = Color::LightGreen;

/// Chosen sort keys in the status line
pub const COLOR_SORT_KEY: Color = Color::Cyan;

/// Encounter cards in the card list
pub const COLOR_ENCOUNTER: Color = Color::Rgb(180, 120, 220);

/// Background for dialog boxes
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);
