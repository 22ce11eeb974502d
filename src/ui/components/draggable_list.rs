//! Draggable List Component
//!
//! Renders sort dialog rows: one line per sort key with a drag handle, and
//! section headers in dim bold text. Each visible row is registered in the
//! hit area registry so the mouse adapter can find it.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::i18n::Translator;
use crate::sort::{is_last_in_section, label, DisplayItem};
use crate::ui::interaction::HitAreaRegistry;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIALOG_BG, COLOR_DIM, COLOR_DRAGGING};

const DRAG_HANDLE: &str = "≡ ";
const BRANCH: &str = "├ ";
const BRANCH_LAST: &str = "└ ";

/// What to draw.
#[derive(Debug, Clone, Copy)]
pub struct DraggableListConfig<'a> {
    pub items: &'a [DisplayItem],
    /// Keyboard cursor row
    pub cursor: Option<usize>,
    /// Row currently being dragged
    pub dragging: Option<usize>,
}

/// First visible row so that `cursor` stays on screen.
pub fn scroll_offset(cursor: Option<usize>, item_count: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 || item_count <= visible_rows {
        return 0;
    }
    let cursor = cursor.unwrap_or(0).min(item_count - 1);
    cursor
        .saturating_sub(visible_rows - 1)
        .min(item_count - visible_rows)
}

/// Cut `text` to `max_width` display columns, adding an ellipsis when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

fn row_line(
    config: &DraggableListConfig,
    index: usize,
    width: usize,
    translator: &dyn Translator,
) -> Line<'static> {
    match &config.items[index] {
        DisplayItem::Header(title) => Line::from(Span::styled(
            truncate_to_width(&title.to_uppercase(), width),
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD),
        )),
        DisplayItem::Sort(key) => {
            let is_dragging = config.dragging == Some(index);
            let is_cursor = config.cursor == Some(index);
            let branch = if is_last_in_section(config.items, index) {
                BRANCH_LAST
            } else {
                BRANCH
            };

            let style = if is_dragging {
                Style::default()
                    .fg(COLOR_DRAGGING)
                    .add_modifier(Modifier::BOLD)
            } else if is_cursor {
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::REVERSED)
            } else {
                Style::default().fg(COLOR_ACCENT)
            };

            let prefix_width = BRANCH.width() + DRAG_HANDLE.width();
            let text = truncate_to_width(&label(*key, translator), width.saturating_sub(prefix_width));

            Line::from(vec![
                Span::styled(branch, Style::default().fg(COLOR_DIM)),
                Span::styled(DRAG_HANDLE, Style::default().fg(COLOR_DIM)),
                Span::styled(text, style),
            ])
        }
    }
}

/// Render the list into `area`, registering a hit area per visible row.
pub fn render_draggable_list(
    frame: &mut Frame,
    area: Rect,
    config: &DraggableListConfig,
    translator: &dyn Translator,
    hits: &mut HitAreaRegistry,
) {
    let visible_rows = area.height as usize;
    let focus = config.dragging.or(config.cursor);
    let offset = scroll_offset(focus, config.items.len(), visible_rows);

    let mut lines = Vec::with_capacity(visible_rows);
    for (row, index) in (offset..config.items.len()).take(visible_rows).enumerate() {
        lines.push(row_line(config, index, area.width as usize, translator));
        hits.register_row(
            Rect {
                x: area.x,
                y: area.y + row as u16,
                width: area.width,
                height: 1,
            },
            index,
        );
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(COLOR_DIALOG_BG));
    frame.render_widget(paragraph, area);
}
