//! Dialog Frame Component
//!
//! A modal frame with rounded borders. Clears whatever is underneath, sizes
//! itself to the content up to a height cap, and anchors either to the centre
//! or to the bottom of the screen.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIALOG_BG, COLOR_DIM, COLOR_HEADER};

/// Vertical anchoring of the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogAlignment {
    #[default]
    Center,
    /// Sheet-style, flush with the bottom edge
    Bottom,
}

/// Configuration for rendering a dialog frame
#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title displayed in the border
    pub title: &'a str,
    /// Content height (not including borders)
    pub content_height: u16,
    pub min_width: u16,
    pub max_width: u16,
    pub alignment: DialogAlignment,
    /// Cap on total height as a percentage of the screen
    pub max_height_percent: u16,
    /// Hint text shown in the bottom border when the dialog can be dismissed
    pub dismiss_hint: Option<&'a str>,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            min_width: 30,
            max_width: 60,
            alignment: DialogAlignment::Center,
            max_height_percent: 100,
            dismiss_hint: None,
        }
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }

    pub fn alignment(mut self, alignment: DialogAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn max_height_percent(mut self, percent: u16) -> Self {
        self.max_height_percent = percent.clamp(1, 100);
        self
    }

    /// Mark the dialog dismissible, showing `hint` in the bottom border.
    pub fn dismissible(mut self, hint: &'a str) -> Self {
        self.dismiss_hint = Some(hint);
        self
    }
}

fn calculate_dialog_width(ctx: &LayoutContext, config: &DialogFrameConfig, area_width: u16) -> u16 {
    if ctx.is_extra_small() {
        area_width.saturating_sub(4).min(config.max_width)
    } else if ctx.is_narrow() {
        ctx.bounded_width(80, config.min_width, config.max_width)
    } else {
        ctx.bounded_width(50, config.min_width, config.max_width)
    }
}

/// Outer rectangle of the dialog, borders included.
///
/// Exposed so input handling can tell clicks inside the dialog from clicks
/// outside it without rendering.
pub fn dialog_rect(area: Rect, ctx: &LayoutContext, config: &DialogFrameConfig) -> Rect {
    let width = calculate_dialog_width(ctx, config, area.width);
    let max_height = ((area.height as u32 * config.max_height_percent as u32) / 100) as u16;
    let height = calculate_total_dialog_height(config.content_height)
        .min(max_height.max(3))
        .min(area.height);

    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = match config.alignment {
        DialogAlignment::Center => area.y + area.height.saturating_sub(height) / 2,
        DialogAlignment::Bottom => area.y + area.height.saturating_sub(height),
    };

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Inner content area of a dialog rectangle.
pub fn inner_rect(dialog_area: Rect) -> Rect {
    Rect {
        x: dialog_area.x + 1,
        y: dialog_area.y + 1,
        width: dialog_area.width.saturating_sub(2),
        height: dialog_area.height.saturating_sub(2),
    }
}

/// Render a dialog frame and return the inner content area.
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    config: &DialogFrameConfig,
) -> Rect {
    let dialog_area = dialog_rect(area, ctx, config);

    frame.render_widget(Clear, dialog_area);

    let title = format!(" {} ", config.title);
    let mut block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_DIALOG_BG));

    if let Some(hint) = config.dismiss_hint {
        block = block.title_bottom(
            Line::from(Span::styled(format!(" {} ", hint), Style::default().fg(COLOR_DIM)))
                .right_aligned(),
        );
    }

    frame.render_widget(block, dialog_area);

    inner_rect(dialog_area)
}

/// Total dialog height for the given content height.
pub fn calculate_total_dialog_height(content_height: u16) -> u16 {
    content_height + 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_frame_config_new() {
        let config = DialogFrameConfig::new("Test", 10);
        assert_eq!(config.title, "Test");
        assert_eq!(config.content_height, 10);
        assert_eq!(config.alignment, DialogAlignment::Center);
        assert_eq!(config.max_height_percent, 100);
        assert!(config.dismiss_hint.is_none());
    }

    #[test]
    fn test_dialog_frame_config_builder() {
        let config = DialogFrameConfig::new("Test", 10)
            .min_width(40)
            .max_width(70)
            .alignment(DialogAlignment::Bottom)
            .max_height_percent(80)
            .dismissible("Esc");

        assert_eq!(config.min_width, 40);
        assert_eq!(config.max_width, 70);
        assert_eq!(config.alignment, DialogAlignment::Bottom);
        assert_eq!(config.max_height_percent, 80);
        assert_eq!(config.dismiss_hint, Some("Esc"));
    }

    #[test]
    fn test_calculate_dialog_width_extra_small() {
        let ctx = LayoutContext::new(40, 20);
        let config = DialogFrameConfig::new("Test", 10);
        assert_eq!(calculate_dialog_width(&ctx, &config, 40), 36);
    }

    #[test]
    fn test_calculate_dialog_width_normal() {
        let ctx = LayoutContext::new(120, 40);
        let config = DialogFrameConfig::new("Test", 10);
        assert_eq!(calculate_dialog_width(&ctx, &config, 120), 60);
    }

    #[test]
    fn test_dialog_rect_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let ctx = LayoutContext::new(100, 40);
        let rect = dialog_rect(area, &ctx, &DialogFrameConfig::new("Test", 10));
        assert_eq!(rect.height, 12);
        assert_eq!(rect.y, 14);
        assert_eq!(rect.x, (100 - rect.width) / 2);
    }

    #[test]
    fn test_dialog_rect_bottom_aligned() {
        let area = Rect::new(0, 0, 100, 40);
        let ctx = LayoutContext::new(100, 40);
        let config = DialogFrameConfig::new("Test", 10).alignment(DialogAlignment::Bottom);
        let rect = dialog_rect(area, &ctx, &config);
        assert_eq!(rect.y + rect.height, 40);
    }

    #[test]
    fn test_dialog_rect_height_capped() {
        let area = Rect::new(0, 0, 100, 20);
        let ctx = LayoutContext::new(100, 20);
        let config = DialogFrameConfig::new("Test", 30).max_height_percent(80);
        let rect = dialog_rect(area, &ctx, &config);
        assert_eq!(rect.height, 16);
    }

    #[test]
    fn test_inner_rect() {
        let inner = inner_rect(Rect::new(5, 5, 20, 10));
        assert_eq!(inner, Rect::new(6, 6, 18, 8));
    }

    #[test]
    fn test_calculate_total_dialog_height() {
        assert_eq!(calculate_total_dialog_height(10), 12);
    }
}
