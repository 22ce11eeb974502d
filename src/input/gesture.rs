//! Gesture adapters.
//!
//! Each adapter turns raw terminal events into [`DragGesture`]s for the drag
//! controller. They are interchangeable: the controller and the commit rule
//! are the same whichever adapter produced the gesture.
//!
//! | Adapter | Start | Move | End | Cancel |
//! |---------|-------|------|-----|--------|
//! | Keyboard grab | Space/Enter on cursor row | Up/Down, k/j | Space/Enter | Esc |
//! | Mouse drag | Left press on a row | Left drag | Left release | - |

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

use crate::sort::DragGesture;
use crate::ui::interaction::HitAreaRegistry;

/// What an adapter may know about the list when translating.
#[derive(Debug, Clone, Copy)]
pub struct GestureContext<'a> {
    /// Keyboard cursor row
    pub cursor: usize,
    /// Number of rows in the list
    pub len: usize,
    /// Row being dragged, if any
    pub dragging: Option<usize>,
    /// Row rectangles from the last render
    pub hits: &'a HitAreaRegistry,
}

/// Source of drag gestures.
pub trait GestureAdapter: std::fmt::Debug {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Translate an event. `None` means the event is not a drag gesture.
    fn translate(&mut self, event: &Event, ctx: &GestureContext) -> Option<DragGesture>;
}

/// Keyboard grab-and-move: pick a row up, walk it with arrows, put it down.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardGrabAdapter;

impl GestureAdapter for KeyboardGrabAdapter {
    fn name(&self) -> &'static str {
        "keyboard"
    }

    fn translate(&mut self, event: &Event, ctx: &GestureContext) -> Option<DragGesture> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.kind != KeyEventKind::Press {
            return None;
        }
        // Chorded keys belong to the command registry
        if !key.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
            return None;
        }

        match (key.code, ctx.dragging) {
            (KeyCode::Char(' ') | KeyCode::Enter, None) if ctx.cursor < ctx.len => {
                Some(DragGesture::Start(ctx.cursor))
            }
            (KeyCode::Char(' ') | KeyCode::Enter, Some(_)) => Some(DragGesture::End),
            (KeyCode::Up | KeyCode::Char('k'), Some(at)) => {
                Some(DragGesture::Move(at.saturating_sub(1)))
            }
            (KeyCode::Down | KeyCode::Char('j'), Some(at)) => {
                Some(DragGesture::Move((at + 1).min(ctx.len.saturating_sub(1))))
            }
            (KeyCode::Home, Some(_)) => Some(DragGesture::Move(0)),
            (KeyCode::End, Some(_)) => Some(DragGesture::Move(ctx.len.saturating_sub(1))),
            (KeyCode::Esc, Some(_)) => Some(DragGesture::Cancel),
            _ => None,
        }
    }
}

/// Mouse press, drag and release over the rendered rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseDragAdapter;

impl GestureAdapter for MouseDragAdapter {
    fn name(&self) -> &'static str {
        "mouse"
    }

    fn translate(&mut self, event: &Event, ctx: &GestureContext) -> Option<DragGesture> {
        let Event::Mouse(mouse) = event else {
            return None;
        };

        match (mouse.kind, ctx.dragging) {
            (MouseEventKind::Down(MouseButton::Left), None) => ctx
                .hits
                .row_at(mouse.column, mouse.row)
                .map(DragGesture::Start),
            (MouseEventKind::Drag(MouseButton::Left), Some(_)) => {
                ctx.hits.nearest_row(mouse.row).map(DragGesture::Move)
            }
            (MouseEventKind::Up(MouseButton::Left), Some(_)) => Some(DragGesture::End),
            _ => None,
        }
    }
}

/// The adapters a sort dialog listens to by default.
pub fn default_adapters() -> Vec<Box<dyn GestureAdapter>> {
    vec![Box::new(KeyboardGrabAdapter), Box::new(MouseDragAdapter)]
}
