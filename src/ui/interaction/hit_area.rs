//! Row hit areas for mouse interaction.
//!
//! The list host registers one rectangle per visible row while rendering.
//! The mouse gesture adapter asks the registry which row sits under the
//! pointer. Registrations are cleared at the start of each render.

use ratatui::layout::Rect;

/// A rendered row and the list index it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHitArea {
    pub rect: Rect,
    pub index: usize,
}

impl RowHitArea {
    /// Check if a point is within this row.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

#[derive(Debug, Clone, Default)]
pub struct HitAreaRegistry {
    rows: Vec<RowHitArea>,
    /// Outer rectangle of the hosting dialog, for outside-click detection
    container: Option<Rect>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every registration. Call at the start of each render.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.container = None;
    }

    pub fn register_row(&mut self, rect: Rect, index: usize) {
        self.rows.push(RowHitArea { rect, index });
    }

    pub fn set_container(&mut self, rect: Rect) {
        self.container = Some(rect);
    }

    /// List index of the row under the point.
    pub fn row_at(&self, x: u16, y: u16) -> Option<usize> {
        self.rows
            .iter()
            .rev()
            .find(|row| row.contains(x, y))
            .map(|row| row.index)
    }

    /// Nearest row by vertical position, ignoring x.
    ///
    /// Used while dragging so the pointer may stray sideways or past the
    /// list ends without losing the drop target.
    pub fn nearest_row(&self, y: u16) -> Option<usize> {
        let first = self.rows.first()?;
        let last = self.rows.last()?;
        if y < first.rect.y {
            return Some(first.index);
        }
        if y >= last.rect.y + last.rect.height {
            return Some(last.index);
        }
        self.rows
            .iter()
            .find(|row| y >= row.rect.y && y < row.rect.y + row.rect.height)
            .map(|row| row.index)
    }

    /// True when a container is registered and the point lies outside it.
    pub fn is_outside_container(&self, x: u16, y: u16) -> bool {
        match self.container {
            Some(rect) => {
                x < rect.x || x >= rect.x + rect.width || y < rect.y || y >= rect.y + rect.height
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
