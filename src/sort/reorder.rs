//! Drag-reorder state machine.
//!
//! ```text
//!   Idle ──start(sort row)──▶ Dragging ──move_to──▶ Dragging
//!    ▲                           │
//!    └──────── end / cancel ─────┘
//! ```
//!
//! The controller knows nothing about keys, mice or terminals. Input adapters
//! turn raw events into [`DragGesture`]s and feed them in through
//! [`DragController::apply`].

use super::builder::header_index;
use super::item::DisplayItem;

/// Abstract drag input, independent of how it was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragGesture {
    /// Begin dragging the row at this index
    Start(usize),
    /// The dragged row is now over this index
    Move(usize),
    /// Drop the dragged row where it is
    End,
    /// Abandon the drag, keeping the original order
    Cancel,
}

/// Controller state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Index the row was picked up from
        from: usize,
        /// Index the row currently occupies in `candidate`
        at: usize,
        /// Working copy of the list with the row relocated
        candidate: Vec<DisplayItem>,
    },
}

/// What a gesture did to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// Nothing changed (gesture not valid in the current state)
    Ignored,
    /// A drag began
    Started,
    /// The candidate list changed
    Moved,
    /// The drag finished; this is the final list
    Dropped(Vec<DisplayItem>),
    /// The drag was abandoned
    Cancelled,
}

#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Index of the dragged row in the candidate list.
    pub fn dragged_index(&self) -> Option<usize> {
        match self.state {
            DragState::Dragging { at, .. } => Some(at),
            DragState::Idle => None,
        }
    }

    /// The list as it should be displayed right now.
    pub fn view<'a>(&'a self, items: &'a [DisplayItem]) -> &'a [DisplayItem] {
        match &self.state {
            DragState::Dragging { candidate, .. } => candidate,
            DragState::Idle => items,
        }
    }

    /// Where the header sits in the current candidate, re-derived after each move.
    pub fn boundary(&self) -> Option<usize> {
        match &self.state {
            DragState::Dragging { candidate, .. } => header_index(candidate),
            DragState::Idle => None,
        }
    }

    /// Pick up the row at `index`.
    ///
    /// Only valid when idle and when the row is a sort key. A second start
    /// while a drag is active is dropped.
    pub fn start(&mut self, items: &[DisplayItem], index: usize) -> bool {
        if self.is_dragging() {
            tracing::debug!("Ignoring drag start at {} while a drag is active", index);
            return false;
        }
        match items.get(index) {
            Some(DisplayItem::Sort(key)) => {
                tracing::debug!("Drag start: {} at {}", key, index);
                self.state = DragState::Dragging {
                    from: index,
                    at: index,
                    candidate: items.to_vec(),
                };
                true
            }
            _ => false,
        }
    }

    /// Move the dragged row to `target`, clamped to the list bounds.
    ///
    /// Returns true when the candidate changed.
    pub fn move_to(&mut self, target: usize) -> bool {
        let DragState::Dragging { at, candidate, .. } = &mut self.state else {
            return false;
        };
        if candidate.is_empty() {
            return false;
        }
        let target = target.min(candidate.len() - 1);
        if target == *at {
            return false;
        }
        let item = candidate.remove(*at);
        candidate.insert(target, item);
        *at = target;
        true
    }

    /// Drop the row. Returns the final list, or None when no drag was active.
    pub fn end(&mut self) -> Option<Vec<DisplayItem>> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { from, at, candidate } => {
                tracing::debug!("Drag end: {} -> {}", from, at);
                Some(candidate)
            }
            DragState::Idle => None,
        }
    }

    /// Abandon any drag in progress. Returns true if one was active.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        if was_dragging {
            tracing::debug!("Drag cancelled");
        }
        self.state = DragState::Idle;
        was_dragging
    }

    /// Feed a gesture through the state machine.
    pub fn apply(&mut self, items: &[DisplayItem], gesture: DragGesture) -> DragOutcome {
        match gesture {
            DragGesture::Start(index) => {
                if self.start(items, index) {
                    DragOutcome::Started
                } else {
                    DragOutcome::Ignored
                }
            }
            DragGesture::Move(index) => {
                if self.move_to(index) {
                    DragOutcome::Moved
                } else {
                    DragOutcome::Ignored
                }
            }
            DragGesture::End => match self.end() {
                Some(list) => DragOutcome::Dropped(list),
                None => DragOutcome::Ignored,
            },
            DragGesture::Cancel => {
                if self.cancel() {
                    DragOutcome::Cancelled
                } else {
                    DragOutcome::Ignored
                }
            }
        }
    }
}
