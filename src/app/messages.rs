//! AppMessage enum for communication back into the event loop.

use crate::sort::SortKey;

/// Messages delivered to the app through its channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// The sort dialog committed a new order
    SortOrderChanged(Vec<SortKey>),
}
