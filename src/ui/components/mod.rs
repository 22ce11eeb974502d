//! Reusable UI Components
//!
//! ## Components
//!
//! - `DialogFrame` - Dialog overlay with rounded borders, centered or bottom-anchored
//! - `DraggableList` - Reorderable rows with section headers and drag handles

mod dialog_frame;
mod draggable_list;

pub use dialog_frame::{
    calculate_total_dialog_height, dialog_rect, inner_rect, render_dialog_frame, DialogAlignment,
    DialogFrameConfig,
};
pub use draggable_list::{
    render_draggable_list, scroll_offset, truncate_to_width, DraggableListConfig,
};
