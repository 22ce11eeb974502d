//! Mouse interaction support.
//!
//! Components register row rectangles during rendering; the mouse gesture
//! adapter queries them to find the row under the pointer.

pub mod hit_area;

pub use hit_area::{HitAreaRegistry, RowHitArea};
