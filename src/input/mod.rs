//! Input handling.
//!
//! ```text
//! Event ─┬─▶ GestureAdapter ─▶ DragGesture ─▶ DragController   (sort dialog)
//!        └─▶ CommandRegistry ─▶ Command ─▶ App                   (everything else)
//! ```
//!
//! - [`gesture`] - keyboard and mouse adapters producing drag gestures
//! - [`command`] - the [`Command`] enum
//! - [`keybindings`] - default key → command maps
//! - [`registry`] - [`CommandRegistry`] choosing bindings by context

pub mod command;
pub mod gesture;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use gesture::{
    default_adapters, GestureAdapter, GestureContext, KeyboardGrabAdapter, MouseDragAdapter,
};
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::{CommandRegistry, InputContext};
