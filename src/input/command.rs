//! Commands triggered by keyboard input.
//!
//! Drag gestures inside the sort dialog are not commands; they go through the
//! gesture adapters in [`super::gesture`] before key bindings are consulted.

/// A user action, decoupled from the key that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global
    // =========================================================================
    /// Quit the application (Ctrl+C anywhere, q on the card list)
    Quit,

    // =========================================================================
    // Card list
    // =========================================================================
    /// Show the sort dialog (s)
    OpenSortDialog,
    /// Flip whether encounter-set sorting is offered (e)
    ToggleEncounter,
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    ScrollToTop,
    ScrollToBottom,

    // =========================================================================
    // Sort dialog
    // =========================================================================
    /// Move the dialog cursor up a row
    CursorUp,
    /// Move the dialog cursor down a row
    CursorDown,
    /// Close the dialog without committing
    DismissDialog,
}
