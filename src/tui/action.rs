//! Actions returned by screen event handlers.

use super::app::Section;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to update global state and navigate between
/// sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given section.
    Navigate(Section),
    /// Flip between the light and dark palettes.
    ToggleTheme,
    /// Quit the application.
    Quit,
}
