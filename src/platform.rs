//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifier for the submit shortcut.
/// Ctrl on every platform: terminals rarely forward Cmd combinations.
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Clear-field shortcut display
pub const CLEAR_SHORTCUT: &str = "Ctrl+U";

/// Quit shortcut display for the status bar
#[cfg(target_os = "macos")]
pub const QUIT_SHORTCUT: &str = "⌃C";

#[cfg(not(target_os = "macos"))]
pub const QUIT_SHORTCUT: &str = "^C";
