//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for form shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Save shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SAVE_SHORTCUT: &str = "Ctrl+S";

/// Add address shortcut display
/// - macOS: "Cmd+A"
/// - Linux/Windows: "Ctrl+A"
#[cfg(target_os = "macos")]
pub const ADD_ADDRESS_SHORTCUT: &str = "Cmd+A";

#[cfg(not(target_os = "macos"))]
pub const ADD_ADDRESS_SHORTCUT: &str = "Ctrl+A";

/// Test data shortcut display
/// - macOS: "Cmd+T"
/// - Linux/Windows: "Ctrl+T"
#[cfg(target_os = "macos")]
pub const TEST_DATA_SHORTCUT: &str = "Cmd+T";

#[cfg(not(target_os = "macos"))]
pub const TEST_DATA_SHORTCUT: &str = "Ctrl+T";
