#![cfg(windows)]

/// Taskbar state over `SHAppBarMessage`.
pub mod appbar;

/// Console attachment for CLI output.
pub mod console;

/// Single-instance guard via a named mutex.
pub mod instance;

/// HKCU Run key access.
pub mod registry;

/// Notify icon, context menu and message loop.
pub mod tray;

use hidebar_core::{APP_NAME, AutoHideController, StartupRegistrar};

pub use appbar::ShellTaskbar;
pub use instance::SingleInstance;
pub use registry::HkcuRunKey;

/// Auto-hide controller bound to the real taskbar.
pub type AutoHide = AutoHideController<ShellTaskbar>;

/// Startup registrar bound to the HKCU Run key and this executable.
pub type Startup = StartupRegistrar<HkcuRunKey, fn() -> Option<String>>;

pub fn auto_hide() -> AutoHide {
    AutoHideController::new(ShellTaskbar)
}

pub fn startup() -> Startup {
    StartupRegistrar::new(
        HkcuRunKey,
        APP_NAME,
        hidebar_core::startup::current_executable as fn() -> Option<String>,
    )
}

/// Encodes a string as a null-terminated UTF-16 buffer.
pub(crate) fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}
