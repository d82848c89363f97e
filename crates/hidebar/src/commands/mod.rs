pub mod init;

#[cfg(windows)]
pub mod autohide;
#[cfg(windows)]
pub mod startup;
#[cfg(windows)]
pub mod status;
#[cfg(windows)]
pub mod tray;

#[cfg(not(windows))]
mod unsupported;
#[cfg(not(windows))]
pub use unsupported::{autohide, startup, status, tray};

/// Reconnects stdout/stderr to the terminal that launched us, if any.
pub fn attach_console() {
    #[cfg(windows)]
    hidebar_windows::console::attach_parent();
}

/// Formats a boolean state the way every command prints it.
#[cfg_attr(not(windows), allow(dead_code))]
pub fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}
