pub mod appbar;
pub mod config;
pub mod error;
pub mod icon;
pub mod locale;
pub mod log;
pub mod startup;

pub use appbar::{ABS_ALWAYSONTOP, ABS_AUTOHIDE, AutoHideController, TaskbarShell};
pub use error::HidebarResult;
pub use locale::Language;
pub use startup::{RunKey, StartupRegistrar};

/// Registry value name and tray identity.
pub const APP_NAME: &str = "Hidebar";

/// Name of the mutex that keeps a single tray instance alive.
pub const INSTANCE_MUTEX_NAME: &str = r"Local\Hidebar_SingleInstance";
