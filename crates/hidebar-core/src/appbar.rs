//! Taskbar auto-hide control over the shell's appbar state mask.
//!
//! The shell owns the mask; nothing here caches it. Every operation
//! asks the [`TaskbarShell`] for the current value, so a change made in
//! the Windows settings between two calls is always picked up.

use crate::log_debug;

/// Taskbar hides until the pointer reaches its edge.
pub const ABS_AUTOHIDE: u32 = 0x01;

/// Taskbar stays above other windows. Independent of auto-hide.
pub const ABS_ALWAYSONTOP: u32 = 0x02;

/// Access to the shell's taskbar state.
///
/// The Windows crate implements this over `SHAppBarMessage`; tests use
/// an in-memory mask.
pub trait TaskbarShell {
    /// Returns the current state mask, or `None` when the taskbar
    /// window cannot be located.
    fn query_state(&self) -> Option<u32>;

    /// Sends a set-state request with the given mask.
    fn apply_state(&self, mask: u32);
}

/// Computes the mask to write when switching auto-hide on or off.
///
/// Only the always-on-top bit survives from `current`; every other bit
/// is dropped, matching what the shell accepts for `ABM_SETSTATE`.
pub fn next_state(current: u32, enabled: bool) -> u32 {
    let keep = current & ABS_ALWAYSONTOP;
    if enabled { ABS_AUTOHIDE | keep } else { keep }
}

/// Reads and flips the taskbar auto-hide flag.
pub struct AutoHideController<S> {
    shell: S,
}

impl<S: TaskbarShell> AutoHideController<S> {
    pub fn new(shell: S) -> Self {
        Self { shell }
    }

    /// Returns whether auto-hide is currently on.
    ///
    /// A taskbar that cannot be found reads as `false`.
    pub fn is_enabled(&self) -> bool {
        self.shell
            .query_state()
            .is_some_and(|mask| mask & ABS_AUTOHIDE == ABS_AUTOHIDE)
    }

    /// Turns auto-hide on or off, keeping the always-on-top bit.
    ///
    /// Re-reads the mask immediately before writing it. Does nothing
    /// when the taskbar cannot be found.
    pub fn set(&self, enabled: bool) {
        let Some(current) = self.shell.query_state() else {
            log_debug!("taskbar not found; auto-hide left unchanged");
            return;
        };
        let mask = next_state(current, enabled);
        log_debug!("taskbar state {current:#04x} -> {mask:#04x}");
        self.shell.apply_state(mask);
    }

    /// Flips auto-hide and returns the state read back afterwards.
    ///
    /// With no taskbar nothing is written and the result is `false`.
    pub fn toggle(&self) -> bool {
        self.set(!self.is_enabled());
        self.is_enabled()
    }

    /// Returns the underlying shell.
    pub fn shell(&self) -> &S {
        &self.shell
    }
}
