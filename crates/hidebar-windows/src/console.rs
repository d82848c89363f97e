//! Lets the GUI-subsystem binary print to the terminal it was run from.

use windows::Win32::System::Console::{ATTACH_PARENT_PROCESS, AttachConsole};

/// Attaches to the parent process's console.
///
/// Fails harmlessly when launched from Explorer or the Run key, where
/// there is no parent console. Redirected handles are left alone.
pub fn attach_parent() {
    // SAFETY: AttachConsole has no preconditions; failure is ignored.
    let _ = unsafe { AttachConsole(ATTACH_PARENT_PROCESS) };
}
