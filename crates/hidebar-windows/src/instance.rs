use hidebar_core::HidebarResult;
use windows::Win32::Foundation::{CloseHandle, ERROR_ALREADY_EXISTS, GetLastError, HANDLE};
use windows::Win32::System::Threading::CreateMutexW;
use windows::core::PCWSTR;

use crate::wide;

/// Holds the named mutex that marks a running tray.
///
/// Released when dropped, i.e. at process exit.
pub struct SingleInstance {
    handle: HANDLE,
}

impl SingleInstance {
    /// Creates the named mutex.
    ///
    /// Returns `Ok(None)` when another process already owns the name.
    pub fn acquire(name: &str) -> HidebarResult<Option<Self>> {
        let wide_name = wide(name);
        // SAFETY: the name buffer is null-terminated and outlives the call.
        let handle = unsafe { CreateMutexW(None, false, PCWSTR(wide_name.as_ptr())) }
            .map_err(|e| format!("could not create instance mutex: {e}"))?;

        // CreateMutexW succeeds with a handle to the existing object and
        // reports ERROR_ALREADY_EXISTS when another instance created it.
        if unsafe { GetLastError() } == ERROR_ALREADY_EXISTS {
            // SAFETY: we own this handle and never use it again.
            unsafe {
                let _ = CloseHandle(handle);
            }
            return Ok(None);
        }

        Ok(Some(Self { handle }))
    }
}

impl Drop for SingleInstance {
    fn drop(&mut self) {
        // SAFETY: the handle came from CreateMutexW and is closed once.
        unsafe {
            let _ = CloseHandle(self.handle);
        }
    }
}
