//! Taskbar state through the Shell appbar API.
//!
//! `ABM_GETSTATE` and `ABM_SETSTATE` are addressed to the
//! `Shell_TrayWnd` window, which is looked up fresh on every call so an
//! Explorer restart never leaves us holding a dead handle.

use hidebar_core::TaskbarShell;
use windows::Win32::Foundation::LPARAM;
use windows::Win32::UI::Shell::{ABM_GETSTATE, ABM_SETSTATE, APPBARDATA, SHAppBarMessage};
use windows::Win32::UI::WindowsAndMessaging::FindWindowW;
use windows::core::{PCWSTR, w};

/// The primary taskbar.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellTaskbar;

impl ShellTaskbar {
    /// Builds an `APPBARDATA` addressed to the taskbar, or `None` if
    /// Explorer is not running.
    fn appbar_data() -> Option<APPBARDATA> {
        // SAFETY: FindWindowW only reads the class name string.
        let hwnd = unsafe { FindWindowW(w!("Shell_TrayWnd"), PCWSTR::null()) }.ok()?;
        if hwnd.is_invalid() {
            return None;
        }
        Some(APPBARDATA {
            cbSize: std::mem::size_of::<APPBARDATA>() as u32,
            hWnd: hwnd,
            ..Default::default()
        })
    }
}

impl TaskbarShell for ShellTaskbar {
    fn query_state(&self) -> Option<u32> {
        let mut data = Self::appbar_data()?;
        // SAFETY: data is a correctly sized APPBARDATA that outlives the call.
        let state = unsafe { SHAppBarMessage(ABM_GETSTATE, &mut data) };
        Some(state as u32)
    }

    fn apply_state(&self, mask: u32) {
        let Some(mut data) = Self::appbar_data() else {
            return;
        };
        data.lParam = LPARAM(mask as isize);
        // SAFETY: as above. The return value of ABM_SETSTATE is always TRUE.
        unsafe { SHAppBarMessage(ABM_SETSTATE, &mut data) };
    }
}
