use hidebar_core::icon;
use hidebar_core::{HidebarResult, log_warn};
use windows::Win32::UI::Shell::{
    NIF_ICON, NIF_MESSAGE, NIF_TIP, NIM_ADD, NIM_DELETE, NIM_MODIFY, NOTIFYICONDATAW,
    Shell_NotifyIconW,
};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateIcon, DestroyIcon, HICON, IDI_APPLICATION, LoadIconW,
};

use super::Tray;
use super::window::WM_TRAYICON;

const TRAY_ID: u32 = 1;

/// The icon shown in the notification area.
///
/// Only an icon built by `CreateIcon` is destroyed on drop; the shared
/// stock icon from `LoadIconW` must never be passed to `DestroyIcon`.
pub(super) struct TrayIcon {
    handle: HICON,
    owned: bool,
}

impl TrayIcon {
    /// Builds the icon from the glyph, or falls back to the stock
    /// application icon if `CreateIcon` fails.
    pub(super) fn create() -> Self {
        let (and, xor) = icon::glyph().masks();
        let size = icon::SIZE as i32;
        // SAFETY: both masks hold SIZE rows of SIZE bits, word-aligned.
        let created = unsafe { CreateIcon(None, size, size, 1, 1, and.as_ptr(), xor.as_ptr()) };
        match created {
            Ok(handle) => Self {
                handle,
                owned: true,
            },
            Err(e) => {
                log_warn!("could not build tray icon: {e}");
                Self::stock()
            }
        }
    }

    fn stock() -> Self {
        // SAFETY: loading a stock icon has no preconditions.
        let handle = unsafe { LoadIconW(None, IDI_APPLICATION) }.unwrap_or_default();
        Self {
            handle,
            owned: false,
        }
    }

    pub(super) fn handle(&self) -> HICON {
        self.handle
    }
}

impl Drop for TrayIcon {
    fn drop(&mut self) {
        if self.owned && !self.handle.is_invalid() {
            // SAFETY: we created this icon and the notify icon is gone.
            unsafe {
                let _ = DestroyIcon(self.handle);
            }
        }
    }
}

/// Adds the notify icon with the current tooltip.
pub(super) fn add(tray: &Tray) -> HidebarResult<()> {
    let mut nid = base(tray);
    nid.uFlags = NIF_MESSAGE | NIF_ICON | NIF_TIP;
    nid.uCallbackMessage = WM_TRAYICON;
    nid.hIcon = tray.icon.handle();
    set_tip(&mut nid, tray);

    // SAFETY: nid is fully initialised and sized.
    if unsafe { Shell_NotifyIconW(NIM_ADD, &nid) }.as_bool() {
        Ok(())
    } else {
        Err("could not add notify icon".into())
    }
}

/// Refreshes the tooltip from the current auto-hide state.
pub(super) fn update_tooltip(tray: &Tray) {
    let mut nid = base(tray);
    nid.uFlags = NIF_TIP;
    set_tip(&mut nid, tray);
    // SAFETY: as in `add`.
    let _ = unsafe { Shell_NotifyIconW(NIM_MODIFY, &nid) };
}

/// Removes the notify icon.
pub(super) fn remove(tray: &Tray) {
    let nid = base(tray);
    // SAFETY: as in `add`.
    let _ = unsafe { Shell_NotifyIconW(NIM_DELETE, &nid) };
}

fn base(tray: &Tray) -> NOTIFYICONDATAW {
    NOTIFYICONDATAW {
        cbSize: std::mem::size_of::<NOTIFYICONDATAW>() as u32,
        hWnd: tray.hwnd,
        uID: TRAY_ID,
        ..Default::default()
    }
}

fn set_tip(nid: &mut NOTIFYICONDATAW, tray: &Tray) {
    let text = tray.labels.tooltip(tray.auto_hide.is_enabled());
    copy_truncated(&mut nid.szTip, text);
}

/// Copies `text` into a fixed UTF-16 buffer, always leaving a terminator.
fn copy_truncated(dst: &mut [u16], text: &str) {
    let Some(room) = dst.len().checked_sub(1) else {
        return;
    };
    let mut len = 0;
    for (slot, unit) in dst.iter_mut().zip(text.encode_utf16().take(room)) {
        *slot = unit;
        len += 1;
    }
    dst[len] = 0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_icon_is_owned() {
        let icon = TrayIcon::create();
        assert!(icon.owned);
        assert!(!icon.handle().is_invalid());
    }

    #[test]
    fn stock_icon_is_not_owned() {
        // Arrange
        let icon = TrayIcon::stock();
        let handle = icon.handle();

        // Act
        drop(icon);

        // Assert
        let again = unsafe { LoadIconW(None, IDI_APPLICATION) }.unwrap();
        assert_eq!(again, handle);
    }

    #[test]
    fn long_text_is_truncated_with_terminator() {
        // Arrange
        let mut buf = [0xFFFFu16; 4];

        // Act
        copy_truncated(&mut buf, "abcdef");

        // Assert
        assert_eq!(buf, [b'a' as u16, b'b' as u16, b'c' as u16, 0]);
    }

    #[test]
    fn short_text_is_copied_whole() {
        // Arrange
        let mut buf = [0xFFFFu16; 8];

        // Act
        copy_truncated(&mut buf, "任务");

        // Assert
        assert_eq!(&buf[..3], &[0x4EFB, 0x52A1, 0]);
    }
}
