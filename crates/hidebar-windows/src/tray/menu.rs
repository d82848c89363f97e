use hidebar_core::locale::Labels;
use windows::Win32::Foundation::{HWND, LPARAM, POINT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    AppendMenuW, CreatePopupMenu, DestroyMenu, GetCursorPos, MF_CHECKED, MF_SEPARATOR, MF_STRING,
    MF_UNCHECKED, PostMessageW, SetForegroundWindow, TPM_BOTTOMALIGN, TPM_NONOTIFY,
    TPM_RETURNCMD, TPM_RIGHTBUTTON, TrackPopupMenu, WM_NULL,
};
use windows::core::PCWSTR;

use crate::wide;

const ID_STARTUP: u32 = 1;
const ID_EXIT: u32 = 2;

/// What the user picked from the context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MenuCommand {
    /// Register or unregister launch at login.
    SetStartup(bool),
    Exit,
}

/// Maps a menu item id to its command.
///
/// The startup item inverts the check mark the menu was shown with.
fn decode(id: u32, startup_checked: bool) -> Option<MenuCommand> {
    match id {
        ID_STARTUP => Some(MenuCommand::SetStartup(!startup_checked)),
        ID_EXIT => Some(MenuCommand::Exit),
        _ => None,
    }
}

/// Shows the context menu at the cursor and returns the picked command.
///
/// Returns `None` when the menu is dismissed or cannot be built.
pub(super) fn show(hwnd: HWND, labels: &Labels, startup_checked: bool) -> Option<MenuCommand> {
    let startup_label = wide(labels.menu_startup);
    let exit_label = wide(labels.menu_exit);
    let check = if startup_checked {
        MF_CHECKED
    } else {
        MF_UNCHECKED
    };

    unsafe {
        let menu = CreatePopupMenu().ok()?;
        let built = AppendMenuW(
            menu,
            MF_STRING | check,
            ID_STARTUP as usize,
            PCWSTR(startup_label.as_ptr()),
        )
        .and_then(|()| AppendMenuW(menu, MF_SEPARATOR, 0, PCWSTR::null()))
        .and_then(|()| AppendMenuW(menu, MF_STRING, ID_EXIT as usize, PCWSTR(exit_label.as_ptr())));

        let mut picked = None;
        let mut pt = POINT::default();
        if built.is_ok() && GetCursorPos(&mut pt).is_ok() {
            // The window must be foreground or the menu won't close when
            // the user clicks elsewhere.
            let _ = SetForegroundWindow(hwnd);
            let id = TrackPopupMenu(
                menu,
                TPM_RIGHTBUTTON | TPM_BOTTOMALIGN | TPM_RETURNCMD | TPM_NONOTIFY,
                pt.x,
                pt.y,
                None,
                hwnd,
                None,
            );
            release_menu(hwnd);
            if id.0 > 0 {
                picked = decode(id.0 as u32, startup_checked);
            }
        }

        let _ = DestroyMenu(menu);
        picked
    }
}

/// Posts a no-op message so the menu's modal loop lets go of the
/// foreground and the next right-click opens it again.
fn release_menu(hwnd: HWND) {
    // SAFETY: hwnd belongs to this thread; WM_NULL carries no data.
    unsafe {
        let _ = PostMessageW(Some(hwnd), WM_NULL, WPARAM(0), LPARAM(0));
    }
}

#[cfg(test)]
mod tests {
    use windows::Win32::UI::WindowsAndMessaging::{
        CreateWindowExW, DestroyWindow, MSG, PM_REMOVE, PeekMessageW, WINDOW_EX_STYLE,
        WINDOW_STYLE,
    };
    use windows::core::w;

    use super::*;

    #[test]
    fn startup_item_inverts_check_mark() {
        assert_eq!(decode(ID_STARTUP, true), Some(MenuCommand::SetStartup(false)));
        assert_eq!(decode(ID_STARTUP, false), Some(MenuCommand::SetStartup(true)));
    }

    #[test]
    fn exit_and_unknown_ids() {
        assert_eq!(decode(ID_EXIT, false), Some(MenuCommand::Exit));
        assert_eq!(decode(0, false), None);
        assert_eq!(decode(99, true), None);
    }

    #[test]
    fn release_posts_null_message_to_window() {
        // Arrange
        let hwnd = unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE::default(),
                w!("STATIC"),
                w!("menu-release"),
                WINDOW_STYLE::default(),
                0,
                0,
                0,
                0,
                None,
                None,
                None,
                None,
            )
        }
        .unwrap();

        // Act
        release_menu(hwnd);

        // Assert
        let mut seen_null = false;
        let mut msg = MSG::default();
        while unsafe { PeekMessageW(&mut msg, Some(hwnd), 0, 0, PM_REMOVE) }.as_bool() {
            seen_null |= msg.message == WM_NULL;
        }
        unsafe {
            let _ = DestroyWindow(hwnd);
        }
        assert!(seen_null);
    }
}
