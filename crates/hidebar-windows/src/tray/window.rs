use hidebar_core::HidebarResult;
use hidebar_core::log_debug;
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, PostQuitMessage, RegisterClassW,
    RegisterWindowMessageW, WM_APP, WM_CONTEXTMENU, WM_DESTROY, WM_LBUTTONDBLCLK,
    WM_RBUTTONUP, WNDCLASSW, WS_EX_TOOLWINDOW,
};
use windows::core::w;

use super::menu::{self, MenuCommand};
use super::{notify, with_tray};

/// Callback message the notify icon posts mouse events with.
pub(super) const WM_TRAYICON: u32 = WM_APP + 1;

/// Creates the hidden window that owns the notify icon.
///
/// Must NOT be a message-only window (`HWND_MESSAGE` parent) because those
/// do not receive the `TaskbarCreated` broadcast. `WS_EX_TOOLWINDOW` keeps
/// it out of the taskbar and Alt+Tab.
pub(super) fn create() -> HidebarResult<HWND> {
    unsafe {
        let class_name = w!("HidebarTray");
        let wc = WNDCLASSW {
            lpfnWndProc: Some(tray_proc),
            lpszClassName: class_name,
            ..Default::default()
        };

        if RegisterClassW(&wc) == 0 {
            return Err("could not register HidebarTray window class".into());
        }

        // No WS_VISIBLE: window stays hidden.
        let hwnd = CreateWindowExW(
            WS_EX_TOOLWINDOW,
            class_name,
            w!("Hidebar"),
            Default::default(),
            0,
            0,
            0,
            0,
            None,
            None,
            None,
            None,
        );

        match hwnd {
            Ok(h) if !h.is_invalid() => Ok(h),
            Ok(_) => Err("could not create HidebarTray window".into()),
            Err(e) => Err(format!("could not create HidebarTray window: {e}").into()),
        }
    }
}

/// Returns the message id Explorer broadcasts after (re)creating the taskbar.
pub(super) fn register_taskbar_created() -> u32 {
    // SAFETY: RegisterWindowMessageW only reads the string.
    unsafe { RegisterWindowMessageW(w!("TaskbarCreated")) }
}

/// WNDPROC for the tray window.
unsafe extern "system" fn tray_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_TRAYICON => {
            // Without NOTIFYICON_VERSION_4 the mouse message is the whole lParam.
            match lparam.0 as u32 {
                WM_LBUTTONDBLCLK => {
                    with_tray(|tray| {
                        let enabled = tray.auto_hide.toggle();
                        log_debug!("auto-hide toggled to {enabled}");
                        notify::update_tooltip(tray);
                    });
                }
                WM_RBUTTONUP | WM_CONTEXTMENU => on_context_menu(hwnd),
                _ => {}
            }
            LRESULT(0)
        }
        WM_DESTROY => {
            with_tray(notify::remove);
            unsafe { PostQuitMessage(0) };
            LRESULT(0)
        }
        _ => {
            if with_tray(|tray| tray.taskbar_created == msg && msg != 0) == Some(true) {
                log_debug!("taskbar recreated; re-adding icon");
                let _ = with_tray(notify::add);
            }
            unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) }
        }
    }
}

/// Shows the context menu and runs the picked item.
fn on_context_menu(hwnd: HWND) {
    let Some((labels, startup_checked)) =
        with_tray(|tray| (tray.labels, tray.startup.is_enabled()))
    else {
        return;
    };
    match menu::show(hwnd, labels, startup_checked) {
        Some(MenuCommand::SetStartup(enabled)) => {
            with_tray(|tray| tray.startup.set(enabled));
            log_debug!("startup set to {enabled}");
        }
        Some(MenuCommand::Exit) => {
            // SAFETY: hwnd is our tray window; WM_DESTROY removes the icon.
            unsafe {
                let _ = DestroyWindow(hwnd);
            }
        }
        None => {}
    }
}
