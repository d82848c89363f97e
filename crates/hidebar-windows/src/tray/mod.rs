//! The tray shell: a hidden window owning a notify icon.
//!
//! Everything runs on the calling thread. Each click handled by the
//! window procedure calls exactly one controller operation and returns.

mod menu;
mod notify;
mod window;

use std::cell::RefCell;

use hidebar_core::HidebarResult;
use hidebar_core::locale::Labels;
use hidebar_core::{Language, log_info};
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{
    DestroyWindow, DispatchMessageW, GetMessageW, MSG, TranslateMessage,
};

use crate::{AutoHide, Startup};

/// State reachable from the window procedure.
struct Tray {
    hwnd: HWND,
    icon: notify::TrayIcon,
    labels: &'static Labels,
    auto_hide: AutoHide,
    startup: Startup,
    /// Broadcast when Explorer (re)creates the taskbar.
    taskbar_created: u32,
}

thread_local! {
    static TRAY: RefCell<Option<Tray>> = const { RefCell::new(None) };
}

/// Runs `f` against the installed tray, if any.
///
/// Takes a shared borrow only, so nested window messages dispatched
/// while a menu is open can still reach the tray.
fn with_tray<R>(f: impl FnOnce(&Tray) -> R) -> Option<R> {
    TRAY.with(|cell| cell.try_borrow().ok()?.as_ref().map(f))
}

/// Shows the tray icon and blocks until the user picks "exit".
pub fn run(language: Language) -> HidebarResult<()> {
    let hwnd = window::create()?;
    let taskbar_created = window::register_taskbar_created();
    let icon = notify::TrayIcon::create();

    let tray = Tray {
        hwnd,
        icon,
        labels: language.labels(),
        auto_hide: crate::auto_hide(),
        startup: crate::startup(),
        taskbar_created,
    };
    TRAY.with(|cell| *cell.borrow_mut() = Some(tray));

    if let Some(Err(e)) = with_tray(notify::add) {
        // SAFETY: the window was created above and is destroyed once.
        unsafe {
            let _ = DestroyWindow(hwnd);
        }
        TRAY.with(|cell| cell.borrow_mut().take());
        return Err(e);
    }
    log_info!("tray started");

    run_message_pump();

    // Dropping the tray frees the icon.
    TRAY.with(|cell| cell.borrow_mut().take());
    log_info!("tray stopped");
    Ok(())
}

/// The Win32 message pump. Blocks until `WM_QUIT` is received.
fn run_message_pump() {
    let mut msg = MSG::default();

    while unsafe { GetMessageW(&mut msg, None, 0, 0).as_bool() } {
        unsafe {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}
