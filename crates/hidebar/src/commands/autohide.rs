use hidebar_core::TaskbarShell;

use super::on_off;

pub fn toggle() {
    let controller = hidebar_windows::auto_hide();
    require_taskbar(controller.shell());
    let enabled = controller.toggle();
    println!("Taskbar auto-hide is now {}.", on_off(enabled));
}

pub fn set(enabled: bool) {
    let controller = hidebar_windows::auto_hide();
    require_taskbar(controller.shell());
    controller.set(enabled);
    println!("Taskbar auto-hide is now {}.", on_off(controller.is_enabled()));
}

/// Exits with an error when Explorer's taskbar is not running.
fn require_taskbar(shell: &impl TaskbarShell) {
    if shell.query_state().is_none() {
        eprintln!("Error: could not find the taskbar.");
        std::process::exit(1);
    }
}
