use super::on_off;

pub fn execute() {
    let auto_hide = hidebar_windows::auto_hide().is_enabled();
    let startup = hidebar_windows::startup().is_enabled();

    println!("Taskbar auto-hide: {}", on_off(auto_hide));
    println!("Start at login:    {}", on_off(startup));
}
