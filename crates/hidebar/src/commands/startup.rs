/// Registers or unregisters launch at login.
///
/// The registrar swallows registry errors, so success is checked by
/// reading the entry back.
pub fn set(enabled: bool) {
    let registrar = hidebar_windows::startup();
    registrar.set(enabled);

    if registrar.is_enabled() != enabled {
        eprintln!("Error: could not update the registry Run key.");
        std::process::exit(1);
    }
    if enabled {
        println!("Startup enabled.");
    } else {
        println!("Startup disabled.");
    }
}

pub fn status() {
    if hidebar_windows::startup().is_enabled() {
        println!("Startup is currently enabled.");
    } else {
        println!("Startup is currently disabled.");
    }
}
