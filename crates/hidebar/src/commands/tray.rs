use hidebar_core::config::Config;
use hidebar_core::{INSTANCE_MUTEX_NAME, log_error, log_info};
use hidebar_windows::SingleInstance;

/// Runs the tray until the user exits it.
///
/// A second launch finds the instance mutex taken and exits silently.
pub fn execute(config: &Config) {
    let _instance = match SingleInstance::acquire(INSTANCE_MUTEX_NAME) {
        Ok(Some(guard)) => guard,
        Ok(None) => {
            log_info!("another instance is running; exiting");
            return;
        }
        Err(e) => {
            log_error!("{e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = hidebar_windows::tray::run(config.tray.language) {
        log_error!("tray error: {e}");
        eprintln!("Tray error: {e}");
        std::process::exit(1);
    }
}
