//! Stand-ins for the Windows-only commands on other hosts.

use hidebar_core::config::Config;

fn unsupported() -> ! {
    eprintln!("Error: hidebar only runs on Windows.");
    std::process::exit(1);
}

pub mod autohide {
    pub fn toggle() {
        super::unsupported()
    }

    pub fn set(_enabled: bool) {
        super::unsupported()
    }
}

pub mod startup {
    pub fn set(_enabled: bool) {
        super::unsupported()
    }

    pub fn status() {
        super::unsupported()
    }
}

pub mod status {
    pub fn execute() {
        super::unsupported()
    }
}

pub mod tray {
    pub fn execute(_config: &super::Config) {
        super::unsupported()
    }
}
