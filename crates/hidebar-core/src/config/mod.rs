mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::Language;
use crate::log::LogConfig;

pub use loader::{config_dir, config_path, load, try_load};

/// Top-level configuration for Hidebar.
///
/// Loaded from `~/.config/hidebar/config.toml`. The file is optional and
/// missing sections fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tray appearance.
    pub tray: TrayConfig,
    /// File logging.
    pub logging: LogConfig,
}

/// Tray settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrayConfig {
    /// Language of the tooltip and menu.
    pub language: Language,
}

impl Config {
    /// Clamps values to safe ranges.
    pub fn validate(&mut self) {
        self.logging.max_file_mb = self.logging.max_file_mb.clamp(1, 100);
    }
}
