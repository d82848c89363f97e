use serde::{Deserialize, Serialize};

/// Language of the tray tooltip and menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Chinese,
    English,
}

/// Fixed strings shown by the tray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub tooltip_auto_hide: &'static str,
    pub tooltip_always_shown: &'static str,
    pub menu_startup: &'static str,
    pub menu_exit: &'static str,
}

const CHINESE: Labels = Labels {
    tooltip_auto_hide: "任务栏: 自动隐藏",
    tooltip_always_shown: "任务栏: 始终显示",
    menu_startup: "开机启动",
    menu_exit: "退出",
};

const ENGLISH: Labels = Labels {
    tooltip_auto_hide: "Taskbar: auto-hide",
    tooltip_always_shown: "Taskbar: always shown",
    menu_startup: "Start at login",
    menu_exit: "Exit",
};

impl Language {
    pub fn labels(self) -> &'static Labels {
        match self {
            Self::Chinese => &CHINESE,
            Self::English => &ENGLISH,
        }
    }
}

impl Labels {
    /// Tooltip for the given auto-hide state.
    pub fn tooltip(&self, auto_hide: bool) -> &'static str {
        if auto_hide {
            self.tooltip_auto_hide
        } else {
            self.tooltip_always_shown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_follows_auto_hide_state() {
        let labels = Language::Chinese.labels();
        assert_eq!(labels.tooltip(true), "任务栏: 自动隐藏");
        assert_eq!(labels.tooltip(false), "任务栏: 始终显示");
    }

    #[test]
    fn tooltips_fit_in_notify_icon_buffer() {
        // szTip holds 128 UTF-16 units including the terminator.
        for lang in [Language::Chinese, Language::English] {
            let labels = lang.labels();
            for tip in [labels.tooltip_auto_hide, labels.tooltip_always_shown] {
                assert!(tip.encode_utf16().count() < 128);
            }
        }
    }
}
