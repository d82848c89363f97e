/// Generates the default `config.toml` contents with explanatory comments.
///
/// Used by `hidebar init` to create a starter file the user can edit.
pub fn generate_config() -> String {
    r##"# Hidebar configuration
# Location: ~/.config/hidebar/config.toml

[tray]
# Language of the tooltip and context menu: "chinese" or "english".
language = "chinese"

[logging]
# Write a log file to ~/.config/hidebar/logs/hidebar.log.
enabled = false
# Minimum level: "debug", "info", "warn" or "error".
level = "info"
# Rotate the log once it reaches this many megabytes (1 to 100).
max_file_mb = 10
"##
    .to_string()
}
