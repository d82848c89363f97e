// Launched from the Run key without a terminal: no console window.
#![cfg_attr(windows, windows_subsystem = "windows")]

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "hidebar",
    version,
    about = "Toggle Windows taskbar auto-hide from the system tray"
)]
struct Cli {
    /// Runs the tray icon when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Flip taskbar auto-hide and print the new state
    Toggle,
    /// Turn taskbar auto-hide on or off
    Autohide {
        #[command(subcommand)]
        state: SwitchCommands,
    },
    /// Manage launching Hidebar at login
    Startup {
        #[command(subcommand)]
        command: StartupCommands,
    },
    /// Show auto-hide and startup state
    Status,
    /// Create the default configuration file
    Init,
}

#[derive(Subcommand)]
enum SwitchCommands {
    /// Hide the taskbar until the pointer reaches its edge
    On,
    /// Keep the taskbar visible
    Off,
}

#[derive(Subcommand)]
enum StartupCommands {
    /// Launch Hidebar at login
    Enable,
    /// Stop launching Hidebar at login
    Disable,
    /// Show whether Hidebar launches at login
    Status,
}

fn main() {
    commands::attach_console();
    let cli = Cli::parse();

    let config = hidebar_core::config::load();
    hidebar_core::log::init(&config.logging);

    match cli.command {
        None => commands::tray::execute(&config),
        Some(Commands::Toggle) => commands::autohide::toggle(),
        Some(Commands::Autohide { state }) => {
            commands::autohide::set(matches!(state, SwitchCommands::On))
        }
        Some(Commands::Startup { command }) => match command {
            StartupCommands::Enable => commands::startup::set(true),
            StartupCommands::Disable => commands::startup::set(false),
            StartupCommands::Status => commands::startup::status(),
        },
        Some(Commands::Status) => commands::status::execute(),
        Some(Commands::Init) => commands::init::execute(),
    }
}
