#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_types;
mod bridge_commands;
mod debug_tooling;
mod exit_policy;
mod host_bridge;
mod lifecycle;
mod logging;
mod main_window;
mod runtime_paths;
mod shell_config;
mod tauri_host;

pub(crate) use app_constants::*;
pub(crate) use app_types::{ShellBridgeInfo, ShellCell};
pub(crate) use logging::{append_desktop_log, append_shutdown_log, append_startup_log};

fn main() {
    let config = shell_config::ShellConfig::from_environment();
    app_runtime::run(config);
}
