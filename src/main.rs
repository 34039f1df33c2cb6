#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_types;
mod dev_tooling;
mod exit_events;
mod lifecycle;
mod logging;
mod main_window;
mod menu_actions;
mod menu_builder;
mod menu_handler;
mod notification_dialog;
mod runtime_config;
mod shell_error;
mod shell_services;
mod startup_task;
mod tauri_shell;
mod ui_dispatch;
mod update_checker;
mod update_notifier;
mod window_actions;

#[cfg(test)]
mod test_support;

pub(crate) use app_constants::*;
pub(crate) use app_types::{
    AtomicFlagGuard, DevToolsState, MainWindowState, Platform, UpdateState, WindowOptions,
    WindowPhase,
};
pub(crate) use runtime_config::RuntimeMode;
pub(crate) use shell_error::ShellError;

fn main() {
    app_runtime::run();
}
