use tauri::AppHandle;
use tracing::{debug, info};

use crate::{
    menu_actions::{self, MenuAction},
    shell_services::{ProcessControl, UpdateService},
    tauri_shell::TauriShell,
    window_actions,
};

pub(crate) fn handle_menu_event(app_handle: &AppHandle, menu_id: &str) {
    let Some(action) = menu_actions::action_from_menu_id(menu_id) else {
        debug!(menu_id, "ignoring unknown menu event");
        return;
    };

    match action {
        MenuAction::CloseWindow => window_actions::close_main_window(app_handle),
        MenuAction::Quit => {
            info!("quit requested from menu");
            TauriShell::new(app_handle.clone()).quit();
        }
        MenuAction::Reload => window_actions::reload_main_window(app_handle),
        MenuAction::ToggleFullscreen => window_actions::toggle_fullscreen(app_handle),
        MenuAction::ToggleDevtools => window_actions::toggle_devtools(app_handle),
        MenuAction::CheckForUpdates => {
            info!("update check requested from menu");
            TauriShell::new(app_handle.clone()).check_for_updates();
        }
    }
}
