use tauri::{AppHandle, ExitRequestApi, Manager};
use tracing::debug;

use crate::{
    lifecycle::WindowlessAction, tauri_shell::TauriShell, MainWindowState, Platform,
};

/// An exit request without a code means the last window closed; explicit exits carry one.
pub(crate) fn handle_exit_requested(app_handle: &AppHandle, code: Option<i32>, api: &ExitRequestApi) {
    if code.is_some() {
        return;
    }

    let shell = TauriShell::new(app_handle.clone());
    let state = app_handle.state::<MainWindowState>();
    let controller = state.lock();
    debug!(phase = ?controller.phase(), "last window closed");
    if controller.on_window_all_closed(Platform::current(), &shell) == WindowlessAction::StayResident
    {
        api.prevent_exit();
    }
}
