use tauri::{AppHandle, Manager};
use tracing::{error, warn};

use crate::{
    lifecycle, runtime_config::ShellConfig, tauri_shell::TauriShell, ui_dispatch,
    MainWindowState,
};

/// Handles the one-time ready signal: claims it synchronously, then runs the update check
/// and dev extension install off the UI thread before opening the main window on it.
pub(crate) fn spawn_startup_task(app_handle: AppHandle) {
    let claimed = {
        let state = app_handle.state::<MainWindowState>();
        let mut controller = state.lock();
        controller.begin_ready()
    };
    if let Err(error) = claimed {
        warn!(%error, "ignoring ready signal");
        return;
    }

    tauri::async_runtime::spawn(async move {
        let shell = TauriShell::new(app_handle.clone());
        let config = app_handle.state::<ShellConfig>().inner().clone();
        lifecycle::prepare_ready(&shell, &shell, &config).await;

        let content_url = config.content_url(app_handle.config().build.dev_url.as_ref());
        let dispatched =
            ui_dispatch::run_on_main_thread_dispatch(&app_handle, "open main window", move |app| {
                open_main_window(app, &content_url)
            });
        if let Err(error) = dispatched {
            error!(%error, "failed to schedule main window creation");
        }
    });
}

fn open_main_window(app_handle: &AppHandle, content_url: &str) {
    let shell = TauriShell::new(app_handle.clone());
    let state = app_handle.state::<MainWindowState>();
    let mut controller = state.lock();
    if let Err(error) = controller.open_main_window(&shell, &shell, content_url) {
        error!(%error, "failed to open main window");
    }
}
