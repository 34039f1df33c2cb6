use tauri::{AppHandle, Manager, WebviewWindow};
use tracing::{debug, warn};

use crate::{main_window, MainWindowState};

pub(crate) fn current_main_window(app_handle: &AppHandle) -> Option<WebviewWindow> {
    let state = app_handle.try_state::<MainWindowState>()?;
    let window = state.lock().main_window().cloned();
    window
}

/// Runs `action` against the main window, or logs and does nothing once the handle is gone.
fn with_main_window<F>(app_handle: &AppHandle, action_name: &str, action: F)
where
    F: FnOnce(&WebviewWindow) -> tauri::Result<()>,
{
    let Some(window) = current_main_window(app_handle) else {
        debug!(action = action_name, "skipped: main window not available");
        return;
    };
    if let Err(error) = action(&window) {
        warn!(action = action_name, %error, "main window action failed");
    }
}

pub(crate) fn focus_main_window(app_handle: &AppHandle) {
    with_main_window(app_handle, "focus", |window| {
        if window.is_minimized()? {
            window.unminimize()?;
        }
        window.show()?;
        window.set_focus()
    });
}

pub(crate) fn reload_main_window(app_handle: &AppHandle) {
    with_main_window(app_handle, "reload", |window| {
        main_window::reload_main_window(window);
        Ok(())
    });
}

pub(crate) fn close_main_window(app_handle: &AppHandle) {
    with_main_window(app_handle, "close", |window| window.close());
}

pub(crate) fn toggle_fullscreen(app_handle: &AppHandle) {
    with_main_window(app_handle, "toggle fullscreen", |window| {
        let fullscreen = window.is_fullscreen()?;
        window.set_fullscreen(!fullscreen)
    });
}

pub(crate) fn toggle_devtools(app_handle: &AppHandle) {
    with_main_window(app_handle, "toggle devtools", |window| {
        if window.is_devtools_open() {
            window.close_devtools();
        } else {
            window.open_devtools();
        }
        Ok(())
    });
}
