use tauri::AppHandle;

use crate::ShellError;

/// Schedules `task` on the UI thread, which owns window creation and event delivery.
pub(crate) fn run_on_main_thread_dispatch<F>(
    app_handle: &AppHandle,
    label: &'static str,
    task: F,
) -> Result<(), ShellError>
where
    F: FnOnce(&AppHandle) + Send + 'static,
{
    let main_app = app_handle.clone();
    app_handle
        .run_on_main_thread(move || task(&main_app))
        .map_err(|error| ShellError::Dispatch {
            label,
            reason: error.to_string(),
        })
}
