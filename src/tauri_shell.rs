use tauri::AppHandle;
use tracing::info;

use crate::shell_services::ProcessControl;

/// Tauri-backed implementation of every shell capability.
///
/// The individual capabilities live next to the code they drive: windows in
/// `main_window`, menus in `menu_builder`, updates in `update_checker`, dialogs in
/// `notification_dialog`, and developer extensions in `dev_tooling`.
#[derive(Clone)]
pub(crate) struct TauriShell {
    pub(crate) app: AppHandle,
}

impl TauriShell {
    pub(crate) fn new(app: AppHandle) -> Self {
        Self { app }
    }

    pub(crate) fn app_handle(&self) -> &AppHandle {
        &self.app
    }
}

impl ProcessControl for TauriShell {
    fn quit(&self) {
        info!("exiting desktop process");
        self.app.exit(0);
    }
}
