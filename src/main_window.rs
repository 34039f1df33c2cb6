use std::{path::PathBuf, sync::atomic::Ordering};
use tauri::{Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder};
use tracing::{debug, warn};
use url::Url;

use crate::{
    shell_services::WindowManager, tauri_shell::TauriShell, DevToolsState, ShellError,
    WindowOptions, MAIN_WINDOW_LABEL, MAIN_WINDOW_TITLE,
};

const BLANK_PAGE: &str = "about:blank";

/// The placeholder page a freshly created window starts on, before content is loaded.
pub(crate) fn is_blank_page(url: &Url) -> bool {
    url.scheme() == "about"
}

impl WindowManager for TauriShell {
    type Handle = WebviewWindow;

    fn create_window(&self, options: &WindowOptions) -> Result<WebviewWindow, ShellError> {
        let blank =
            Url::parse(BLANK_PAGE).map_err(|error| ShellError::window("create", error))?;
        let mut builder =
            WebviewWindowBuilder::new(&self.app, MAIN_WINDOW_LABEL, WebviewUrl::External(blank))
                .title(MAIN_WINDOW_TITLE)
                .inner_size(options.width, options.height)
                .visible(options.visible);
        if let Some(extensions_dir) = developer_extensions_dir(&self.app) {
            debug!(path = %extensions_dir.display(), "loading developer extensions");
            builder = builder
                .browser_extensions_enabled(true)
                .extensions_path(extensions_dir);
        }
        builder
            .build()
            .map_err(|error| ShellError::window("create", error))
    }

    fn load_content(&self, window: &WebviewWindow, url: &str) -> Result<(), ShellError> {
        let url = Url::parse(url).map_err(|error| ShellError::window("load content into", error))?;
        window
            .navigate(url)
            .map_err(|error| ShellError::window("load content into", error))
    }

    fn show(&self, window: &WebviewWindow) -> Result<(), ShellError> {
        window
            .show()
            .map_err(|error| ShellError::window("show", error))?;
        open_devtools_if_requested(&self.app, window);
        Ok(())
    }

    fn focus(&self, window: &WebviewWindow) -> Result<(), ShellError> {
        window
            .set_focus()
            .map_err(|error| ShellError::window("focus", error))
    }

    fn close_window(&self, window: &WebviewWindow) -> Result<(), ShellError> {
        // Destroyed reaches the window event handler, which needs the controller lock the
        // caller is holding, so the destroy runs off this thread.
        let window = window.clone();
        tauri::async_runtime::spawn(async move {
            if let Err(error) = window.destroy() {
                warn!(%error, "failed to destroy main window");
            }
        });
        Ok(())
    }
}

fn developer_extensions_dir(app: &tauri::AppHandle) -> Option<PathBuf> {
    app.try_state::<DevToolsState>()?.extensions_dir()
}

fn open_devtools_if_requested(app: &tauri::AppHandle, window: &WebviewWindow) {
    let Some(state) = app.try_state::<DevToolsState>() else {
        return;
    };
    if state.open_on_show.swap(false, Ordering::Relaxed) {
        window.open_devtools();
    }
}

pub(crate) fn reload_main_window(window: &WebviewWindow) {
    if let Err(error) = window.eval("window.location.reload()") {
        warn!(%error, "failed to reload main window");
    }
}
