use tauri::{webview::PageLoadEvent, AppHandle, Manager, RunEvent, WindowEvent};
use tracing::{error, info, warn};

use crate::{
    exit_events, logging, main_window, menu_handler, runtime_config::ShellConfig, startup_task,
    tauri_shell::TauriShell, window_actions, DevToolsState, MainWindowState, UpdateState,
    MAIN_WINDOW_LABEL,
};

pub(crate) fn run() {
    let config = ShellConfig::from_env();
    let log_path = logging::init_logging(&config);
    info!(mode = ?config.mode, ?log_path, "desktop process starting");

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
            info!("second instance launched, focusing main window");
            window_actions::focus_main_window(app);
        }))
        .plugin(tauri_plugin_updater::Builder::new().build())
        .plugin(tauri_plugin_dialog::init())
        .manage(config)
        .manage(MainWindowState::default())
        .manage(UpdateState::default())
        .manage(DevToolsState::default())
        .on_window_event(|window, event| {
            if window.label() != MAIN_WINDOW_LABEL {
                return;
            }
            if let WindowEvent::Destroyed = event {
                let state = window.app_handle().state::<MainWindowState>();
                let mut controller = state.lock();
                controller.on_closed();
                info!("main window closed");
            }
        })
        .on_page_load(|webview, payload| match payload.event() {
            PageLoadEvent::Started => {}
            PageLoadEvent::Finished => {
                if webview.label() != MAIN_WINDOW_LABEL || main_window::is_blank_page(payload.url())
                {
                    return;
                }
                info!(url = %payload.url(), "main window content finished loading");
                handle_content_loaded(webview.app_handle());
            }
        })
        .on_menu_event(|app, event| menu_handler::handle_menu_event(app, event.id().as_ref()))
        .setup(|app| {
            startup_task::spawn_startup_task(app.handle().clone());
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| {
            if let RunEvent::ExitRequested { code, api, .. } = event {
                exit_events::handle_exit_requested(app_handle, code, &api);
            }
        });
}

fn handle_content_loaded(app_handle: &AppHandle) {
    let shell = TauriShell::new(app_handle.clone());
    let state = app_handle.state::<MainWindowState>();
    let result = state.lock().on_content_loaded(&shell);

    match result {
        Ok(true) => info!("main window shown"),
        Ok(false) => {}
        Err(error) if error.is_fatal() => {
            error!(%error, "main window invariant violated, exiting");
            app_handle.exit(1);
        }
        Err(error) => warn!(%error, "failed to show main window"),
    }
}
