pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const MAIN_WINDOW_TITLE: &str = "Desktop Shell";
pub(crate) const MAIN_WINDOW_WIDTH: f64 = 1024.0;
pub(crate) const MAIN_WINDOW_HEIGHT: f64 = 728.0;
pub(crate) const APP_CONTENT_PATH: &str = "index.html";

pub(crate) const APP_DIR_NAME: &str = "desktop-shell";
pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";
pub(crate) const DEV_EXTENSIONS_DIR: &str = "devtools-extensions";
pub(crate) const DEV_EXTENSIONS_STATE_FILE: &str = "installed.json";
pub(crate) const DEV_EXTENSIONS_INSTALL_DIR: &str = "installed";

pub(crate) const SHELL_ENV_ENV: &str = "DESKTOP_SHELL_ENV";
pub(crate) const UPGRADE_EXTENSIONS_ENV: &str = "DESKTOP_SHELL_UPGRADE_EXTENSIONS";
pub(crate) const DEBUG_PROD_ENV: &str = "DESKTOP_SHELL_DEBUG_PROD";
pub(crate) const CONTENT_URL_ENV: &str = "DESKTOP_SHELL_CONTENT_URL";
pub(crate) const LOG_LEVEL_ENV: &str = "DESKTOP_SHELL_LOG";

pub(crate) const UPDATE_CHECKING_TITLE: &str = "Software Update";
pub(crate) const UPDATE_CHECKING_MESSAGE: &str = "Checking for updates...";
pub(crate) const UPDATE_AVAILABLE_TITLE: &str = "Update Available";
pub(crate) const UPDATE_NOT_AVAILABLE_TITLE: &str = "Update Not Available";
pub(crate) const UPDATE_ERROR_TITLE: &str = "Update Error";
