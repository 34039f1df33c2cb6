use serde::Serialize;
use std::{
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex, MutexGuard, PoisonError,
    },
};

use crate::{lifecycle::LifecycleController, MAIN_WINDOW_HEIGHT, MAIN_WINDOW_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Platform {
    MacOs,
    Windows,
    Linux,
    Other,
}

impl Platform {
    pub(crate) fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Other
        }
    }

    /// macOS keeps applications resident after their last window closes.
    pub(crate) fn quits_when_windowless(self) -> bool {
        self != Self::MacOs
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WindowOptions {
    pub(crate) visible: bool,
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl WindowOptions {
    pub(crate) fn main_window() -> Self {
        Self {
            visible: false,
            width: MAIN_WINDOW_WIDTH,
            height: MAIN_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WindowPhase {
    Uninitialized,
    HiddenLoading,
    Visible,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NotificationKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Notification {
    pub(crate) kind: NotificationKind,
    pub(crate) title: String,
    pub(crate) message: String,
}

impl Notification {
    pub(crate) fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub(crate) fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateInfo {
    pub(crate) version: String,
    pub(crate) current_version: String,
    pub(crate) date: Option<String>,
    pub(crate) body: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum UpdatePayload {
    Text(String),
    Structured(serde_json::Value),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum UpdateEvent {
    CheckingForUpdate,
    UpdateAvailable(UpdateInfo),
    UpdateNotAvailable(UpdatePayload),
    Error(String),
    DownloadProgress {
        chunk_length: usize,
        content_length: Option<u64>,
    },
    UpdateDownloaded(UpdateInfo),
}

impl UpdateEvent {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::CheckingForUpdate => "checking-for-update",
            Self::UpdateAvailable(_) => "update-available",
            Self::UpdateNotAvailable(_) => "update-not-available",
            Self::Error(_) => "error",
            Self::DownloadProgress { .. } => "download-progress",
            Self::UpdateDownloaded(_) => "update-downloaded",
        }
    }
}

#[derive(Default)]
pub(crate) struct MainWindowState(pub(crate) Mutex<LifecycleController<tauri::WebviewWindow>>);

impl MainWindowState {
    pub(crate) fn lock(&self) -> MutexGuard<'_, LifecycleController<tauri::WebviewWindow>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Downloaded update bytes retained until quit-and-install.
pub(crate) struct PendingInstall {
    pub(crate) update: tauri_plugin_updater::Update,
    pub(crate) bytes: Vec<u8>,
}

#[derive(Default)]
pub(crate) struct UpdateState {
    pub(crate) check_in_flight: AtomicBool,
    pub(crate) pending_install: Mutex<Option<PendingInstall>>,
}

#[derive(Debug, Default)]
pub(crate) struct DevToolsState {
    pub(crate) open_on_show: AtomicBool,
    extensions_dir: Mutex<Option<PathBuf>>,
}

impl DevToolsState {
    pub(crate) fn set_extensions_dir(&self, dir: PathBuf) {
        *self
            .extensions_dir
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(dir);
    }

    /// Unpacked extensions to load into the main webview, once installed.
    pub(crate) fn extensions_dir(&self) -> Option<PathBuf> {
        self.extensions_dir
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

pub(crate) struct AtomicFlagGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> AtomicFlagGuard<'a> {
    pub(crate) fn try_set(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        Some(Self { flag })
    }
}

impl Drop for AtomicFlagGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;

    #[test]
    fn only_macos_stays_resident_without_windows() {
        assert!(!Platform::MacOs.quits_when_windowless());
        assert!(Platform::Windows.quits_when_windowless());
        assert!(Platform::Linux.quits_when_windowless());
        assert!(Platform::Other.quits_when_windowless());
    }

    #[test]
    fn main_window_options_start_hidden_at_fixed_size() {
        assert_eq!(
            WindowOptions::main_window(),
            WindowOptions {
                visible: false,
                width: 1024.0,
                height: 728.0,
            }
        );
    }

    #[test]
    fn update_info_serializes_in_camel_case() {
        let info = UpdateInfo {
            version: "1.2.0".to_string(),
            current_version: "1.1.0".to_string(),
            date: None,
            body: Some("notes".to_string()),
        };
        let value = serde_json::to_value(&info).expect("update info should serialize");
        assert_eq!(value["currentVersion"], "1.1.0");
        assert_eq!(value["body"], "notes");
        assert!(value["date"].is_null());
    }

    #[test]
    fn dev_tools_state_has_no_extensions_until_installed() {
        let state = DevToolsState::default();
        assert_eq!(state.extensions_dir(), None);

        state.set_extensions_dir(PathBuf::from("/data/devtools-extensions/installed"));
        assert_eq!(
            state.extensions_dir(),
            Some(PathBuf::from("/data/devtools-extensions/installed"))
        );
    }

    #[test]
    fn atomic_flag_guard_try_set_rejects_double_set_until_drop() {
        let flag = AtomicBool::new(false);

        let guard = AtomicFlagGuard::try_set(&flag).expect("first set should succeed");
        assert!(flag.load(Ordering::Relaxed));
        assert!(AtomicFlagGuard::try_set(&flag).is_none());

        drop(guard);
        assert!(!flag.load(Ordering::Relaxed));
        assert!(AtomicFlagGuard::try_set(&flag).is_some());
    }
}
