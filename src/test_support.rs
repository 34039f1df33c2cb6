use std::sync::{
    atomic::{AtomicU32, Ordering},
    Mutex,
};

use crate::{
    app_types::{Notification, UpdateInfo},
    dev_tooling::DevExtension,
    shell_services::{
        DevToolingInstaller, MenuService, Notifier, ProcessControl, UpdateService, UpdateSource,
        WindowManager,
    },
    ShellError, WindowOptions,
};

/// Records every collaborator call in order so tests can assert on sequencing.
#[derive(Default)]
pub(crate) struct FakeShell {
    pub(crate) calls: Mutex<Vec<String>>,
    pub(crate) notifications: Mutex<Vec<Notification>>,
    pub(crate) next_window_id: AtomicU32,
    pub(crate) fail_extensions: bool,
    pub(crate) fail_load: bool,
    pub(crate) fail_menu: bool,
    pub(crate) fail_notify: bool,
}

impl FakeShell {
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub(crate) fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().expect("notifications lock").clone()
    }

    pub(crate) fn count(&self, prefix: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.starts_with(prefix))
            .count()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().expect("calls lock").push(call.into());
    }
}

impl WindowManager for FakeShell {
    type Handle = u32;

    fn create_window(&self, options: &WindowOptions) -> Result<u32, ShellError> {
        let id = self.next_window_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.record(format!(
            "create:{id}:visible={}:{}x{}",
            options.visible, options.width, options.height
        ));
        Ok(id)
    }

    fn load_content(&self, window: &u32, url: &str) -> Result<(), ShellError> {
        self.record(format!("load:{window}:{url}"));
        if self.fail_load {
            return Err(ShellError::window("load content into", "relative URL without a base"));
        }
        Ok(())
    }

    fn show(&self, window: &u32) -> Result<(), ShellError> {
        self.record(format!("show:{window}"));
        Ok(())
    }

    fn focus(&self, window: &u32) -> Result<(), ShellError> {
        self.record(format!("focus:{window}"));
        Ok(())
    }

    fn close_window(&self, window: &u32) -> Result<(), ShellError> {
        self.record(format!("close:{window}"));
        Ok(())
    }
}

impl MenuService<u32> for FakeShell {
    fn build_menu(&self, window: &u32) -> Result<(), ShellError> {
        self.record(format!("menu:{window}"));
        if self.fail_menu {
            return Err(ShellError::Menu("menu rejected".to_string()));
        }
        Ok(())
    }
}

impl UpdateService for FakeShell {
    fn check_for_updates(&self) {
        self.record("check_for_updates");
    }

    fn quit_and_install(&self) -> Result<(), ShellError> {
        self.record("quit_and_install");
        Ok(())
    }
}

impl Notifier for FakeShell {
    fn notify(&self, notification: Notification) -> Result<(), ShellError> {
        self.record(format!("notify:{}", notification.title));
        if self.fail_notify {
            return Err(ShellError::Dialog("no display".to_string()));
        }
        self.notifications
            .lock()
            .expect("notifications lock")
            .push(notification);
        Ok(())
    }
}

impl DevToolingInstaller for FakeShell {
    async fn install_extensions(
        &self,
        extensions: &[DevExtension],
        force_download: bool,
    ) -> Result<Vec<String>, ShellError> {
        self.record(format!(
            "install_extensions:{}:force={force_download}",
            extensions.len()
        ));
        if self.fail_extensions {
            return Err(ShellError::DevExtensions("extension store offline".to_string()));
        }
        Ok(extensions
            .iter()
            .map(|extension| extension.id().to_string())
            .collect())
    }
}

impl ProcessControl for FakeShell {
    fn quit(&self) {
        self.record("quit");
    }
}

/// Serves `available` (if any) and streams `chunks` as download progress.
#[derive(Default)]
pub(crate) struct FakeUpdateSource {
    pub(crate) calls: Mutex<Vec<String>>,
    pub(crate) available: Option<UpdateInfo>,
    pub(crate) chunks: Vec<usize>,
    pub(crate) fail_check: bool,
    pub(crate) fail_download: bool,
    pub(crate) fail_stage: bool,
}

impl FakeUpdateSource {
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().expect("calls lock").push(call.into());
    }
}

impl UpdateSource for FakeUpdateSource {
    type Update = UpdateInfo;

    fn current_version(&self) -> String {
        "1.4.2".to_string()
    }

    fn describe(&self, update: &UpdateInfo) -> UpdateInfo {
        update.clone()
    }

    async fn check(&self) -> Result<Option<UpdateInfo>, ShellError> {
        self.record("check");
        if self.fail_check {
            return Err(ShellError::Update("endpoint unreachable".to_string()));
        }
        Ok(self.available.clone())
    }

    async fn download<F>(&self, update: &UpdateInfo, mut on_chunk: F) -> Result<Vec<u8>, ShellError>
    where
        F: FnMut(usize, Option<u64>) + Send,
    {
        self.record(format!("download:{}", update.version));
        let total: usize = self.chunks.iter().sum();
        for chunk in &self.chunks {
            on_chunk(*chunk, Some(total as u64));
        }
        if self.fail_download {
            return Err(ShellError::Update("connection reset".to_string()));
        }
        Ok(vec![0; total])
    }

    fn stage_install(&self, update: UpdateInfo, bytes: Vec<u8>) -> Result<(), ShellError> {
        if self.fail_stage {
            return Err(ShellError::Update("pending install lock poisoned".to_string()));
        }
        self.record(format!("stage:{}:{}", update.version, bytes.len()));
        Ok(())
    }
}
