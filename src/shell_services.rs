//! Capabilities the shell needs from the toolkit and the update service.
//!
//! The lifecycle controller and the update notifier only talk to these traits, so each
//! handler can be driven with fakes in tests while `TauriShell` provides the real thing.

use std::future::Future;

use crate::{
    app_types::{Notification, UpdateInfo},
    dev_tooling::DevExtension,
    ShellError, WindowOptions,
};

pub(crate) trait WindowManager {
    type Handle: Clone;

    fn create_window(&self, options: &WindowOptions) -> Result<Self::Handle, ShellError>;
    fn load_content(&self, window: &Self::Handle, url: &str) -> Result<(), ShellError>;
    fn show(&self, window: &Self::Handle) -> Result<(), ShellError>;
    fn focus(&self, window: &Self::Handle) -> Result<(), ShellError>;
    fn close_window(&self, window: &Self::Handle) -> Result<(), ShellError>;
}

pub(crate) trait MenuService<H> {
    fn build_menu(&self, window: &H) -> Result<(), ShellError>;
}

pub(crate) trait UpdateService {
    /// Starts a check in the background; progress arrives as update events.
    fn check_for_updates(&self);
    fn quit_and_install(&self) -> Result<(), ShellError>;
}

/// Where updates come from: one check, one download, then the bytes are staged for
/// quit-and-install.
pub(crate) trait UpdateSource {
    type Update: Send + Sync;

    fn current_version(&self) -> String;
    fn describe(&self, update: &Self::Update) -> UpdateInfo;
    fn check(&self) -> impl Future<Output = Result<Option<Self::Update>, ShellError>> + Send;
    fn download<F>(
        &self,
        update: &Self::Update,
        on_chunk: F,
    ) -> impl Future<Output = Result<Vec<u8>, ShellError>> + Send
    where
        F: FnMut(usize, Option<u64>) + Send;
    fn stage_install(&self, update: Self::Update, bytes: Vec<u8>) -> Result<(), ShellError>;
}

pub(crate) trait Notifier {
    fn notify(&self, notification: Notification) -> Result<(), ShellError>;
}

pub(crate) trait DevToolingInstaller {
    fn install_extensions(
        &self,
        extensions: &[DevExtension],
        force_download: bool,
    ) -> impl Future<Output = Result<Vec<String>, ShellError>> + Send;
}

pub(crate) trait ProcessControl {
    fn quit(&self);
}
