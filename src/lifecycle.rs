use tracing::{debug, info, warn};

use crate::{
    dev_tooling::DevExtension,
    runtime_config::ShellConfig,
    shell_services::{DevToolingInstaller, MenuService, ProcessControl, UpdateService, WindowManager},
    Platform, ShellError, WindowOptions, WindowPhase,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WindowlessAction {
    Quit,
    StayResident,
}

/// Owns the single main window handle and drives it through
/// `Uninitialized -> HiddenLoading -> Visible -> Closed`.
#[derive(Debug)]
pub(crate) struct LifecycleController<H> {
    main_window: Option<H>,
    phase: WindowPhase,
    show_pending: bool,
    ready_handled: bool,
}

impl<H> Default for LifecycleController<H> {
    fn default() -> Self {
        Self {
            main_window: None,
            phase: WindowPhase::Uninitialized,
            show_pending: false,
            ready_handled: false,
        }
    }
}

impl<H: Clone> LifecycleController<H> {
    pub(crate) fn main_window(&self) -> Option<&H> {
        self.main_window.as_ref()
    }

    pub(crate) fn phase(&self) -> WindowPhase {
        self.phase
    }

    pub(crate) fn on_window_all_closed<P: ProcessControl>(
        &self,
        platform: Platform,
        process: &P,
    ) -> WindowlessAction {
        if platform.quits_when_windowless() {
            info!("all windows closed, quitting");
            process.quit();
            WindowlessAction::Quit
        } else {
            info!("all windows closed, staying resident");
            WindowlessAction::StayResident
        }
    }

    /// Claims the one-time ready signal.
    pub(crate) fn begin_ready(&mut self) -> Result<(), ShellError> {
        if self.ready_handled {
            return Err(ShellError::AlreadyReady);
        }
        self.ready_handled = true;
        Ok(())
    }

    /// Creates the hidden main window, starts loading its content, arms the deferred show,
    /// and hands the window to the menu service.
    ///
    /// A window whose content cannot be loaded is closed again and never recorded, so the
    /// controller stays `Uninitialized` and a later attempt can open a fresh one.
    pub(crate) fn open_main_window<W, M>(
        &mut self,
        windows: &W,
        menus: &M,
        content_url: &str,
    ) -> Result<(), ShellError>
    where
        W: WindowManager<Handle = H>,
        M: MenuService<H>,
    {
        if self.main_window.is_some() {
            return Err(ShellError::window("create", "main window already exists"));
        }

        let window = windows.create_window(&WindowOptions::main_window())?;
        if let Err(error) = windows.load_content(&window, content_url) {
            if let Err(close_error) = windows.close_window(&window) {
                warn!(error = %close_error, "failed to discard main window after load failure");
            }
            return Err(error);
        }

        self.main_window = Some(window.clone());
        self.phase = WindowPhase::HiddenLoading;
        self.show_pending = true;
        debug!(content_url, "main window created hidden, waiting for content");

        menus.build_menu(&window)
    }

    /// Content finished loading. Shows and focuses the window the first time only;
    /// returns whether it was shown.
    pub(crate) fn on_content_loaded<W>(&mut self, windows: &W) -> Result<bool, ShellError>
    where
        W: WindowManager<Handle = H>,
    {
        if !self.show_pending {
            return Ok(false);
        }
        self.show_pending = false;

        let Some(window) = self.main_window.as_ref() else {
            return Err(ShellError::MissingMainWindow);
        };
        windows.show(window)?;
        windows.focus(window)?;
        self.phase = WindowPhase::Visible;
        Ok(true)
    }

    pub(crate) fn on_closed(&mut self) {
        self.main_window = None;
        self.phase = WindowPhase::Closed;
    }
}

/// The asynchronous half of the ready sequence: fire the update check, then install
/// developer extensions when dev tooling is on. Extension failures never stop startup.
pub(crate) async fn prepare_ready<U, D>(updates: &U, installer: &D, config: &ShellConfig)
where
    U: UpdateService,
    D: DevToolingInstaller,
{
    updates.check_for_updates();

    if !config.dev_tooling_enabled() {
        return;
    }
    match installer
        .install_extensions(DevExtension::ALL, config.upgrade_extensions)
        .await
    {
        Ok(installed) => info!(?installed, "developer extensions installed"),
        Err(error) => warn!(%error, "developer extensions unavailable"),
    }
}
