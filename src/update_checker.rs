use std::time::Instant;
use tauri::Manager;
use tauri_plugin_updater::{Update, UpdaterExt};
use tracing::{error, info, warn};

use crate::{
    app_types::{PendingInstall, UpdateEvent, UpdateInfo, UpdatePayload},
    shell_services::{UpdateService, UpdateSource},
    tauri_shell::TauriShell,
    update_notifier, AtomicFlagGuard, ShellError, UpdateState,
};

/// Checks `source` once and, when an update exists, downloads and stages it.
///
/// Events go to `emit` in order: checking, then either not-available, an error, or
/// available followed by download progress and finally downloaded. Any failure ends the
/// run with a single `Error` event.
pub(crate) async fn run_update_flow<S, E>(source: &S, emit: &E)
where
    S: UpdateSource + Sync,
    E: Fn(UpdateEvent) + Sync,
{
    emit(UpdateEvent::CheckingForUpdate);

    let check_started = Instant::now();
    let update = match source.check().await {
        Ok(Some(update)) => update,
        Ok(None) => {
            let current_version = source.current_version();
            info!(
                %current_version,
                elapsed_ms = check_started.elapsed().as_millis() as u64,
                "no update available"
            );
            let payload = serde_json::json!({ "currentVersion": current_version });
            emit(UpdateEvent::UpdateNotAvailable(UpdatePayload::Structured(
                payload,
            )));
            return;
        }
        Err(error) => {
            emit(UpdateEvent::Error(error.to_string()));
            return;
        }
    };

    let info = source.describe(&update);
    emit(UpdateEvent::UpdateAvailable(info.clone()));

    let bytes = match source
        .download(&update, |chunk_length, content_length| {
            emit(UpdateEvent::DownloadProgress {
                chunk_length,
                content_length,
            })
        })
        .await
    {
        Ok(bytes) => bytes,
        Err(error) => {
            emit(UpdateEvent::Error(error.to_string()));
            return;
        }
    };

    if let Err(error) = source.stage_install(update, bytes) {
        emit(UpdateEvent::Error(error.to_string()));
        return;
    }
    emit(UpdateEvent::UpdateDownloaded(info));
}

fn emit(shell: &TauriShell, event: UpdateEvent) {
    if let Err(error) = update_notifier::handle_update_event(&event, shell, shell) {
        error!(event = event.name(), %error, "failed to handle update event");
    }
}

async fn run_update_check(shell: TauriShell) {
    let Some(state) = shell.app.try_state::<UpdateState>() else {
        warn!("update state is not managed, skipping update check");
        return;
    };
    let Some(_check_guard) = AtomicFlagGuard::try_set(&state.check_in_flight) else {
        info!("update check already in progress");
        return;
    };

    run_update_flow(&shell, &|event| emit(&shell, event)).await;
}

impl UpdateSource for TauriShell {
    type Update = Update;

    fn current_version(&self) -> String {
        self.app.package_info().version.to_string()
    }

    fn describe(&self, update: &Update) -> UpdateInfo {
        UpdateInfo {
            version: update.version.clone(),
            current_version: update.current_version.clone(),
            date: update.date.map(|date| date.to_string()),
            body: update.body.clone(),
        }
    }

    async fn check(&self) -> Result<Option<Update>, ShellError> {
        let updater = self
            .app
            .updater()
            .map_err(|error| ShellError::Update(error.to_string()))?;
        updater
            .check()
            .await
            .map_err(|error| ShellError::Update(error.to_string()))
    }

    async fn download<F>(&self, update: &Update, on_chunk: F) -> Result<Vec<u8>, ShellError>
    where
        F: FnMut(usize, Option<u64>) + Send,
    {
        update
            .download(on_chunk, || {})
            .await
            .map_err(|error| ShellError::Update(error.to_string()))
    }

    fn stage_install(&self, update: Update, bytes: Vec<u8>) -> Result<(), ShellError> {
        let state = self
            .app
            .try_state::<UpdateState>()
            .ok_or_else(|| ShellError::Update("update state is not managed".to_string()))?;
        let mut pending = state
            .pending_install
            .lock()
            .map_err(|error| ShellError::Update(error.to_string()))?;
        *pending = Some(PendingInstall { update, bytes });
        Ok(())
    }
}

impl UpdateService for TauriShell {
    fn check_for_updates(&self) {
        tauri::async_runtime::spawn(run_update_check(self.clone()));
    }

    fn quit_and_install(&self) -> Result<(), ShellError> {
        let state = self.app.state::<UpdateState>();
        let pending = state
            .pending_install
            .lock()
            .map_err(|error| ShellError::Update(error.to_string()))?
            .take()
            .ok_or(ShellError::NoPendingUpdate)?;

        pending
            .update
            .install(&pending.bytes)
            .map_err(|error| ShellError::Update(error.to_string()))?;
        info!(version = %pending.update.version, "update installed, restarting");
        self.app.restart()
    }
}
