use tracing::{debug, info};

use crate::{
    app_types::{Notification, UpdateEvent, UpdatePayload},
    shell_services::{Notifier, UpdateService},
    ShellError, UPDATE_AVAILABLE_TITLE, UPDATE_CHECKING_MESSAGE, UPDATE_CHECKING_TITLE,
    UPDATE_ERROR_TITLE, UPDATE_NOT_AVAILABLE_TITLE,
};

pub(crate) fn render_payload(payload: &UpdatePayload) -> Result<String, ShellError> {
    match payload {
        UpdatePayload::Text(text) => Ok(text.clone()),
        UpdatePayload::Structured(value) => Ok(serde_json::to_string_pretty(value)?),
    }
}

/// Turns one update-checker event into the matching user-visible effect.
pub(crate) fn handle_update_event<N, U>(
    event: &UpdateEvent,
    notifier: &N,
    updates: &U,
) -> Result<(), ShellError>
where
    N: Notifier,
    U: UpdateService,
{
    match event {
        UpdateEvent::CheckingForUpdate => {
            info!("checking for updates");
            notifier.notify(Notification::info(
                UPDATE_CHECKING_TITLE,
                UPDATE_CHECKING_MESSAGE,
            ))
        }
        UpdateEvent::UpdateAvailable(update) => {
            info!(version = %update.version, current = %update.current_version, "update available");
            notifier.notify(Notification::info(
                UPDATE_AVAILABLE_TITLE,
                format!(
                    "Version {} is available (current version {}). It will be downloaded in the background.",
                    update.version, update.current_version
                ),
            ))
        }
        UpdateEvent::UpdateNotAvailable(payload) => {
            info!(?payload, "update not available");
            let message = render_payload(payload)?;
            notifier.notify(Notification::info(UPDATE_NOT_AVAILABLE_TITLE, message))
        }
        UpdateEvent::Error(detail) => {
            info!(error = %detail, "update check failed");
            notifier.notify(Notification::error(UPDATE_ERROR_TITLE, detail.clone()))
        }
        UpdateEvent::DownloadProgress {
            chunk_length,
            content_length,
        } => {
            debug!(chunk_length, ?content_length, "update download progress");
            Ok(())
        }
        UpdateEvent::UpdateDownloaded(update) => {
            info!(version = %update.version, "update downloaded, installing");
            updates.quit_and_install()
        }
    }
}
