use tauri::{Manager, Wry};
use tauri_plugin_dialog::{Dialog, DialogExt, MessageDialogKind};

use crate::{
    app_types::{Notification, NotificationKind},
    shell_services::Notifier,
    tauri_shell::TauriShell,
    ShellError,
};

fn dialog_kind(kind: NotificationKind) -> MessageDialogKind {
    match kind {
        NotificationKind::Info => MessageDialogKind::Info,
        NotificationKind::Error => MessageDialogKind::Error,
    }
}

impl Notifier for TauriShell {
    fn notify(&self, notification: Notification) -> Result<(), ShellError> {
        if self.app.try_state::<Dialog<Wry>>().is_none() {
            return Err(ShellError::Dialog(
                "dialog plugin is not initialized".to_string(),
            ));
        }

        let mut dialog = self
            .app
            .dialog()
            .message(notification.message)
            .title(notification.title)
            .kind(dialog_kind(notification.kind));
        if let Some(window) = crate::window_actions::current_main_window(&self.app) {
            dialog = dialog.parent(&window);
        }
        dialog.show(|_| {});
        Ok(())
    }
}
