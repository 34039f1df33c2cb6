use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum ShellError {
    #[error("main window is not available")]
    MissingMainWindow,
    #[error("ready signal was already handled")]
    AlreadyReady,
    #[error("failed to {action} main window: {reason}")]
    Window {
        action: &'static str,
        reason: String,
    },
    #[error("failed to build menu: {0}")]
    Menu(String),
    #[error("failed to show notification: {0}")]
    Dialog(String),
    #[error("failed to install developer extensions: {0}")]
    DevExtensions(String),
    #[error("update failed: {0}")]
    Update(String),
    #[error("no downloaded update is waiting to be installed")]
    NoPendingUpdate,
    #[error("failed to render update payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("failed to dispatch '{label}' to main thread: {reason}")]
    Dispatch { label: &'static str, reason: String },
}

impl ShellError {
    pub(crate) fn window(action: &'static str, error: impl std::fmt::Display) -> Self {
        Self::Window {
            action,
            reason: error.to_string(),
        }
    }

    /// Whether the shell must stop after this error instead of logging and continuing.
    pub(crate) fn is_fatal(&self) -> bool {
        matches!(self, Self::MissingMainWindow)
    }
}
