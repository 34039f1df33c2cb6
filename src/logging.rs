use std::{
    fs::{self, File, OpenOptions},
    path::{Path, PathBuf},
    str::FromStr,
    sync::Mutex,
};
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

use crate::{runtime_config::ShellConfig, RuntimeMode, APP_DIR_NAME, DESKTOP_LOG_FILE};

pub(crate) fn resolve_desktop_log_path(data_dir: &Path, file_name: &str) -> PathBuf {
    data_dir.join(APP_DIR_NAME).join("logs").join(file_name)
}

pub(crate) fn resolve_log_level(config: &ShellConfig) -> Level {
    if let Some(level) = config
        .log_level
        .as_deref()
        .and_then(|raw| Level::from_str(raw.trim()).ok())
    {
        return level;
    }
    match config.mode {
        RuntimeMode::Development => Level::DEBUG,
        RuntimeMode::Production => Level::INFO,
    }
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Installs the global subscriber, writing to stderr and, when the data directory is
/// writable, to the desktop log file. Returns the log file path in use.
pub(crate) fn init_logging(config: &ShellConfig) -> Option<PathBuf> {
    let level = resolve_log_level(config);
    let log_path = dirs::data_local_dir()
        .map(|data_dir| resolve_desktop_log_path(&data_dir, DESKTOP_LOG_FILE));
    let log_file = log_path.as_deref().and_then(|path| match open_log_file(path) {
        Ok(file) => Some(file),
        Err(error) => {
            eprintln!("desktop log {} unavailable: {error}", path.display());
            None
        }
    });

    let builder = tracing_subscriber::fmt().with_max_level(level);
    let (initialized, log_path) = match log_file {
        Some(file) => (
            builder
                .with_ansi(false)
                .with_writer(std::io::stderr.and(Mutex::new(file)))
                .try_init(),
            log_path,
        ),
        None => (builder.with_writer(std::io::stderr).try_init(), None),
    };
    if let Err(error) = initialized {
        eprintln!("failed to initialize logging: {error}");
    }
    log_path
}
