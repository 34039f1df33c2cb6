use std::env;

use crate::{
    APP_CONTENT_PATH, CONTENT_URL_ENV, DEBUG_PROD_ENV, LOG_LEVEL_ENV, SHELL_ENV_ENV,
    UPGRADE_EXTENSIONS_ENV,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RuntimeMode {
    Development,
    Production,
}

impl RuntimeMode {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    fn build_default() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ShellConfig {
    pub(crate) mode: RuntimeMode,
    pub(crate) debug_prod: bool,
    pub(crate) upgrade_extensions: bool,
    pub(crate) content_url: Option<String>,
    pub(crate) log_level: Option<String>,
}

impl ShellConfig {
    pub(crate) fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mode = non_empty(SHELL_ENV_ENV)
            .and_then(|value| RuntimeMode::parse(&value))
            .unwrap_or_else(RuntimeMode::build_default);

        Self {
            mode,
            debug_prod: non_empty(DEBUG_PROD_ENV).is_some_and(|value| value == "true"),
            upgrade_extensions: non_empty(UPGRADE_EXTENSIONS_ENV).is_some(),
            content_url: non_empty(CONTENT_URL_ENV),
            log_level: non_empty(LOG_LEVEL_ENV),
        }
    }

    pub(crate) fn dev_tooling_enabled(&self) -> bool {
        self.mode == RuntimeMode::Development || self.debug_prod
    }

    /// Resolves the URL the main window loads its content from.
    ///
    /// An explicit override wins; development builds served by a dev server use its URL;
    /// everything else loads the bundled assets through the platform's app origin.
    pub(crate) fn content_url(&self, dev_url: Option<&url::Url>) -> String {
        if let Some(url) = &self.content_url {
            return url.clone();
        }
        if self.mode == RuntimeMode::Development {
            if let Some(dev_url) = dev_url {
                return dev_url.to_string();
            }
        }

        let origin = if cfg!(any(target_os = "windows", target_os = "android")) {
            "http://tauri.localhost"
        } else {
            "tauri://localhost"
        };
        format!("{origin}/{APP_CONTENT_PATH}")
    }
}
