use serde::Deserialize;
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::atomic::Ordering,
};
use tauri::Manager;
use tracing::{debug, info, warn};

use crate::{
    shell_services::DevToolingInstaller, tauri_shell::TauriShell, DevToolsState, ShellError,
    DEV_EXTENSIONS_DIR, DEV_EXTENSIONS_INSTALL_DIR, DEV_EXTENSIONS_STATE_FILE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DevExtension {
    ReactDeveloperTools,
    ReduxDevtools,
}

impl DevExtension {
    pub(crate) const ALL: &'static [DevExtension] =
        &[DevExtension::ReactDeveloperTools, DevExtension::ReduxDevtools];

    pub(crate) fn id(self) -> &'static str {
        match self {
            Self::ReactDeveloperTools => "react-developer-tools",
            Self::ReduxDevtools => "redux-devtools",
        }
    }
}

#[derive(Debug, Deserialize)]
struct ExtensionManifest {
    version: String,
}

type InstalledVersions = BTreeMap<String, String>;

/// The directory the webview loads unpacked extensions from.
pub(crate) fn installed_extensions_dir(extensions_root: &Path) -> PathBuf {
    extensions_root.join(DEV_EXTENSIONS_INSTALL_DIR)
}

fn read_installed_versions(state_path: &Path) -> InstalledVersions {
    let Ok(raw) = fs::read_to_string(state_path) else {
        return InstalledVersions::new();
    };
    serde_json::from_str(&raw).unwrap_or_else(|error| {
        warn!(path = %state_path.display(), %error, "resetting malformed extension state");
        InstalledVersions::new()
    })
}

fn read_manifest_version(extension_dir: &Path) -> Result<String, String> {
    let manifest_path = extension_dir.join("manifest.json");
    let raw = fs::read_to_string(&manifest_path)
        .map_err(|error| format!("cannot read {}: {error}", manifest_path.display()))?;
    let manifest: ExtensionManifest = serde_json::from_str(&raw)
        .map_err(|error| format!("invalid {}: {error}", manifest_path.display()))?;
    Ok(manifest.version)
}

fn copy_dir_recursive(source: &Path, target: &Path) -> Result<(), String> {
    fs::create_dir_all(target)
        .map_err(|error| format!("cannot create {}: {error}", target.display()))?;

    let entries = fs::read_dir(source)
        .map_err(|error| format!("cannot read {}: {error}", source.display()))?;
    for entry in entries {
        let entry = entry.map_err(|error| format!("cannot read entry: {error}"))?;
        let path = entry.path();
        let target_path = target.join(entry.file_name());
        if path.is_dir() {
            copy_dir_recursive(&path, &target_path)?;
        } else {
            fs::copy(&path, &target_path)
                .map_err(|error| format!("cannot copy {}: {error}", path.display()))?;
        }
    }
    Ok(())
}

fn replace_installed_copy(source: &Path, target: &Path) -> Result<(), String> {
    if target.exists() {
        fs::remove_dir_all(target)
            .map_err(|error| format!("cannot remove {}: {error}", target.display()))?;
    }
    copy_dir_recursive(source, target)
}

/// Installs the unpacked extensions found under `extensions_root/<id>` into the webview's
/// extension directory, recording their versions in the state file.
///
/// An installed copy whose recorded version matches the manifest is left alone unless
/// `force_download` is set, in which case it is replaced from the source directory.
/// Every extension is attempted; failures are reported together.
pub(crate) fn install_from_dir(
    extensions_root: &Path,
    extensions: &[DevExtension],
    force_download: bool,
) -> Result<Vec<String>, ShellError> {
    let state_path = extensions_root.join(DEV_EXTENSIONS_STATE_FILE);
    let install_dir = installed_extensions_dir(extensions_root);
    let mut installed_versions = read_installed_versions(&state_path);
    let mut installed = Vec::new();
    let mut failures = Vec::new();

    for extension in extensions {
        let source = extensions_root.join(extension.id());
        let target = install_dir.join(extension.id());
        let version = match read_manifest_version(&source) {
            Ok(version) => version,
            Err(reason) => {
                failures.push(format!("{}: {reason}", extension.id()));
                continue;
            }
        };

        let up_to_date =
            installed_versions.get(extension.id()) == Some(&version) && target.is_dir();
        if up_to_date && !force_download {
            debug!(extension = extension.id(), %version, "extension already installed");
        } else {
            if let Err(reason) = replace_installed_copy(&source, &target) {
                failures.push(format!("{}: {reason}", extension.id()));
                continue;
            }
            info!(extension = extension.id(), %version, forced = force_download, "extension installed");
            installed_versions.insert(extension.id().to_string(), version.clone());
        }
        installed.push(format!("{}@{version}", extension.id()));
    }

    fs::create_dir_all(extensions_root).map_err(|error| {
        ShellError::DevExtensions(format!(
            "cannot create {}: {error}",
            extensions_root.display()
        ))
    })?;
    let serialized = serde_json::to_string_pretty(&installed_versions)?;
    fs::write(&state_path, serialized).map_err(|error| {
        ShellError::DevExtensions(format!("cannot write {}: {error}", state_path.display()))
    })?;

    if failures.is_empty() {
        Ok(installed)
    } else {
        Err(ShellError::DevExtensions(failures.join("; ")))
    }
}

impl TauriShell {
    fn extensions_root(&self) -> Result<PathBuf, ShellError> {
        self.app
            .path()
            .app_local_data_dir()
            .map(|dir| dir.join(DEV_EXTENSIONS_DIR))
            .map_err(|error| ShellError::DevExtensions(error.to_string()))
    }
}

impl DevToolingInstaller for TauriShell {
    async fn install_extensions(
        &self,
        extensions: &[DevExtension],
        force_download: bool,
    ) -> Result<Vec<String>, ShellError> {
        let state = self.app.try_state::<DevToolsState>();
        if let Some(state) = &state {
            state.open_on_show.store(true, Ordering::Relaxed);
        }

        let extensions_root = self.extensions_root()?;
        let install_root = extensions_root.clone();
        let extensions = extensions.to_vec();
        let result = tauri::async_runtime::spawn_blocking(move || {
            install_from_dir(&install_root, &extensions, force_download)
        })
        .await
        .map_err(|error| ShellError::DevExtensions(error.to_string()))?;

        // Extensions that did install are still loaded when another one failed.
        let install_dir = installed_extensions_dir(&extensions_root);
        if let Some(state) = &state {
            if install_dir.is_dir() {
                state.set_extensions_dir(install_dir);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_manifest(root: &Path, extension: DevExtension, version: &str) {
        let dir = root.join(extension.id());
        fs::create_dir_all(&dir).expect("create extension dir");
        fs::write(
            dir.join("manifest.json"),
            format!(r#"{{"name":"{}","version":"{version}"}}"#, extension.id()),
        )
        .expect("write manifest");
        fs::write(dir.join("panel.js"), "// panel").expect("write script");
    }

    fn recorded(root: &Path) -> InstalledVersions {
        read_installed_versions(&root.join(DEV_EXTENSIONS_STATE_FILE))
    }

    fn installed_file(root: &Path, extension: DevExtension, file: &str) -> PathBuf {
        installed_extensions_dir(root).join(extension.id()).join(file)
    }

    #[test]
    fn installs_all_present_extensions_into_the_webview_dir() {
        let root = tempfile::tempdir().expect("tempdir");
        write_manifest(root.path(), DevExtension::ReactDeveloperTools, "5.3.1");
        write_manifest(root.path(), DevExtension::ReduxDevtools, "3.1.6");

        let installed =
            install_from_dir(root.path(), DevExtension::ALL, false).expect("install succeeds");

        assert_eq!(
            installed,
            vec!["react-developer-tools@5.3.1", "redux-devtools@3.1.6"]
        );
        let versions = recorded(root.path());
        assert_eq!(versions["react-developer-tools"], "5.3.1");
        assert_eq!(versions["redux-devtools"], "3.1.6");
        for extension in DevExtension::ALL {
            assert!(installed_file(root.path(), *extension, "manifest.json").is_file());
            assert!(installed_file(root.path(), *extension, "panel.js").is_file());
        }
    }

    #[test]
    fn missing_extension_is_reported_without_dropping_the_others() {
        let root = tempfile::tempdir().expect("tempdir");
        write_manifest(root.path(), DevExtension::ReduxDevtools, "3.1.6");

        let error = install_from_dir(root.path(), DevExtension::ALL, false)
            .expect_err("react devtools is missing");

        assert!(error.to_string().contains("react-developer-tools"));
        assert_eq!(recorded(root.path())["redux-devtools"], "3.1.6");
        assert!(installed_file(root.path(), DevExtension::ReduxDevtools, "panel.js").is_file());
    }

    #[test]
    fn unchanged_version_keeps_the_installed_copy_unless_forced() {
        let root = tempfile::tempdir().expect("tempdir");
        write_manifest(root.path(), DevExtension::ReduxDevtools, "3.1.6");
        install_from_dir(root.path(), &[DevExtension::ReduxDevtools], false).expect("first");

        let script = installed_file(root.path(), DevExtension::ReduxDevtools, "panel.js");
        fs::remove_file(&script).expect("damage installed copy");

        install_from_dir(root.path(), &[DevExtension::ReduxDevtools], false).expect("again");
        assert!(!script.exists(), "same version must not be copied again");

        install_from_dir(root.path(), &[DevExtension::ReduxDevtools], true).expect("forced");
        assert!(script.is_file(), "forced install must replace the copy");
        assert_eq!(recorded(root.path())["redux-devtools"], "3.1.6");
    }

    #[test]
    fn new_version_replaces_the_installed_copy() {
        let root = tempfile::tempdir().expect("tempdir");
        write_manifest(root.path(), DevExtension::ReduxDevtools, "3.1.6");
        install_from_dir(root.path(), &[DevExtension::ReduxDevtools], false).expect("first");

        write_manifest(root.path(), DevExtension::ReduxDevtools, "3.2.0");
        fs::write(
            root.path().join("redux-devtools").join("options.html"),
            "<html></html>",
        )
        .expect("write new file");
        install_from_dir(root.path(), &[DevExtension::ReduxDevtools], false).expect("upgrade");

        assert_eq!(recorded(root.path())["redux-devtools"], "3.2.0");
        assert!(installed_file(root.path(), DevExtension::ReduxDevtools, "options.html").is_file());
    }

    #[test]
    fn missing_installed_copy_is_restored_even_when_recorded() {
        let root = tempfile::tempdir().expect("tempdir");
        write_manifest(root.path(), DevExtension::ReactDeveloperTools, "5.3.1");
        install_from_dir(root.path(), &[DevExtension::ReactDeveloperTools], false).expect("first");

        fs::remove_dir_all(installed_extensions_dir(root.path())).expect("remove installed");
        install_from_dir(root.path(), &[DevExtension::ReactDeveloperTools], false)
            .expect("reinstall");

        assert!(
            installed_file(root.path(), DevExtension::ReactDeveloperTools, "manifest.json")
                .is_file()
        );
    }

    #[test]
    fn malformed_state_file_is_reset() {
        let root = tempfile::tempdir().expect("tempdir");
        fs::write(root.path().join(DEV_EXTENSIONS_STATE_FILE), "not json").expect("write");
        write_manifest(root.path(), DevExtension::ReactDeveloperTools, "5.3.1");

        install_from_dir(root.path(), &[DevExtension::ReactDeveloperTools], false)
            .expect("install succeeds");
        assert_eq!(recorded(root.path()).len(), 1);
    }
}
