use tauri::{
    menu::{IsMenuItem, Menu, MenuItem, PredefinedMenuItem, Submenu},
    AppHandle, Manager, WebviewWindow, Wry,
};
use tracing::debug;

use crate::{
    menu_actions, runtime_config::ShellConfig, shell_services::MenuService,
    tauri_shell::TauriShell, Platform, ShellError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MenuEntry {
    Item {
        id: &'static str,
        label: &'static str,
        accelerator: Option<&'static str>,
    },
    Separator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MenuSection {
    pub(crate) title: &'static str,
    pub(crate) entries: Vec<MenuEntry>,
}

fn item(id: &'static str, label: &'static str, accelerator: Option<&'static str>) -> MenuEntry {
    MenuEntry::Item {
        id,
        label,
        accelerator,
    }
}

pub(crate) fn menu_layout(dev_tooling_enabled: bool) -> Vec<MenuSection> {
    let mut view_entries = vec![
        item(menu_actions::MENU_RELOAD, "Reload", Some("CmdOrCtrl+R")),
        item(
            menu_actions::MENU_TOGGLE_FULLSCREEN,
            "Toggle Full Screen",
            Some("F11"),
        ),
    ];
    if dev_tooling_enabled {
        view_entries.push(MenuEntry::Separator);
        view_entries.push(item(
            menu_actions::MENU_TOGGLE_DEVTOOLS,
            "Toggle Developer Tools",
            Some("Alt+CmdOrCtrl+I"),
        ));
    }

    vec![
        MenuSection {
            title: "File",
            entries: vec![
                item(
                    menu_actions::MENU_CLOSE_WINDOW,
                    "Close Window",
                    Some("CmdOrCtrl+W"),
                ),
                MenuEntry::Separator,
                item(menu_actions::MENU_QUIT, "Quit", Some("CmdOrCtrl+Q")),
            ],
        },
        MenuSection {
            title: "View",
            entries: view_entries,
        },
        MenuSection {
            title: "Help",
            entries: vec![item(
                menu_actions::MENU_CHECK_FOR_UPDATES,
                "Check for Updates...",
                None,
            )],
        },
    ]
}

fn build_submenu(app_handle: &AppHandle, section: &MenuSection) -> tauri::Result<Submenu<Wry>> {
    let submenu = Submenu::new(app_handle, section.title, true)?;
    for entry in &section.entries {
        match entry {
            MenuEntry::Item {
                id,
                label,
                accelerator,
            } => {
                let item = MenuItem::with_id(app_handle, *id, *label, true, *accelerator)?;
                submenu.append(&item)?;
            }
            MenuEntry::Separator => {
                submenu.append(&PredefinedMenuItem::separator(app_handle)?)?;
            }
        }
    }
    Ok(submenu)
}

pub(crate) fn build_menu(app_handle: &AppHandle, dev_tooling_enabled: bool) -> tauri::Result<Menu<Wry>> {
    let submenus = menu_layout(dev_tooling_enabled)
        .iter()
        .map(|section| build_submenu(app_handle, section))
        .collect::<tauri::Result<Vec<_>>>()?;
    let items: Vec<&dyn IsMenuItem<Wry>> = submenus
        .iter()
        .map(|submenu| submenu as &dyn IsMenuItem<Wry>)
        .collect();
    Menu::with_items(app_handle, &items)
}

impl MenuService<WebviewWindow> for TauriShell {
    fn build_menu(&self, window: &WebviewWindow) -> Result<(), ShellError> {
        let dev_tooling_enabled = self
            .app
            .try_state::<ShellConfig>()
            .map(|config| config.dev_tooling_enabled())
            .unwrap_or(false);
        let menu = build_menu(&self.app, dev_tooling_enabled)
            .map_err(|error| ShellError::Menu(error.to_string()))?;

        // macOS menus belong to the application, everywhere else to the window.
        let attached = if Platform::current() == Platform::MacOs {
            self.app.set_menu(menu)
        } else {
            window.set_menu(menu)
        };
        attached.map_err(|error| ShellError::Menu(error.to_string()))?;
        debug!(dev_tooling_enabled, "menu attached");
        Ok(())
    }
}
