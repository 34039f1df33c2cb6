pub(crate) const MENU_CLOSE_WINDOW: &str = "menu_close_window";
pub(crate) const MENU_QUIT: &str = "menu_quit";
pub(crate) const MENU_RELOAD: &str = "menu_reload";
pub(crate) const MENU_TOGGLE_FULLSCREEN: &str = "menu_toggle_fullscreen";
pub(crate) const MENU_TOGGLE_DEVTOOLS: &str = "menu_toggle_devtools";
pub(crate) const MENU_CHECK_FOR_UPDATES: &str = "menu_check_for_updates";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuAction {
    CloseWindow,
    Quit,
    Reload,
    ToggleFullscreen,
    ToggleDevtools,
    CheckForUpdates,
}

pub(crate) fn action_from_menu_id(menu_id: &str) -> Option<MenuAction> {
    match menu_id {
        MENU_CLOSE_WINDOW => Some(MenuAction::CloseWindow),
        MENU_QUIT => Some(MenuAction::Quit),
        MENU_RELOAD => Some(MenuAction::Reload),
        MENU_TOGGLE_FULLSCREEN => Some(MenuAction::ToggleFullscreen),
        MENU_TOGGLE_DEVTOOLS => Some(MenuAction::ToggleDevtools),
        MENU_CHECK_FOR_UPDATES => Some(MenuAction::CheckForUpdates),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_from_menu_id_maps_all_known_actions() {
        assert_eq!(
            action_from_menu_id(MENU_CLOSE_WINDOW),
            Some(MenuAction::CloseWindow)
        );
        assert_eq!(action_from_menu_id(MENU_QUIT), Some(MenuAction::Quit));
        assert_eq!(action_from_menu_id(MENU_RELOAD), Some(MenuAction::Reload));
        assert_eq!(
            action_from_menu_id(MENU_TOGGLE_FULLSCREEN),
            Some(MenuAction::ToggleFullscreen)
        );
        assert_eq!(
            action_from_menu_id(MENU_TOGGLE_DEVTOOLS),
            Some(MenuAction::ToggleDevtools)
        );
        assert_eq!(
            action_from_menu_id(MENU_CHECK_FOR_UPDATES),
            Some(MenuAction::CheckForUpdates)
        );
    }

    #[test]
    fn action_from_menu_id_returns_none_for_unknown_menu_id() {
        assert_eq!(action_from_menu_id("unknown-menu"), None);
    }
}
