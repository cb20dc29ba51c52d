use navrail_ui_routes::RouteIcon;

pub(crate) const HOME: &[u8] = include_bytes!("../../assets/svg/home.svg");
pub(crate) const DASHBOARD: &[u8] =
    include_bytes!("../../assets/svg/dashboard.svg");
pub(crate) const REPORTS: &[u8] =
    include_bytes!("../../assets/svg/reports.svg");
pub(crate) const USERS: &[u8] = include_bytes!("../../assets/svg/users.svg");
pub(crate) const SETTINGS: &[u8] =
    include_bytes!("../../assets/svg/settings.svg");
pub(crate) const HELP: &[u8] = include_bytes!("../../assets/svg/help.svg");
pub(crate) const PAGE: &[u8] = include_bytes!("../../assets/svg/page.svg");
pub(crate) const THEME_LIGHT: &[u8] =
    include_bytes!("../../assets/svg/sun.svg");
pub(crate) const THEME_DARK: &[u8] =
    include_bytes!("../../assets/svg/moon.svg");
pub(crate) const SIDEBAR_COLLAPSE: &[u8] =
    include_bytes!("../../assets/svg/chevron-left.svg");
pub(crate) const SIDEBAR_EXPAND: &[u8] =
    include_bytes!("../../assets/svg/chevron-right.svg");
pub(crate) const ITEM_EXPANDED: &[u8] =
    include_bytes!("../../assets/svg/chevron-down.svg");

/// SVG bytes for a route icon.
pub(crate) fn route_icon(icon: RouteIcon) -> &'static [u8] {
    match icon {
        RouteIcon::Home => HOME,
        RouteIcon::Dashboard => DASHBOARD,
        RouteIcon::Reports => REPORTS,
        RouteIcon::Users => USERS,
        RouteIcon::Settings => SETTINGS,
        RouteIcon::Help => HELP,
        RouteIcon::Page => PAGE,
    }
}
