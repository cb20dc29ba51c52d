use iced::Length;
use navrail_ui_routes::RouteDescriptor;

use super::state::NavState;
use crate::theme::ColorMode;

/// Width of the sidebar panel while open.
pub(crate) const SIDEBAR_OPEN_WIDTH: f32 = 240.0;

/// Inputs owned outside the sidebar and read at render time.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarInputs<'a> {
    pub(crate) open: bool,
    pub(crate) color_mode: ColorMode,
    pub(crate) current_path: &'a str,
    pub(crate) version: &'a str,
    pub(crate) owner: &'a str,
    pub(crate) year: i32,
}

/// Render state for one nav item.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavItemViewModel<'a> {
    pub(crate) index: usize,
    pub(crate) route: &'a RouteDescriptor,
    pub(crate) is_active: bool,
    pub(crate) is_hovered: bool,
    pub(crate) is_expanded: bool,
}

/// Read-only sidebar snapshot for the presentation layer.
#[derive(Debug, Clone)]
pub(crate) struct SidebarViewModel<'a> {
    pub(crate) open: bool,
    pub(crate) color_mode: ColorMode,
    pub(crate) current_path: &'a str,
    pub(crate) primary: Vec<NavItemViewModel<'a>>,
    pub(crate) footer: Vec<NavItemViewModel<'a>>,
    pub(crate) tooltips_enabled: bool,
    pub(crate) theme_toggle_tooltip: String,
    pub(crate) drawer_toggle_tooltip: &'static str,
    pub(crate) version_label: String,
    pub(crate) version_tooltip: String,
}

impl<'a> SidebarViewModel<'a> {
    pub(crate) fn build(
        routes: &'a [RouteDescriptor],
        nav: NavState,
        inputs: SidebarInputs<'a>,
    ) -> Self {
        let (primary, footer) = partition_routes(routes);
        let item = move |index: usize| nav_item(routes, nav, index);

        Self {
            open: inputs.open,
            color_mode: inputs.color_mode,
            current_path: inputs.current_path,
            primary: primary.into_iter().map(item).collect(),
            footer: footer.into_iter().map(item).collect(),
            tooltips_enabled: tooltips_enabled(inputs.open),
            theme_toggle_tooltip: theme_toggle_tooltip(inputs.color_mode),
            drawer_toggle_tooltip: drawer_toggle_tooltip(inputs.open),
            version_label: version_label(
                inputs.open,
                inputs.version,
                inputs.year,
                inputs.owner,
            ),
            version_tooltip: full_version_text(
                inputs.version,
                inputs.year,
                inputs.owner,
            ),
        }
    }

    /// Number of nav items across both groups.
    #[cfg(test)]
    pub(crate) fn item_count(&self) -> usize {
        self.primary.len() + self.footer.len()
    }

    /// Width applied to each row: fill while open, icon-sized otherwise.
    pub(crate) fn item_width(&self) -> Length {
        if self.open {
            Length::Fill
        } else {
            Length::Shrink
        }
    }

    pub(crate) fn panel_width(&self) -> Length {
        if self.open {
            Length::Fixed(SIDEBAR_OPEN_WIDTH)
        } else {
            Length::Shrink
        }
    }
}

fn nav_item(
    routes: &[RouteDescriptor],
    nav: NavState,
    index: usize,
) -> NavItemViewModel<'_> {
    NavItemViewModel {
        index,
        route: &routes[index],
        is_active: nav.active == Some(index),
        is_hovered: nav.hovered == Some(index),
        is_expanded: nav.expanded == Some(index),
    }
}

/// Split route indices into `(primary, footer)` by the bottom-nav flag.
pub(crate) fn partition_routes(
    routes: &[RouteDescriptor],
) -> (Vec<usize>, Vec<usize>) {
    (0..routes.len()).partition(|&index| !routes[index].bottom_nav)
}

/// Tooltips are shown only while collapsed.
pub(crate) fn tooltips_enabled(open: bool) -> bool {
    !open
}

pub(crate) fn theme_toggle_tooltip(mode: ColorMode) -> String {
    format!("Switch to {} mode", mode.toggled().label())
}

pub(crate) fn drawer_toggle_tooltip(open: bool) -> &'static str {
    if open {
        "Collapse Sidebar"
    } else {
        "Expand Sidebar"
    }
}

pub(crate) fn full_version_text(
    version: &str,
    year: i32,
    owner: &str,
) -> String {
    format!("v {version} | © {year} {owner}")
}

pub(crate) fn version_label(
    open: bool,
    version: &str,
    year: i32,
    owner: &str,
) -> String {
    if open {
        full_version_text(version, year, owner)
    } else {
        format!("v{version}")
    }
}

#[cfg(test)]
mod tests {
    use iced::Length;
    use navrail_ui_routes::{RouteCatalog, active_route_details};

    use super::{
        SidebarInputs, SidebarViewModel, drawer_toggle_tooltip,
        partition_routes, theme_toggle_tooltip, version_label,
    };
    use crate::theme::ColorMode;
    use crate::widgets::sidebar::state::NavState;

    fn inputs(open: bool) -> SidebarInputs<'static> {
        SidebarInputs {
            open,
            color_mode: ColorMode::Dark,
            current_path: "/",
            version: "1.4.2",
            owner: "Acme Corp",
            year: 2026,
        }
    }

    #[test]
    fn given_catalog_when_partitioned_then_groups_cover_every_route_once() {
        let routes = active_route_details(
            &RouteCatalog::default(),
            &[String::from("admin")],
        );

        let (primary, footer) = partition_routes(&routes);

        assert_eq!(primary, vec![0, 1, 2, 3]);
        assert_eq!(footer, vec![4, 5]);
        assert!(primary.iter().all(|&index| !routes[index].bottom_nav));
        assert!(footer.iter().all(|&index| routes[index].bottom_nav));
        assert_eq!(primary.len() + footer.len(), routes.len());
    }

    #[test]
    fn given_nav_state_when_building_vm_then_flags_follow_indices() {
        let routes = active_route_details(&RouteCatalog::default(), &[]);
        let nav = NavState {
            hovered: Some(1),
            active: Some(2),
            expanded: Some(2),
        };

        let vm = SidebarViewModel::build(&routes, nav, inputs(true));

        assert_eq!(vm.item_count(), routes.len());
        assert!(vm.primary[1].is_hovered);
        assert!(!vm.primary[0].is_hovered);
        assert!(vm.footer[0].is_active);
        assert!(vm.footer[0].is_expanded);
        assert_eq!(vm.footer[0].route.path, "/settings");
    }

    #[test]
    fn given_open_flag_when_building_vm_then_tooltips_and_width_follow() {
        let routes = active_route_details(&RouteCatalog::default(), &[]);
        let nav = NavState::default();

        let open = SidebarViewModel::build(&routes, nav, inputs(true));
        let collapsed = SidebarViewModel::build(&routes, nav, inputs(false));

        assert!(!open.tooltips_enabled);
        assert!(collapsed.tooltips_enabled);
        assert_eq!(open.item_width(), Length::Fill);
        assert_eq!(collapsed.item_width(), Length::Shrink);
    }

    #[test]
    fn given_open_and_collapsed_when_labelling_version_then_formats_differ() {
        assert_eq!(version_label(false, "1.4.2", 2026, "Acme"), "v1.4.2");
        assert_eq!(
            version_label(true, "1.4.2", 2026, "Acme"),
            "v 1.4.2 | © 2026 Acme"
        );
    }

    #[test]
    fn given_color_mode_when_building_tooltip_then_target_mode_is_named() {
        assert_eq!(
            theme_toggle_tooltip(ColorMode::Dark),
            "Switch to light mode"
        );
        assert_eq!(
            theme_toggle_tooltip(ColorMode::Light),
            "Switch to dark mode"
        );
    }

    #[test]
    fn given_open_flag_when_building_drawer_tooltip_then_action_is_named() {
        assert_eq!(drawer_toggle_tooltip(true), "Collapse Sidebar");
        assert_eq!(drawer_toggle_tooltip(false), "Expand Sidebar");
    }
}
