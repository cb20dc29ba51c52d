pub(crate) mod footer;
pub(crate) mod nav_item;

use iced::widget::{Column, Space, column, container};
use iced::{Element, Length};

use self::footer::FooterProps;
use self::nav_item::NavItemProps;
use super::event::SidebarIntent;
use super::model::SidebarViewModel;
use crate::theme::ThemeProps;

const SIDEBAR_PADDING: f32 = 8.0;
const NAV_SPACING: f32 = 8.0;

/// Props for the sidebar view aggregator.
#[derive(Debug, Clone)]
pub(crate) struct SidebarViewProps<'a> {
    pub(crate) vm: SidebarViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the sidebar panel: primary routes on top, footer cluster pinned to
/// the bottom.
pub(crate) fn view(
    props: SidebarViewProps<'_>,
) -> Element<'_, SidebarIntent> {
    let SidebarViewProps { vm, theme } = props;
    let item_width = vm.item_width();
    let panel_width = vm.panel_width();
    let open = vm.open;
    let tooltips_enabled = vm.tooltips_enabled;
    let current_path = vm.current_path;
    let background = theme.theme.iced_palette().background_secondary;

    let primary =
        Column::with_children(vm.primary.into_iter().map(move |item| {
            nav_item::view(NavItemProps {
                item,
                open,
                width: item_width,
                tooltips_enabled,
                current_path,
                theme,
            })
        }))
        .spacing(NAV_SPACING)
        .width(item_width);

    let footer = footer::view(FooterProps {
        items: vm.footer,
        open,
        width: item_width,
        tooltips_enabled,
        current_path,
        color_mode: vm.color_mode,
        theme_toggle_tooltip: vm.theme_toggle_tooltip,
        drawer_toggle_tooltip: vm.drawer_toggle_tooltip,
        version_label: vm.version_label,
        version_tooltip: vm.version_tooltip,
        theme,
    });

    let content = column![primary, Space::new().height(Length::Fill), footer]
        .width(item_width)
        .height(Length::Fill);

    container(content)
        .padding(SIDEBAR_PADDING)
        .width(panel_width)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(background.into()),
            ..container::Style::default()
        })
        .into()
}
