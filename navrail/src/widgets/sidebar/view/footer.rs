use iced::widget::{Column, column, container, text};
use iced::{Element, Length, alignment};

use super::nav_item::{self, NavItemProps};
use crate::components::primitive::hint::{self, HintProps};
use crate::components::primitive::icon_button::{self, IconButtonProps};
use crate::icons;
use crate::theme::{ColorMode, ThemeProps};
use crate::widgets::sidebar::event::SidebarIntent;
use crate::widgets::sidebar::model::NavItemViewModel;

const FOOTER_SPACING: f32 = 8.0;
const CONTROL_SIZE: f32 = 36.0;
const THEME_ICON_SIZE: f32 = 18.0;
const DRAWER_ICON_SIZE: f32 = 20.0;
const CONTROLS_INSET: f32 = 2.0;
const VERSION_FONT_SIZE: f32 = 13.0;
const VERSION_PADDING: f32 = 8.0;

/// Props for the footer cluster: bottom routes, toggles and version label.
#[derive(Debug, Clone)]
pub(crate) struct FooterProps<'a> {
    pub(crate) items: Vec<NavItemViewModel<'a>>,
    pub(crate) open: bool,
    pub(crate) width: Length,
    pub(crate) tooltips_enabled: bool,
    pub(crate) current_path: &'a str,
    pub(crate) color_mode: ColorMode,
    pub(crate) theme_toggle_tooltip: String,
    pub(crate) drawer_toggle_tooltip: &'static str,
    pub(crate) version_label: String,
    pub(crate) version_tooltip: String,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the footer, in order: bottom routes, theme toggle, drawer toggle,
/// version label.
pub(crate) fn view(
    props: FooterProps<'_>,
) -> Element<'_, SidebarIntent> {
    let FooterProps {
        items,
        open,
        width,
        tooltips_enabled,
        current_path,
        color_mode,
        theme_toggle_tooltip,
        drawer_toggle_tooltip,
        version_label,
        version_tooltip,
        theme,
    } = props;

    let routes = Column::with_children(items.into_iter().map(move |item| {
        nav_item::view(NavItemProps {
            item,
            open,
            width,
            tooltips_enabled,
            current_path,
            theme,
        })
    }))
    .spacing(FOOTER_SPACING)
    .width(width);

    let theme_toggle = hint::view(
        control(theme_toggle_icon(color_mode), THEME_ICON_SIZE, theme)
            .map(|_| SidebarIntent::ToggleColorMode),
        HintProps {
            label: theme_toggle_tooltip,
            enabled: tooltips_enabled,
            theme,
        },
    );

    let drawer_toggle = hint::view(
        control(drawer_toggle_icon(open), DRAWER_ICON_SIZE, theme)
            .map(|_| SidebarIntent::ToggleDrawer),
        HintProps {
            label: drawer_toggle_tooltip.to_string(),
            enabled: tooltips_enabled,
            theme,
        },
    );

    let version = hint::view(
        version_badge(version_label, width, theme),
        HintProps {
            label: version_tooltip,
            enabled: tooltips_enabled,
            theme,
        },
    );

    let controls = column![theme_toggle, drawer_toggle, version]
        .spacing(FOOTER_SPACING)
        .padding(iced::Padding {
            left: CONTROLS_INSET,
            ..iced::Padding::ZERO
        })
        .width(width);

    column![routes, controls]
        .spacing(FOOTER_SPACING)
        .width(width)
        .into()
}

fn control<'a>(
    icon: &'static [u8],
    icon_size: f32,
    theme: ThemeProps<'a>,
) -> Element<'a, icon_button::IconButtonEvent> {
    icon_button::view(IconButtonProps {
        icon,
        theme,
        size: CONTROL_SIZE,
        icon_size,
    })
}

fn version_badge<'a>(
    label: String,
    width: Length,
    theme: ThemeProps<'a>,
) -> Element<'a, SidebarIntent> {
    let palette = theme.theme.iced_palette();
    let foreground = palette.link;

    container(text(label).size(VERSION_FONT_SIZE).color(foreground))
        .padding(VERSION_PADDING)
        .width(width)
        .align_x(alignment::Horizontal::Center)
        .into()
}

/// The icon shows the mode the toggle switches to.
fn theme_toggle_icon(mode: ColorMode) -> &'static [u8] {
    match mode {
        ColorMode::Dark => icons::THEME_LIGHT,
        ColorMode::Light => icons::THEME_DARK,
    }
}

fn drawer_toggle_icon(open: bool) -> &'static [u8] {
    if open {
        icons::SIDEBAR_COLLAPSE
    } else {
        icons::SIDEBAR_EXPAND
    }
}

#[cfg(test)]
mod tests {
    use super::{drawer_toggle_icon, theme_toggle_icon};
    use crate::icons;
    use crate::theme::ColorMode;

    #[test]
    fn given_dark_mode_when_choosing_theme_icon_then_sun_is_shown() {
        assert_eq!(theme_toggle_icon(ColorMode::Dark), icons::THEME_LIGHT);
        assert_eq!(theme_toggle_icon(ColorMode::Light), icons::THEME_DARK);
    }

    #[test]
    fn given_open_flag_when_choosing_drawer_icon_then_chevron_points_to_action()
    {
        assert_eq!(drawer_toggle_icon(true), icons::SIDEBAR_COLLAPSE);
        assert_eq!(drawer_toggle_icon(false), icons::SIDEBAR_EXPAND);
    }
}
