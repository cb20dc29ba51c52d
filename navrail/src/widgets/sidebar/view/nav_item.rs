use iced::widget::{
    Column, button, column, container, mouse_area, row, svg, text,
};
use iced::{Border, Color, Element, Length, Padding, alignment};
use navrail_ui_routes::RouteDescriptor;

use crate::components::primitive::hint::{self, HintProps};
use crate::icons;
use crate::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::sidebar::event::SidebarIntent;
use crate::widgets::sidebar::model::NavItemViewModel;

const ITEM_ICON_SIZE: f32 = 20.0;
const ITEM_CHEVRON_SIZE: f32 = 14.0;
const ITEM_PADDING: f32 = 8.0;
const ITEM_SPACING: f32 = 10.0;
const ITEM_RADIUS: f32 = 8.0;
const ITEM_FONT_SIZE: f32 = 14.0;
const CHILD_FONT_SIZE: f32 = 13.0;
const CHILD_INDENT: f32 = 38.0;
const CHILD_PADDING_Y: f32 = 6.0;
const CHILD_SPACING: f32 = 2.0;

/// Props for a single navigation row.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavItemProps<'a> {
    pub(crate) item: NavItemViewModel<'a>,
    pub(crate) open: bool,
    pub(crate) width: Length,
    pub(crate) tooltips_enabled: bool,
    pub(crate) current_path: &'a str,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a nav item and, when expanded in the open layout, its sub-routes.
pub(crate) fn view(props: NavItemProps<'_>) -> Element<'_, SidebarIntent> {
    let NavItemProps {
        item,
        open,
        width,
        tooltips_enabled,
        current_path,
        theme,
    } = props;
    let palette = theme.theme.iced_palette();
    let route = item.route;
    let (foreground, background) =
        item_colors(palette, item.is_active, item.is_hovered);

    let icon = tinted_icon(
        icons::route_icon(route.icon),
        ITEM_ICON_SIZE,
        foreground,
    );
    let mut content = row![icon]
        .spacing(ITEM_SPACING)
        .align_y(alignment::Vertical::Center);

    if open {
        content = content.push(
            text(route.title.as_str())
                .size(ITEM_FONT_SIZE)
                .color(foreground)
                .width(Length::Fill),
        );
        if route.has_children() {
            let chevron = if item.is_expanded {
                icons::ITEM_EXPANDED
            } else {
                icons::SIDEBAR_EXPAND
            };
            content = content.push(tinted_icon(
                chevron,
                ITEM_CHEVRON_SIZE,
                foreground,
            ));
        }
    }

    let pressable = button(content)
        .on_press(SidebarIntent::ItemPressed { index: item.index })
        .padding(ITEM_PADDING)
        .width(width)
        .style(move |_, _| button::Style {
            background: background.map(Into::into),
            text_color: foreground,
            border: Border {
                radius: ITEM_RADIUS.into(),
                ..Border::default()
            },
            ..button::Style::default()
        });

    let tracked = mouse_area(pressable)
        .on_enter(SidebarIntent::ItemEntered { index: item.index })
        .on_exit(SidebarIntent::ItemExited);

    let anchored = hint::view(
        tracked,
        HintProps {
            label: route.title.clone(),
            enabled: tooltips_enabled,
            theme,
        },
    );

    if !(open && item.is_expanded && route.has_children()) {
        return container(anchored).width(width).into();
    }

    column![
        anchored,
        sub_routes(item.index, &route.children, current_path, palette)
    ]
    .spacing(CHILD_SPACING)
    .width(width)
    .into()
}

fn sub_routes<'a>(
    index: usize,
    children: &'a [RouteDescriptor],
    current_path: &str,
    palette: &IcedColorPalette,
) -> Element<'a, SidebarIntent> {
    let rows = children.iter().enumerate().map(|(child, route)| {
        sub_route_row(index, child, route, route.path == current_path, palette)
    });

    Column::with_children(rows)
        .spacing(CHILD_SPACING)
        .width(Length::Fill)
        .into()
}

fn sub_route_row<'a>(
    index: usize,
    child: usize,
    route: &'a RouteDescriptor,
    is_current: bool,
    palette: &IcedColorPalette,
) -> Element<'a, SidebarIntent> {
    let foreground = if is_current {
        palette.active
    } else {
        palette.link
    };
    let hover_color = palette.hover;
    let hover_background = palette.hover_background;

    button(
        text(route.title.as_str())
            .size(CHILD_FONT_SIZE)
            .width(Length::Fill),
    )
    .on_press(SidebarIntent::ChildPressed { index, child })
    .padding(Padding {
        top: CHILD_PADDING_Y,
        bottom: CHILD_PADDING_Y,
        left: CHILD_INDENT,
        right: ITEM_PADDING,
    })
    .width(Length::Fill)
    .style(move |_, status| {
        let hovered = matches!(status, button::Status::Hovered);
        button::Style {
            background: hovered.then(|| hover_background.into()),
            text_color: if hovered { hover_color } else { foreground },
            border: Border {
                radius: ITEM_RADIUS.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    })
    .into()
}

fn tinted_icon<'a>(
    icon: &'static [u8],
    size: f32,
    color: Color,
) -> svg::Svg<'a> {
    svg::Svg::new(svg::Handle::from_memory(icon))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_, _| svg::Style { color: Some(color) })
}

/// Foreground and optional background for a row; active wins over hover.
fn item_colors(
    palette: &IcedColorPalette,
    is_active: bool,
    is_hovered: bool,
) -> (Color, Option<Color>) {
    if is_active {
        (palette.active, Some(palette.active_background))
    } else if is_hovered {
        (palette.hover, Some(palette.hover_background))
    } else {
        (palette.link, None)
    }
}
