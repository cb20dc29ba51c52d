use iced::widget::{button, container, svg};
use iced::{Border, Element, Length, alignment};

use crate::theme::ThemeProps;

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// Props for rendering an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconButtonProps<'a> {
    pub(crate) icon: &'static [u8],
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) size: f32,
    pub(crate) icon_size: f32,
}

const ICON_BUTTON_RADIUS: f32 = 8.0;

/// Render a square icon button used for footer controls.
pub(crate) fn view<'a>(
    props: IconButtonProps<'a>,
) -> Element<'a, IconButtonEvent> {
    let palette = props.theme.theme.iced_palette();
    let base_color = palette.link;
    let hover_color = palette.hover;
    let hover_background = palette.hover_background;

    let icon = svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(props.icon_size))
        .height(Length::Fixed(props.icon_size))
        .style(move |_, status| {
            let color = if matches!(status, svg::Status::Hovered) {
                hover_color
            } else {
                base_color
            };

            svg::Style { color: Some(color) }
        });

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(icon_container)
        .on_press(IconButtonEvent::Pressed)
        .padding(0)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(move |_, status| button::Style {
            background: resolve_background(status, hover_background),
            border: Border {
                radius: ICON_BUTTON_RADIUS.into(),
                ..Border::default()
            },
            ..button::Style::default()
        })
        .into()
}

fn resolve_background(
    status: button::Status,
    hover_background: iced::Color,
) -> Option<iced::Background> {
    match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(hover_background.into())
        },
        button::Status::Active | button::Status::Disabled => None,
    }
}
