use iced::widget::{container, text, tooltip};
use iced::{Border, Element, Shadow, Vector};

use crate::theme::ThemeProps;

const HINT_FONT_SIZE: f32 = 14.0;
const HINT_PADDING_Y: f32 = 6.0;
const HINT_PADDING_X: f32 = 8.0;
const HINT_RADIUS: f32 = 4.0;
const HINT_GAP: f32 = 6.0;

/// Props for attaching a right-side hover hint to an element.
#[derive(Debug, Clone)]
pub(crate) struct HintProps<'a> {
    pub(crate) label: String,
    pub(crate) enabled: bool,
    pub(crate) theme: ThemeProps<'a>,
}

/// Wrap `content` in a tooltip placed to its right, or return it unchanged
/// when hints are disabled.
pub(crate) fn view<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    props: HintProps<'a>,
) -> Element<'a, Message> {
    let content = content.into();
    if !props.enabled {
        return content;
    }

    let palette = props.theme.theme.iced_palette();
    let background = palette.tooltip_background;
    let foreground = palette.tooltip_foreground;

    let bubble = container(text(props.label).size(HINT_FONT_SIZE))
        .padding([HINT_PADDING_Y, HINT_PADDING_X])
        .style(move |_| container::Style {
            background: Some(background.into()),
            text_color: Some(foreground),
            border: Border {
                radius: HINT_RADIUS.into(),
                ..Border::default()
            },
            shadow: Shadow {
                color: iced::Color {
                    a: 0.3,
                    ..iced::Color::BLACK
                },
                offset: Vector::new(0.0, 2.0),
                blur_radius: 8.0,
            },
            ..container::Style::default()
        });

    tooltip(content, bubble, tooltip::Position::Right)
        .gap(HINT_GAP)
        .into()
}
