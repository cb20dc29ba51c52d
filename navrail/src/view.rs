use chrono::Datelike;
use iced::widget::{column, container, row, text};
use iced::{Element, Length, Theme};
use navrail_ui_routes::find_route;

use super::{APP_VERSION, App, AppEvent};
use crate::theme::ThemeProps;
use crate::widgets::sidebar::view::SidebarViewProps;
use crate::widgets::sidebar::{self, SidebarEvent, SidebarInputs};

const CONTENT_PADDING: f32 = 24.0;
const CONTENT_SPACING: f32 = 6.0;
const TITLE_FONT_SIZE: f32 = 24.0;
const PATH_FONT_SIZE: f32 = 13.0;
const UNKNOWN_ROUTE_TITLE: &str = "Page not found";

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme = app.theme_manager.current();
    let theme_props: ThemeProps<'_> = ThemeProps::new(theme);

    let sidebar_vm = app.widgets.sidebar.vm(sidebar_inputs(app));

    let sidebar = sidebar::view::view(SidebarViewProps {
        vm: sidebar_vm,
        theme: theme_props,
    })
    .map(|intent| AppEvent::Sidebar(SidebarEvent::Intent(intent)));

    row![sidebar, view_content(app, theme_props)]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_content<'a>(
    app: &'a App,
    theme: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let palette = theme.theme.iced_palette();
    let background = palette.background;
    let foreground = palette.foreground;
    let dim_foreground = palette.dim_foreground;

    let title = find_route(app.widgets.sidebar.routes(), &app.current_path)
        .map(|route| route.title.as_str())
        .unwrap_or(UNKNOWN_ROUTE_TITLE);

    let content = column![
        text(title).size(TITLE_FONT_SIZE).color(foreground),
        text(app.current_path.as_str())
            .size(PATH_FONT_SIZE)
            .color(dim_foreground),
    ]
    .spacing(CONTENT_SPACING);

    container(content)
        .padding(CONTENT_PADDING)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(background.into()),
            ..container::Style::default()
        })
        .into()
}

fn sidebar_inputs(app: &App) -> SidebarInputs<'_> {
    SidebarInputs {
        open: app.is_sidebar_open(),
        color_mode: app.theme_manager.mode(),
        current_path: &app.current_path,
        version: APP_VERSION,
        owner: &app.config.owner,
        year: current_year(),
    }
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}
