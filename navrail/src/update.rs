use iced::Task;

use super::{App, AppEvent};
use crate::routers;

/// Thin dispatch: route each event to its owning router or handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::IcedReady => Task::done(super::sync_routes_event()),
        // Sidebar widget
        AppEvent::Sidebar(event) => routers::sidebar::route(app, event),
        // Layout and color mode owners
        AppEvent::ToggleDrawer => routers::preferences::toggle_drawer(app),
        AppEvent::ToggleColorMode => {
            routers::preferences::toggle_color_mode(app)
        },
        AppEvent::Navigate { path } => {
            routers::navigation::navigate(app, path);
            Task::none()
        },
        // Preference persistence
        AppEvent::PreferencesSaved => routers::preferences::save_completed(app),
        AppEvent::PreferencesSaveFailed(message) => {
            routers::preferences::save_failed(app, &message)
        },
        // Direct operations
        AppEvent::Keyboard(event) => routers::shortcuts::route(event),
    }
}
