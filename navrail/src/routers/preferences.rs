use iced::Task;

use crate::app::{App, AppEvent};
use crate::config;

/// Flip the sidebar open flag and persist it.
pub(crate) fn toggle_drawer(app: &mut App) -> Task<AppEvent> {
    app.config.sidebar_open = !app.config.sidebar_open;
    log::debug!("sidebar open: {}", app.config.sidebar_open);
    app.persist.mark_dirty();
    request_persist(app)
}

/// Switch the color mode and persist it.
pub(crate) fn toggle_color_mode(app: &mut App) -> Task<AppEvent> {
    let mode = app.theme_manager.toggle_color_mode();
    app.config.color_mode = mode;
    log::debug!("color mode switched to {}", mode.label());
    app.persist.mark_dirty();
    request_persist(app)
}

/// Finish the running save and start another if preferences changed
/// meanwhile.
pub(crate) fn save_completed(app: &mut App) -> Task<AppEvent> {
    app.persist.complete();
    request_persist(app)
}

pub(crate) fn save_failed(app: &mut App, message: &str) -> Task<AppEvent> {
    app.persist.fail();
    log::warn!("failed to save preferences: {message}");
    Task::none()
}

fn request_persist(app: &mut App) -> Task<AppEvent> {
    if !app.persist.should_begin() {
        return Task::none();
    }

    app.persist.begin();
    let snapshot = app.config.clone();

    Task::perform(
        async move {
            config::save_config(&snapshot).map_err(|err| format!("{err}"))
        },
        |result| match result {
            Ok(()) => AppEvent::PreferencesSaved,
            Err(message) => AppEvent::PreferencesSaveFailed(message),
        },
    )
}
