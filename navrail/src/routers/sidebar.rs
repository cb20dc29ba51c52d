use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::sidebar::{
    SidebarCtx, SidebarEffect, SidebarEvent, SidebarIntent,
};

/// Route a sidebar event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: SidebarEvent) -> Task<AppEvent> {
    match event {
        SidebarEvent::Intent(event) => route_intent(app, event),
        SidebarEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, event: SidebarIntent) -> Task<AppEvent> {
    let ctx = SidebarCtx {
        catalog: &app.catalog,
        roles: &app.config.roles,
    };

    app.widgets.sidebar.reduce(event, &ctx).map(AppEvent::Sidebar)
}

fn route_effect(effect: SidebarEffect) -> Task<AppEvent> {
    use SidebarEffect as E;

    match effect {
        E::ToggleColorMode => Task::done(AppEvent::ToggleColorMode),
        E::ToggleDrawer => Task::done(AppEvent::ToggleDrawer),
        E::Navigate { path } => Task::done(AppEvent::Navigate { path }),
    }
}
