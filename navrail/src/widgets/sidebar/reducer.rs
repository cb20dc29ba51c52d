use iced::Task;
use navrail_ui_routes::RouteCatalog;

use super::event::{SidebarEffect, SidebarEvent, SidebarIntent};
use super::state::SidebarState;

/// Read-only context for sidebar reduction.
pub(crate) struct SidebarCtx<'a> {
    pub(crate) catalog: &'a RouteCatalog,
    pub(crate) roles: &'a [String],
}

/// Reduce a sidebar intent into state updates and effect events.
pub(super) fn reduce(
    state: &mut SidebarState,
    event: SidebarIntent,
    ctx: &SidebarCtx<'_>,
) -> Task<SidebarEvent> {
    match event {
        SidebarIntent::SyncRoutes => {
            if state.sync_routes(ctx.catalog, ctx.roles) {
                log::debug!(
                    "sidebar routes derived for roles {:?}: {} items",
                    ctx.roles,
                    state.routes().len()
                );
            }
            Task::none()
        },
        SidebarIntent::ItemPressed { index } => {
            match state.press_item(index) {
                Some(path) => navigate(path),
                None => {
                    log::debug!(
                        "ignoring press on unknown sidebar item {index}"
                    );
                    Task::none()
                },
            }
        },
        SidebarIntent::ChildPressed { index, child } => {
            match state.child_path(index, child) {
                Some(path) => navigate(path),
                None => Task::none(),
            }
        },
        SidebarIntent::ItemEntered { index } => {
            state.enter_item(index);
            Task::none()
        },
        SidebarIntent::ItemExited => {
            state.leave_item();
            Task::none()
        },
        SidebarIntent::ToggleColorMode => {
            Task::done(SidebarEvent::Effect(SidebarEffect::ToggleColorMode))
        },
        SidebarIntent::ToggleDrawer => {
            Task::done(SidebarEvent::Effect(SidebarEffect::ToggleDrawer))
        },
    }
}

fn navigate(path: String) -> Task<SidebarEvent> {
    Task::done(SidebarEvent::Effect(SidebarEffect::Navigate { path }))
}
