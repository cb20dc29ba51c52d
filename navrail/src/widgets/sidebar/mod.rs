mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{SidebarEffect, SidebarEvent, SidebarIntent};
use iced::Task;
pub(crate) use model::{SidebarInputs, SidebarViewModel};
use navrail_ui_routes::RouteDescriptor;
pub(crate) use reducer::SidebarCtx;
use state::SidebarState;

/// Sidebar widget owning its private route cache and selection state.
pub(crate) struct SidebarWidget {
    state: SidebarState,
}

impl SidebarWidget {
    /// Construct a sidebar with no routes derived yet.
    pub(crate) fn new() -> Self {
        Self {
            state: SidebarState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: SidebarIntent,
        ctx: &SidebarCtx<'_>,
    ) -> Task<SidebarEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm<'a>(
        &'a self,
        inputs: SidebarInputs<'a>,
    ) -> SidebarViewModel<'a> {
        SidebarViewModel::build(self.state.routes(), self.state.nav(), inputs)
    }

    /// Return the routes derived for the current roles.
    pub(crate) fn routes(&self) -> &[RouteDescriptor] {
        self.state.routes()
    }
}
